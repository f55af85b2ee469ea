//! `inspect` command: show a site's payload and selected strategy.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use sw_config::{CliSettings, Config};
use sw_render::select_strategy;

use crate::commands::client_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `inspect` command.
#[derive(Args)]
pub(crate) struct InspectArgs {
    /// Site slug to inspect.
    pub slug: String,

    /// Backend API base URL (overrides configuration).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a siteworks.toml configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(long)]
    pub verbose: bool,
}

impl InspectArgs {
    /// Execute the inspect command.
    ///
    /// Unlike `render`, a fetch failure here is a command failure: the
    /// operator asked to see the payload, so there is nothing useful to
    /// degrade to.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            base_url: self.base_url.clone(),
            timeout_secs: None,
            preview: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let client = client_from_config(&config);
        let site = client.fetch_site(&self.slug)?;

        output.highlight(&format!("Site: {} ({})", site.name, site.slug));
        output.info(&format!(
            "Template key: {}",
            if site.site_template_key.is_empty() {
                "(none)"
            } else {
                &site.site_template_key
            }
        ));
        output.info(&format!("Strategy: {:?}", select_strategy(&site)));
        output.info(&format!(
            "Pages: {} ({} sections)",
            site.pages.len(),
            site.pages.iter().map(|p| p.sections.len()).sum::<usize>()
        ));

        let json = serde_json::to_string_pretty(&site)?;
        let mut stdout = std::io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;

        Ok(())
    }
}
