//! `render` command: fetch a site and write its HTML document.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use sw_config::{CliSettings, Config, ModeSetting};
use sw_render::{RenderMode, render_not_found, render_site};

use crate::commands::client_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `render` command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Site slug to render.
    pub slug: String,

    /// Write the document to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Render the dashboard edit-preview instead of the public site.
    #[arg(long)]
    pub preview: bool,

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

impl RenderArgs {
    /// Execute the render command.
    ///
    /// A missing or unreachable site is not a command failure: the
    /// not-found document is written instead, matching what the public
    /// surface would serve.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            base_url: self.base_url.clone(),
            timeout_secs: None,
            preview: self.preview.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let mode = match config.render.mode {
            ModeSetting::Public => RenderMode::Public,
            ModeSetting::Preview => RenderMode::Preview,
        };

        let client = client_from_config(&config);

        let html = match client.fetch_site(&self.slug) {
            Ok(site) => {
                let rendered = render_site(&site, mode);
                output.success(&format!(
                    "Rendered '{}' with {:?} strategy",
                    self.slug, rendered.strategy
                ));
                rendered.html
            }
            Err(error) => {
                if error.is_not_found() {
                    tracing::info!(slug = %self.slug, "Site not found");
                } else {
                    tracing::warn!(
                        slug = %self.slug,
                        error = %error,
                        "Site fetch failed; rendering the not-found page"
                    );
                }
                output.warning(&format!("No site for '{}': {error}", self.slug));
                render_not_found(&self.slug)
            }
        };

        match &self.out {
            Some(path) => std::fs::write(path, html)?,
            None => std::io::stdout().write_all(html.as_bytes())?,
        }

        Ok(())
    }
}
