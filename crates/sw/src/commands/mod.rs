//! CLI command implementations.

mod inspect;
mod render;

pub(crate) use inspect::InspectArgs;
pub(crate) use render::RenderArgs;

use std::time::Duration;

use sw_client::{ClientConfig, SiteClient};
use sw_config::Config;

/// Build an API client from loaded configuration.
pub(crate) fn client_from_config(config: &Config) -> SiteClient {
    SiteClient::new(
        ClientConfig::new(config.api.base_url.clone())
            .timeout(Duration::from_secs(config.api.timeout_secs)),
    )
}
