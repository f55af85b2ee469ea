//! Backend API client for Siteworks.
//!
//! Provides a sync HTTP client for the backend's public site API:
//! - [`SiteClient::fetch_site`]: one round-trip fetch of a published
//!   site snapshot
//! - quote-request submission via the
//!   [`QuoteTransport`](sw_render::QuoteTransport) seam
//!
//! The client takes its configuration at construction time; nothing in
//! this crate reads environment state.
//!
//! # Example
//!
//! ```no_run
//! use sw_client::{ClientConfig, SiteClient};
//!
//! let client = SiteClient::new(ClientConfig::new("https://api.example.com"));
//! match client.fetch_site("marys-restaurant") {
//!     Ok(site) => println!("{}", site.name),
//!     Err(error) => eprintln!("{error}"),
//! }
//! ```

mod client;
mod error;

pub use client::{ClientConfig, SiteClient};
pub use error::FetchError;
