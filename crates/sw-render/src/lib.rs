//! Template selection and section rendering for Siteworks.
//!
//! This crate turns a fetched [`SiteProject`](sw_model::SiteProject)
//! snapshot into a complete HTML document. It has three layers:
//!
//! - [`select_strategy`]: decides which rendering strategy applies to a
//!   site (generic section renderer, a legacy full-page template, or the
//!   raw-JSON operator fallback).
//! - [`SectionKind`]: the closed registry mapping section identifier
//!   strings to concrete components. Unknown identifiers render nothing.
//! - [`render_site`]: the pipeline entry point producing a
//!   [`RenderedSite`].
//!
//! Everything here is a pure function of the snapshot; the one
//! exception is the quote form ([`QuoteFormState`]), whose submission
//! goes through the [`QuoteTransport`] seam implemented by `sw-client`.
//!
//! # Example
//!
//! ```
//! use sw_model::{RenderMode, SiteProject};
//! use sw_render::{RenderStrategy, render_site, select_strategy};
//!
//! let site: SiteProject = serde_json::from_str(
//!     r#"{"slug": "acme", "name": "Acme", "pages": []}"#,
//! ).unwrap();
//!
//! assert_eq!(select_strategy(&site), RenderStrategy::DebugJson);
//! let rendered = render_site(&site, RenderMode::Public);
//! assert!(rendered.html.contains("<!DOCTYPE html>"));
//! ```

mod debug;
mod form;
mod html;
mod legacy;
mod registry;
mod renderer;
mod sections;
mod strategy;

pub use debug::render_debug_json;
pub use form::{FormStatus, QuoteFormContext, QuoteFormState, QuoteTransport, SubmitError};
pub use html::escape_html;
pub use registry::{SectionKind, idents};
pub use renderer::{RenderedSite, render_not_found, render_sections, render_site};
pub use strategy::{LegacyTemplate, RenderStrategy, select_strategy};

// Re-export the mode flag so downstream crates don't need sw-model just
// to pick a render pass.
pub use sw_model::RenderMode;
