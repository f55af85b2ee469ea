//! Published site data model for Siteworks.
//!
//! This crate provides the read-only snapshot types delivered by the
//! backend's public site endpoint:
//! - [`SiteProject`]: one tenant's published website
//! - [`Page`] / [`Section`] / [`Field`]: the page → section → field tree
//! - [`FieldMap`]: key→value lookup built from a section's field list
//! - [`QuoteRequest`]: the outbound quote-request payload
//!
//! All entities are fetched, rendered, and discarded; nothing here
//! mutates or persists them.
//!
//! # Example
//!
//! ```
//! use sw_model::{RenderMode, SiteProject};
//!
//! let site: SiteProject = serde_json::from_str(
//!     r#"{"slug": "acme", "name": "Acme Motors", "pages": []}"#,
//! ).unwrap();
//!
//! assert!(!site.has_structured_sections());
//! assert!(site.flatten_sections(RenderMode::Public).is_empty());
//! ```

mod fields;
mod quote;
mod site;

pub use fields::FieldMap;
pub use quote::QuoteRequest;
pub use site::{Field, Page, RenderMode, Section, Seo, SiteProject, Theme};
