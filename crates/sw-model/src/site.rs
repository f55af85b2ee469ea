//! Site snapshot types.
//!
//! The backend delivers a published site as one JSON document:
//! project → pages → sections → fields. These types mirror that wire
//! shape. Unknown JSON keys are ignored and optional keys default, so
//! older engine versions keep rendering payloads produced by newer
//! backends.

use serde::{Deserialize, Serialize};

use crate::fields::FieldMap;

/// Operating mode for a render pass.
///
/// `Public` is the end-customer view. `Preview` is the dashboard
/// edit-preview: draft pages become visible and interactive affordances
/// (navigation links, form submission) are neutered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Published site as end customers see it.
    #[default]
    Public,
    /// Dashboard edit-preview.
    Preview,
}

/// One tenant's published website.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteProject {
    /// Unique site key, used in API paths.
    pub slug: String,
    /// Display name of the site.
    pub name: String,
    /// Selects the rendering strategy for sites without structured
    /// section data.
    #[serde(default)]
    pub site_template_key: String,
    /// Color tokens for the site's visual theme.
    #[serde(default)]
    pub theme: Theme,
    /// Pages in the order the backend returned them.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl SiteProject {
    /// True when any page carries at least one section with a non-empty
    /// field list.
    ///
    /// This is the structured-section check used for strategy selection.
    /// It deliberately ignores `is_published` so that the selected
    /// strategy never differs between public and preview renders.
    #[must_use]
    pub fn has_structured_sections(&self) -> bool {
        self.pages
            .iter()
            .flat_map(|page| &page.sections)
            .any(|section| !section.fields.is_empty())
    }

    /// Flatten all pages' sections into one render sequence.
    ///
    /// For each page in the array order the backend gave us, that page's
    /// sections sorted ascending by `order` (stable, so ties preserve the
    /// source order). Pages themselves are not re-sorted: the rendered
    /// sequence follows the payload's page order verbatim.
    ///
    /// In [`RenderMode::Public`], unpublished pages are skipped; the
    /// preview includes them so drafts are visible in the editor.
    #[must_use]
    pub fn flatten_sections(&self, mode: RenderMode) -> Vec<&Section> {
        self.pages
            .iter()
            .filter(|page| page.is_published || mode == RenderMode::Preview)
            .flat_map(Page::ordered_sections)
            .collect()
    }

    /// The page rendered first, if any.
    ///
    /// Used for document-level concerns (SEO title and description).
    /// Follows the same page order as [`flatten_sections`](Self::flatten_sections).
    #[must_use]
    pub fn first_page(&self, mode: RenderMode) -> Option<&Page> {
        self.pages
            .iter()
            .find(|page| page.is_published || mode == RenderMode::Preview)
    }
}

/// One page of a site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page key within the site.
    #[serde(default)]
    pub slug: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// BCP 47 language tag for the page content.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Sort key among the site's pages.
    #[serde(default)]
    pub order: i64,
    /// Draft pages are hidden from public renders.
    #[serde(default = "default_true")]
    pub is_published: bool,
    /// Content blocks placed on this page.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Search-engine metadata, when the tenant provided any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl Page {
    /// Sections sorted ascending by `order`.
    ///
    /// The sort is stable: sections sharing an `order` value keep the
    /// array order the backend returned.
    #[must_use]
    pub fn ordered_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|section| section.order);
        sections
    }
}

/// One content block on a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Backend identity of this placement.
    #[serde(default)]
    pub id: i64,
    /// Dispatch key selecting the component that renders this section,
    /// e.g. `"jcw-auto-garage-modern-01-hero-01"`.
    pub identifier: String,
    /// Editor-facing label; never rendered.
    #[serde(default)]
    pub internal_name: String,
    /// Coarse section category from the authoring tool.
    #[serde(default)]
    pub section_type: String,
    /// Sort key within the page.
    #[serde(default)]
    pub order: i64,
    /// Inactive sections are skipped by every render pass.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Named values the tenant filled in.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Section {
    /// Fold this section's field list into a key→value lookup.
    #[must_use]
    pub fn field_map(&self) -> FieldMap {
        FieldMap::from_fields(&self.fields)
    }
}

/// One named value inside a section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Lookup key. Older payloads used `name` for this attribute.
    #[serde(alias = "name")]
    pub key: String,
    /// Editor-facing label; never rendered.
    #[serde(default)]
    pub label: String,
    /// The value. May be empty, in which case components fall back to
    /// their per-field default copy.
    #[serde(default)]
    pub value: String,
    /// Sort key among the section's fields.
    #[serde(default)]
    pub order: i64,
}

/// Search-engine metadata for a page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    /// `<title>` override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// `<meta name="description">` content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

/// Color tokens for a site's visual theme.
///
/// Missing tokens fall back to the platform palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Accent color for headings, buttons, and links.
    pub primary: String,
    /// Secondary accent color.
    pub secondary: String,
    /// Page background color.
    pub background: String,
    /// Body text color.
    pub text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1d4ed8".to_owned(),
            secondary: "#f59e0b".to_owned(),
            background: "#ffffff".to_owned(),
            text: "#111827".to_owned(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_locale() -> String {
    "en".to_owned()
}
