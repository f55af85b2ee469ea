//! Site rendering pipeline.
//!
//! [`render_site`] is the entry point: it selects a strategy for the
//! snapshot and produces a complete HTML document. [`render_sections`]
//! is the generic section-driven renderer underneath it, usable on its
//! own when the caller already holds a flattened section list.

use sw_model::{RenderMode, Section, SiteProject, Theme};

use crate::debug::render_debug_json;
use crate::html::{document_shell, escape_html};
use crate::legacy;
use crate::registry::SectionKind;
use crate::sections::render_section;
use crate::strategy::{RenderStrategy, select_strategy};

/// Result of rendering a site snapshot.
#[derive(Clone, Debug)]
pub struct RenderedSite {
    /// Complete HTML document.
    pub html: String,
    /// Document title that was used.
    pub title: String,
    /// Strategy the selector chose.
    pub strategy: RenderStrategy,
}

/// Render a flattened, ordered section list.
///
/// Sections render in the given order and their output is concatenated.
/// Inactive sections are skipped. Sections whose identifier is not in
/// the registry are skipped silently: a page containing an unreleased
/// section type renders exactly as if that section were absent, with
/// every other section unaffected.
#[must_use]
pub fn render_sections(sections: &[&Section], mode: RenderMode) -> String {
    let mut out = String::new();
    for section in sections {
        if !section.is_active {
            continue;
        }
        let Some(kind) = SectionKind::parse(&section.identifier) else {
            tracing::debug!(
                identifier = %section.identifier,
                "Skipping section with unknown identifier"
            );
            continue;
        };
        out.push_str(&render_section(kind, &section.field_map(), mode));
    }
    out
}

/// Render a site snapshot to a complete HTML document.
///
/// Picks the strategy via [`select_strategy`] and wraps the strategy's
/// body markup in the document shell (title and meta description from
/// the first page's SEO data when present, theme tokens as CSS custom
/// properties).
#[must_use]
pub fn render_site(site: &SiteProject, mode: RenderMode) -> RenderedSite {
    let strategy = select_strategy(site);

    let body = match strategy {
        RenderStrategy::Sections => render_sections(&site.flatten_sections(mode), mode),
        RenderStrategy::Legacy(template) => legacy::render(template, site, mode),
        RenderStrategy::DebugJson => render_debug_json(site),
    };

    let seo = site.first_page(mode).and_then(|page| page.seo.as_ref());
    let title = seo
        .and_then(|seo| seo.meta_title.clone())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| site.name.clone());
    let description = seo.and_then(|seo| seo.meta_description.as_deref());

    RenderedSite {
        html: document_shell(&title, description, &site.theme, &body),
        title,
        strategy,
    }
}

/// Render the graceful "site not found" document.
///
/// Every fetch failure — absent slug, transport error, undecodable
/// payload — maps onto this same empty state; only the log line
/// distinguishes them.
#[must_use]
pub fn render_not_found(slug: &str) -> String {
    let body = format!(
        concat!(
            r#"<section class="sw-not-found">"#,
            "<h1>Site not found</h1>",
            "<p>There is no published site at <strong>{slug}</strong>.</p>",
            "</section>"
        ),
        slug = escape_html(slug),
    );
    document_shell("Site not found", None, &Theme::default(), &body)
}
