//! Legacy full-page templates.
//!
//! Sites created before the section system carry a template key instead
//! of structured section data. Each template here is a self-contained
//! page component: it receives the whole site snapshot and lays out
//! hard-coded markup itself, without consulting the section registry.
//! Missing content degrades to placeholder copy, the same product rule
//! the section components follow.

mod auto_garage;
mod jcw_main;
mod restaurant;

use sw_model::{Page, RenderMode, SiteProject};

use crate::html::{escape_html, link_href};
use crate::strategy::LegacyTemplate;

/// Render the body markup for a legacy template.
pub(crate) fn render(template: LegacyTemplate, site: &SiteProject, mode: RenderMode) -> String {
    match template {
        LegacyTemplate::RestaurantModern => restaurant::render(site, mode),
        LegacyTemplate::JcwMain => jcw_main::render(site, mode),
        LegacyTemplate::AutoGarageModern => auto_garage::render(site, mode),
    }
}

/// Shared page navigation for the legacy layouts.
///
/// Lists published pages in payload order; drafts only appear in the
/// preview.
fn page_nav(site: &SiteProject, mode: RenderMode) -> String {
    let visible: Vec<&Page> = site
        .pages
        .iter()
        .filter(|page| page.is_published || mode == RenderMode::Preview)
        .collect();
    if visible.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<nav class="sw-nav"><ul>"#);
    for page in visible {
        let title = if page.title.is_empty() {
            &page.slug
        } else {
            &page.title
        };
        out.push_str(&format!(
            r#"<li><a href="{}">{}</a></li>"#,
            link_href(&format!("/{}", page.slug), mode),
            escape_html(title),
        ));
    }
    out.push_str("</ul></nav>");
    out
}

#[cfg(test)]
mod tests {
    use sw_model::Theme;

    use super::*;

    fn page(slug: &str, title: &str, published: bool) -> Page {
        Page {
            slug: slug.to_owned(),
            title: title.to_owned(),
            locale: "en".to_owned(),
            order: 0,
            is_published: published,
            sections: Vec::new(),
            seo: None,
        }
    }

    fn site(pages: Vec<Page>) -> SiteProject {
        SiteProject {
            slug: "marys-restaurant".to_owned(),
            name: "Mary's Restaurant".to_owned(),
            site_template_key: "restaurant-modern".to_owned(),
            theme: Theme::default(),
            pages,
        }
    }

    #[test]
    fn test_page_nav_lists_published_pages() {
        let nav = page_nav(
            &site(vec![page("menu", "Menu", true), page("draft", "Draft", false)]),
            RenderMode::Public,
        );
        assert!(nav.contains("Menu"));
        assert!(!nav.contains("Draft"));
    }

    #[test]
    fn test_page_nav_preview_includes_drafts_with_dead_links() {
        let nav = page_nav(
            &site(vec![page("draft", "Draft", false)]),
            RenderMode::Preview,
        );
        assert!(nav.contains("Draft"));
        assert!(nav.contains(r##"href="#""##));
    }

    #[test]
    fn test_page_nav_empty_site() {
        assert_eq!(page_nav(&site(Vec::new()), RenderMode::Public), "");
    }

    #[test]
    fn test_every_template_renders_site_name() {
        let site = site(vec![page("menu", "Menu", true)]);
        for template in [
            LegacyTemplate::RestaurantModern,
            LegacyTemplate::JcwMain,
            LegacyTemplate::AutoGarageModern,
        ] {
            let body = render(template, &site, RenderMode::Public);
            assert!(
                body.contains("Mary&#39;s Restaurant"),
                "{template:?} should render the site name"
            );
        }
    }
}
