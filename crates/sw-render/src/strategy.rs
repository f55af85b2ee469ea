//! Rendering strategy selection.
//!
//! One site maps to exactly one strategy. The decision is pure and
//! total: structured section data wins over any template key, a known
//! template key selects its legacy page, and everything else falls
//! through to the raw-JSON operator view.

use sw_model::SiteProject;

/// How a site gets rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Generic section-driven renderer over the flattened section list.
    Sections,
    /// One of the fixed legacy full-page templates.
    Legacy(LegacyTemplate),
    /// Raw JSON payload for operator/developer inspection. Never shown
    /// to end customers in production use.
    DebugJson,
}

/// Legacy full-page templates, retained for sites created before the
/// section system existed.
///
/// Each receives the whole site and lays out hard-coded markup itself;
/// none of them consult the section registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegacyTemplate {
    /// `"restaurant-modern"`: single-page restaurant site.
    RestaurantModern,
    /// `"jcw-main"`: the platform's own marketing site.
    JcwMain,
    /// `"auto-garage-modern"`: single-page auto-garage site.
    AutoGarageModern,
}

impl LegacyTemplate {
    /// Look up a legacy template by its site template key.
    ///
    /// Exact string match; unknown keys return `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "restaurant-modern" => Some(Self::RestaurantModern),
            "jcw-main" => Some(Self::JcwMain),
            "auto-garage-modern" => Some(Self::AutoGarageModern),
            _ => None,
        }
    }

    /// The site template key this variant matches.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::RestaurantModern => "restaurant-modern",
            Self::JcwMain => "jcw-main",
            Self::AutoGarageModern => "auto-garage-modern",
        }
    }
}

/// Decide which rendering strategy applies to a site.
///
/// Priority order:
/// 1. Any page with a section carrying a non-empty field list selects
///    the generic section renderer, regardless of the template key.
/// 2. A known `site_template_key` selects its legacy template.
/// 3. Everything else falls back to the debug view.
#[must_use]
pub fn select_strategy(site: &SiteProject) -> RenderStrategy {
    if site.has_structured_sections() {
        return RenderStrategy::Sections;
    }
    match LegacyTemplate::from_key(&site.site_template_key) {
        Some(template) => RenderStrategy::Legacy(template),
        None => RenderStrategy::DebugJson,
    }
}

#[cfg(test)]
mod tests {
    use sw_model::{Field, Page, Section, SiteProject, Theme};

    use super::*;

    fn site_with_key(key: &str) -> SiteProject {
        SiteProject {
            slug: "test".to_owned(),
            name: "Test".to_owned(),
            site_template_key: key.to_owned(),
            theme: Theme::default(),
            pages: Vec::new(),
        }
    }

    fn structured_page() -> Page {
        Page {
            slug: "home".to_owned(),
            title: "Home".to_owned(),
            locale: "en".to_owned(),
            order: 0,
            is_published: true,
            sections: vec![Section {
                id: 1,
                identifier: "jcw-auto-garage-modern-01-hero-01".to_owned(),
                internal_name: String::new(),
                section_type: String::new(),
                order: 0,
                is_active: true,
                fields: vec![Field {
                    key: "heading".to_owned(),
                    label: String::new(),
                    value: "Acme Motors".to_owned(),
                    order: 0,
                }],
            }],
            seo: None,
        }
    }

    #[test]
    fn test_no_sections_no_known_key_selects_debug() {
        assert_eq!(
            select_strategy(&site_with_key("never-registered")),
            RenderStrategy::DebugJson
        );
        assert_eq!(select_strategy(&site_with_key("")), RenderStrategy::DebugJson);
    }

    #[test]
    fn test_known_keys_select_legacy_templates() {
        assert_eq!(
            select_strategy(&site_with_key("restaurant-modern")),
            RenderStrategy::Legacy(LegacyTemplate::RestaurantModern)
        );
        assert_eq!(
            select_strategy(&site_with_key("jcw-main")),
            RenderStrategy::Legacy(LegacyTemplate::JcwMain)
        );
        assert_eq!(
            select_strategy(&site_with_key("auto-garage-modern")),
            RenderStrategy::Legacy(LegacyTemplate::AutoGarageModern)
        );
    }

    #[test]
    fn test_structured_sections_take_precedence_over_legacy_key() {
        let mut site = site_with_key("jcw-main");
        site.pages.push(structured_page());

        assert_eq!(select_strategy(&site), RenderStrategy::Sections);
    }

    #[test]
    fn test_sections_without_fields_do_not_count_as_structured() {
        let mut site = site_with_key("restaurant-modern");
        let mut page = structured_page();
        page.sections[0].fields.clear();
        site.pages.push(page);

        assert_eq!(
            select_strategy(&site),
            RenderStrategy::Legacy(LegacyTemplate::RestaurantModern)
        );
    }

    #[test]
    fn test_from_key_round_trips() {
        for template in [
            LegacyTemplate::RestaurantModern,
            LegacyTemplate::JcwMain,
            LegacyTemplate::AutoGarageModern,
        ] {
            assert_eq!(LegacyTemplate::from_key(template.key()), Some(template));
        }
    }
}
