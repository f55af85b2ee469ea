//! Generic marketing template family components.

use std::fmt::Write;

use sw_model::{FieldMap, RenderMode};

use crate::html::{escape_html, link_href};

/// Field contract of the marketing hero section.
pub struct HeroFields {
    pub heading: String,
    pub subheading: String,
    pub cta_label: String,
    pub cta_url: String,
}

impl HeroFields {
    pub const DEFAULT_HEADING: &'static str = "Grow your business online";
    pub const DEFAULT_SUBHEADING: &'static str =
        "A professional website, without the professional price tag.";
    pub const DEFAULT_CTA_LABEL: &'static str = "Get in touch";
    pub const DEFAULT_CTA_URL: &'static str = "/contact";

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            subheading: fields
                .text("subheading", Self::DEFAULT_SUBHEADING)
                .to_owned(),
            cta_label: fields.text("cta_label", Self::DEFAULT_CTA_LABEL).to_owned(),
            cta_url: fields.text("cta_url", Self::DEFAULT_CTA_URL).to_owned(),
        }
    }
}

pub(crate) fn hero(fields: &FieldMap, mode: RenderMode) -> String {
    let f = HeroFields::from_map(fields);
    format!(
        concat!(
            r#"<section class="sw-hero sw-marketing-hero">"#,
            "<h1>{heading}</h1>",
            "<p>{subheading}</p>",
            r#"<a class="sw-cta" href="{href}">{label}</a>"#,
            "</section>"
        ),
        heading = escape_html(&f.heading),
        subheading = escape_html(&f.subheading),
        href = link_href(&f.cta_url, mode),
        label = escape_html(&f.cta_label),
    )
}

/// Field contract of the feature-grid section. Three fixed slots.
pub struct FeaturesFields {
    pub heading: String,
    pub features: [(String, String); 3],
}

impl FeaturesFields {
    pub const DEFAULT_HEADING: &'static str = "Why choose us";
    pub const DEFAULT_FEATURES: [(&'static str, &'static str); 3] = [
        ("Fast", "Up and running in minutes, not weeks."),
        ("Flexible", "Change your content whenever you like."),
        ("Friendly", "Real people answer when you need help."),
    ];

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        let feature = |n: usize| {
            let (default_title, default_text) = Self::DEFAULT_FEATURES[n - 1];
            (
                fields
                    .text(&format!("feature_{n}_title"), default_title)
                    .to_owned(),
                fields
                    .text(&format!("feature_{n}_text"), default_text)
                    .to_owned(),
            )
        };
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            features: [feature(1), feature(2), feature(3)],
        }
    }
}

pub(crate) fn features(fields: &FieldMap) -> String {
    let f = FeaturesFields::from_map(fields);
    let mut out = String::with_capacity(512);
    write!(
        out,
        r#"<section class="sw-features"><h2>{}</h2><ul>"#,
        escape_html(&f.heading)
    )
    .unwrap();
    for (title, text) in &f.features {
        write!(
            out,
            "<li><h3>{}</h3><p>{}</p></li>",
            escape_html(title),
            escape_html(text)
        )
        .unwrap();
    }
    out.push_str("</ul></section>");
    out
}

/// Field contract of the call-to-action banner section.
pub struct CtaFields {
    pub heading: String,
    pub button_label: String,
    pub button_url: String,
}

impl CtaFields {
    pub const DEFAULT_HEADING: &'static str = "Ready to get started?";
    pub const DEFAULT_BUTTON_LABEL: &'static str = "Contact us";
    pub const DEFAULT_BUTTON_URL: &'static str = "/contact";

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            button_label: fields
                .text("button_label", Self::DEFAULT_BUTTON_LABEL)
                .to_owned(),
            button_url: fields
                .text("button_url", Self::DEFAULT_BUTTON_URL)
                .to_owned(),
        }
    }
}

pub(crate) fn cta(fields: &FieldMap, mode: RenderMode) -> String {
    let f = CtaFields::from_map(fields);
    format!(
        r#"<section class="sw-cta-banner"><h2>{}</h2><a class="sw-cta" href="{}">{}</a></section>"#,
        escape_html(&f.heading),
        link_href(&f.button_url, mode),
        escape_html(&f.button_label),
    )
}

/// Field contract of the marketing footer section.
pub struct FooterFields {
    pub company: String,
    pub tagline: String,
}

impl FooterFields {
    pub const DEFAULT_COMPANY: &'static str = "Your company";
    pub const DEFAULT_TAGLINE: &'static str = "Built with Siteworks";

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            company: fields.text("company", Self::DEFAULT_COMPANY).to_owned(),
            tagline: fields.text("tagline", Self::DEFAULT_TAGLINE).to_owned(),
        }
    }
}

pub(crate) fn footer(fields: &FieldMap) -> String {
    let f = FooterFields::from_map(fields);
    format!(
        r#"<footer class="sw-footer"><p>{}</p><p>{}</p></footer>"#,
        escape_html(&f.company),
        escape_html(&f.tagline),
    )
}

#[cfg(test)]
mod tests {
    use sw_model::Field;

    use super::*;

    fn map(pairs: &[(&str, &str)]) -> FieldMap {
        let fields: Vec<Field> = pairs
            .iter()
            .map(|(key, value)| Field {
                key: (*key).to_owned(),
                label: String::new(),
                value: (*value).to_owned(),
                order: 0,
            })
            .collect();
        FieldMap::from_fields(&fields)
    }

    #[test]
    fn test_hero_supplied_value_appears_verbatim() {
        let html = hero(
            &map(&[("heading", "Websites for plumbers, painters & more")]),
            RenderMode::Public,
        );
        assert!(html.contains("Websites for plumbers, painters &amp; more"));
    }

    #[test]
    fn test_features_defaults() {
        let html = features(&map(&[]));
        assert!(html.contains(FeaturesFields::DEFAULT_HEADING));
        assert!(html.contains("Up and running in minutes, not weeks."));
    }

    #[test]
    fn test_cta_preview_neuters_link() {
        let html = cta(&map(&[("button_url", "/signup")]), RenderMode::Preview);
        assert!(!html.contains("/signup"));
    }
}
