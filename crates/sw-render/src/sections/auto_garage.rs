//! Auto-garage template family components.

use std::fmt::Write;

use sw_model::{FieldMap, RenderMode};

use crate::form::QuoteFormState;
use crate::html::{escape_html, link_href};

/// Field contract of the auto-garage hero section.
pub struct HeroFields {
    /// Main heading. Default: `"Expert Auto Repair Services"`.
    pub heading: String,
    /// Supporting line under the heading.
    pub subheading: String,
    /// Call-to-action button label.
    pub cta_label: String,
    /// Call-to-action target URL.
    pub cta_url: String,
}

impl HeroFields {
    pub const DEFAULT_HEADING: &'static str = "Expert Auto Repair Services";
    pub const DEFAULT_SUBHEADING: &'static str =
        "Fast, honest service for every make and model.";
    pub const DEFAULT_CTA_LABEL: &'static str = "Book a service";
    pub const DEFAULT_CTA_URL: &'static str = "/contact";

    /// Parse the field list once, applying per-field defaults.
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
            r#"<section class="sw-hero sw-garage-hero">"#,
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

/// Field contract of the services-list section. Three fixed item slots.
pub struct ServicesFields {
    pub heading: String,
    pub items: [(String, String); 3],
}

impl ServicesFields {
    pub const DEFAULT_HEADING: &'static str = "Our Services";
    pub const DEFAULT_ITEMS: [(&'static str, &'static str); 3] = [
        ("Oil & filter change", "Quick turnaround with quality parts."),
        ("Brake service", "Pads, discs, and fluid checked and replaced."),
        ("Diagnostics", "Modern equipment for every engine light."),
    ];

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        let item = |n: usize| {
            let (default_name, default_text) = Self::DEFAULT_ITEMS[n - 1];
            (
                fields
                    .text(&format!("service_{n}_name"), default_name)
                    .to_owned(),
                fields
                    .text(&format!("service_{n}_description"), default_text)
                    .to_owned(),
            )
        };
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            items: [item(1), item(2), item(3)],
        }
    }
}

pub(crate) fn services(fields: &FieldMap) -> String {
    let f = ServicesFields::from_map(fields);
    let mut out = String::with_capacity(512);
    write!(
        out,
        r#"<section class="sw-services"><h2>{}</h2><ul>"#,
        escape_html(&f.heading)
    )
    .unwrap();
    for (name, description) in &f.items {
        write!(
            out,
            "<li><h3>{}</h3><p>{}</p></li>",
            escape_html(name),
            escape_html(description)
        )
        .unwrap();
    }
    out.push_str("</ul></section>");
    out
}

/// Field contract of the testimonials section. Two quote slots.
pub struct TestimonialsFields {
    pub heading: String,
    pub quotes: [(String, String); 2],
}

impl TestimonialsFields {
    pub const DEFAULT_HEADING: &'static str = "What our customers say";
    pub const DEFAULT_QUOTES: [(&'static str, &'static str); 2] = [
        ("Great service, fair prices.", "A happy customer"),
        ("My car has never run better.", "A returning customer"),
    ];

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        let quote = |n: usize| {
            let (default_quote, default_author) = Self::DEFAULT_QUOTES[n - 1];
            (
                fields.text(&format!("quote_{n}"), default_quote).to_owned(),
                fields
                    .text(&format!("author_{n}"), default_author)
                    .to_owned(),
            )
        };
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            quotes: [quote(1), quote(2)],
        }
    }
}

pub(crate) fn testimonials(fields: &FieldMap) -> String {
    let f = TestimonialsFields::from_map(fields);
    let mut out = String::with_capacity(512);
    write!(
        out,
        r#"<section class="sw-testimonials"><h2>{}</h2>"#,
        escape_html(&f.heading)
    )
    .unwrap();
    for (quote, author) in &f.quotes {
        write!(
            out,
            "<blockquote><p>{}</p><cite>{}</cite></blockquote>",
            escape_html(quote),
            escape_html(author)
        )
        .unwrap();
    }
    out.push_str("</section>");
    out
}

/// Field contract of the quote-request form section.
pub struct QuoteFormFields {
    pub heading: String,
    pub intro: String,
}

impl QuoteFormFields {
    pub const DEFAULT_HEADING: &'static str = "Request a quote";
    pub const DEFAULT_INTRO: &'static str =
        "Tell us what your car needs and we'll get back to you with a price.";

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            intro: fields.text("intro", Self::DEFAULT_INTRO).to_owned(),
        }
    }
}

pub(crate) fn quote_form(fields: &FieldMap, mode: RenderMode) -> String {
    let f = QuoteFormFields::from_map(fields);
    format!(
        r#"<section class="sw-quote"><h2>{}</h2><p>{}</p>{}</section>"#,
        escape_html(&f.heading),
        escape_html(&f.intro),
        QuoteFormState::new().render(mode),
    )
}

/// Field contract of the footer section.
pub struct FooterFields {
    pub business_name: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
}

impl FooterFields {
    pub const DEFAULT_BUSINESS_NAME: &'static str = "Your local garage";
    pub const DEFAULT_ADDRESS: &'static str = "Visit us at our workshop";
    pub const DEFAULT_PHONE: &'static str = "Call us for an appointment";
    pub const DEFAULT_OPENING_HOURS: &'static str = "Mon\u{2013}Fri 08:00\u{2013}17:00";

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            business_name: fields
                .text("business_name", Self::DEFAULT_BUSINESS_NAME)
                .to_owned(),
            address: fields.text("address", Self::DEFAULT_ADDRESS).to_owned(),
            phone: fields.text("phone", Self::DEFAULT_PHONE).to_owned(),
            opening_hours: fields
                .text("opening_hours", Self::DEFAULT_OPENING_HOURS)
                .to_owned(),
        }
    }
}

pub(crate) fn footer(fields: &FieldMap) -> String {
    let f = FooterFields::from_map(fields);
    format!(
        concat!(
            r#"<footer class="sw-footer">"#,
            "<p>{name}</p><p>{address}</p><p>{phone}</p><p>{hours}</p>",
            "</footer>"
        ),
        name = escape_html(&f.business_name),
        address = escape_html(&f.address),
        phone = escape_html(&f.phone),
        hours = escape_html(&f.opening_hours),
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
    fn test_hero_uses_supplied_heading_verbatim() {
        let html = hero(&map(&[("heading", "Acme Motors")]), RenderMode::Public);
        assert!(html.contains("<h1>Acme Motors</h1>"));
        assert!(!html.contains(HeroFields::DEFAULT_HEADING));
    }

    #[test]
    fn test_hero_defaults_when_field_missing() {
        let html = hero(&map(&[]), RenderMode::Public);
        assert!(html.contains(HeroFields::DEFAULT_HEADING));
        assert!(html.contains(HeroFields::DEFAULT_SUBHEADING));
    }

    #[test]
    fn test_hero_defaults_when_value_empty() {
        let html = hero(&map(&[("heading", "")]), RenderMode::Public);
        assert!(html.contains(HeroFields::DEFAULT_HEADING));
    }

    #[test]
    fn test_hero_partial_fields_degrade_per_field() {
        // Supplied fields render live, missing ones fall back, within
        // one section.
        let html = hero(
            &map(&[("heading", "Acme Motors"), ("cta_label", "")]),
            RenderMode::Public,
        );
        assert!(html.contains("Acme Motors"));
        assert!(html.contains(HeroFields::DEFAULT_CTA_LABEL));
        assert!(html.contains(HeroFields::DEFAULT_SUBHEADING));
    }

    #[test]
    fn test_hero_escapes_tenant_content() {
        let html = hero(&map(&[("heading", "<Acme & Sons>")]), RenderMode::Public);
        assert!(html.contains("&lt;Acme &amp; Sons&gt;"));
    }

    #[test]
    fn test_hero_preview_disables_cta_link() {
        let html = hero(&map(&[("cta_url", "/book")]), RenderMode::Preview);
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains("/book"));
    }

    #[test]
    fn test_services_mixes_supplied_and_default_items() {
        let html = services(&map(&[("service_1_name", "MOT testing")]));
        assert!(html.contains("MOT testing"));
        assert!(html.contains("Brake service"));
    }

    #[test]
    fn test_quote_form_section_embeds_form() {
        let html = quote_form(&map(&[]), RenderMode::Public);
        assert!(html.contains(QuoteFormFields::DEFAULT_HEADING));
        assert!(html.contains("sw-quote-form"));
    }

    #[test]
    fn test_footer_defaults() {
        let html = footer(&map(&[]));
        assert!(html.contains(FooterFields::DEFAULT_BUSINESS_NAME));
    }
}
