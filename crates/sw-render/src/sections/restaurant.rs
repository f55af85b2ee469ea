//! Restaurant template family components.

use std::fmt::Write;

use sw_model::{FieldMap, RenderMode};

use crate::html::{escape_html, link_href};

/// Field contract of the restaurant hero section.
pub struct HeroFields {
    /// Main heading. Default: `"A table is waiting for you"`.
    pub heading: String,
    pub tagline: String,
    pub reservation_label: String,
    pub reservation_url: String,
}

impl HeroFields {
    pub const DEFAULT_HEADING: &'static str = "A table is waiting for you";
    pub const DEFAULT_TAGLINE: &'static str = "Seasonal dishes, cooked with care.";
    pub const DEFAULT_RESERVATION_LABEL: &'static str = "Reserve a table";
    pub const DEFAULT_RESERVATION_URL: &'static str = "/reservations";

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            tagline: fields.text("tagline", Self::DEFAULT_TAGLINE).to_owned(),
            reservation_label: fields
                .text("reservation_label", Self::DEFAULT_RESERVATION_LABEL)
                .to_owned(),
            reservation_url: fields
                .text("reservation_url", Self::DEFAULT_RESERVATION_URL)
                .to_owned(),
        }
    }
}

pub(crate) fn hero(fields: &FieldMap, mode: RenderMode) -> String {
    let f = HeroFields::from_map(fields);
    format!(
        concat!(
            r#"<section class="sw-hero sw-restaurant-hero">"#,
            "<h1>{heading}</h1>",
            "<p>{tagline}</p>",
            r#"<a class="sw-cta" href="{href}">{label}</a>"#,
            "</section>"
        ),
        heading = escape_html(&f.heading),
        tagline = escape_html(&f.tagline),
        href = link_href(&f.reservation_url, mode),
        label = escape_html(&f.reservation_label),
    )
}

/// Field contract of the menu section. Three fixed dish slots.
pub struct MenuFields {
    pub heading: String,
    pub dishes: [(String, String, String); 3],
}

impl MenuFields {
    pub const DEFAULT_HEADING: &'static str = "Our Menu";
    pub const DEFAULT_DISHES: [(&'static str, &'static str, &'static str); 3] = [
        ("Soup of the day", "Ask your server", "6.50"),
        ("House burger", "Aged beef, brioche, fries", "14.00"),
        ("Catch of the day", "From the market this morning", "18.50"),
    ];

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        let dish = |n: usize| {
            let (default_name, default_description, default_price) = Self::DEFAULT_DISHES[n - 1];
            (
                fields
                    .text(&format!("dish_{n}_name"), default_name)
                    .to_owned(),
                fields
                    .text(&format!("dish_{n}_description"), default_description)
                    .to_owned(),
                fields
                    .text(&format!("dish_{n}_price"), default_price)
                    .to_owned(),
            )
        };
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            dishes: [dish(1), dish(2), dish(3)],
        }
    }
}

pub(crate) fn menu(fields: &FieldMap) -> String {
    let f = MenuFields::from_map(fields);
    let mut out = String::with_capacity(512);
    write!(
        out,
        r#"<section class="sw-menu"><h2>{}</h2><ul>"#,
        escape_html(&f.heading)
    )
    .unwrap();
    for (name, description, price) in &f.dishes {
        write!(
            out,
            r#"<li><h3>{}</h3><p>{}</p><span class="sw-price">{}</span></li>"#,
            escape_html(name),
            escape_html(description),
            escape_html(price)
        )
        .unwrap();
    }
    out.push_str("</ul></section>");
    out
}

/// Field contract of the opening-hours section.
pub struct HoursFields {
    pub heading: String,
    pub weekdays: String,
    pub weekend: String,
}

impl HoursFields {
    pub const DEFAULT_HEADING: &'static str = "Opening Hours";
    pub const DEFAULT_WEEKDAYS: &'static str = "Mon\u{2013}Fri 11:00\u{2013}22:00";
    pub const DEFAULT_WEEKEND: &'static str = "Sat\u{2013}Sun 10:00\u{2013}23:00";

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            heading: fields.text("heading", Self::DEFAULT_HEADING).to_owned(),
            weekdays: fields.text("weekdays", Self::DEFAULT_WEEKDAYS).to_owned(),
            weekend: fields.text("weekend", Self::DEFAULT_WEEKEND).to_owned(),
        }
    }
}

pub(crate) fn hours(fields: &FieldMap) -> String {
    let f = HoursFields::from_map(fields);
    format!(
        r#"<section class="sw-hours"><h2>{}</h2><p>{}</p><p>{}</p></section>"#,
        escape_html(&f.heading),
        escape_html(&f.weekdays),
        escape_html(&f.weekend),
    )
}

/// Field contract of the restaurant footer section.
pub struct FooterFields {
    pub restaurant_name: String,
    pub address: String,
    pub phone: String,
}

impl FooterFields {
    pub const DEFAULT_RESTAURANT_NAME: &'static str = "Our restaurant";
    pub const DEFAULT_ADDRESS: &'static str = "Find us in the heart of town";
    pub const DEFAULT_PHONE: &'static str = "Call us to book";

    #[must_use]
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            restaurant_name: fields
                .text("restaurant_name", Self::DEFAULT_RESTAURANT_NAME)
                .to_owned(),
            address: fields.text("address", Self::DEFAULT_ADDRESS).to_owned(),
            phone: fields.text("phone", Self::DEFAULT_PHONE).to_owned(),
        }
    }
}

pub(crate) fn footer(fields: &FieldMap) -> String {
    let f = FooterFields::from_map(fields);
    format!(
        r#"<footer class="sw-footer"><p>{}</p><p>{}</p><p>{}</p></footer>"#,
        escape_html(&f.restaurant_name),
        escape_html(&f.address),
        escape_html(&f.phone),
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
    fn test_hero_defaults() {
        let html = hero(&map(&[]), RenderMode::Public);
        assert!(html.contains(HeroFields::DEFAULT_HEADING));
        assert!(html.contains(HeroFields::DEFAULT_RESERVATION_LABEL));
    }

    #[test]
    fn test_menu_partial_dish_fields() {
        let html = menu(&map(&[
            ("dish_1_name", "Onion soup"),
            ("dish_1_price", "7.00"),
        ]));
        assert!(html.contains("Onion soup"));
        assert!(html.contains("7.00"));
        // Description slot of dish 1 falls back independently.
        assert!(html.contains("Ask your server"));
    }

    #[test]
    fn test_hours_supplied_values() {
        let html = hours(&map(&[("weekdays", "Tue\u{2013}Sun 12:00\u{2013}23:00")]));
        assert!(html.contains("Tue\u{2013}Sun 12:00\u{2013}23:00"));
        assert!(html.contains(HoursFields::DEFAULT_WEEKEND));
    }
}
