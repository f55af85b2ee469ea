//! The `restaurant-modern` legacy page.

use std::fmt::Write;

use sw_model::{RenderMode, SiteProject};

use crate::html::{escape_html, link_href};

use super::page_nav;

pub(super) fn render(site: &SiteProject, mode: RenderMode) -> String {
    let name = escape_html(&site.name);
    let mut out = String::with_capacity(1024);

    write!(
        out,
        concat!(
            r#"<div class="sw-legacy sw-legacy-restaurant">"#,
            r#"<header class="sw-masthead"><h1>{name}</h1>{nav}</header>"#,
            r#"<section class="sw-hero sw-restaurant-hero">"#,
            "<h2>Welcome to {name}</h2>",
            "<p>Seasonal cooking, warm service, and a table with your name on it.</p>",
            r#"<a class="sw-cta" href="{reserve}">Reserve a table</a>"#,
            "</section>"
        ),
        name = name,
        nav = page_nav(site, mode),
        reserve = link_href("/reservations", mode),
    )
    .unwrap();

    out.push_str(concat!(
        r#"<section class="sw-menu"><h2>From our kitchen</h2><ul>"#,
        "<li><h3>Starters</h3><p>Fresh, simple plates to begin.</p></li>",
        "<li><h3>Mains</h3><p>Hearty dishes from local produce.</p></li>",
        "<li><h3>Desserts</h3><p>Made in-house every morning.</p></li>",
        "</ul></section>",
        r#"<section class="sw-hours"><h2>Opening Hours</h2>"#,
        "<p>Tue\u{2013}Sun 12:00\u{2013}22:00</p><p>Closed Mondays</p></section>",
    ));

    write!(
        out,
        r#"<footer class="sw-footer"><p>{name}</p><p>We look forward to seeing you.</p></footer></div>"#,
    )
    .unwrap();

    out
}

#[cfg(test)]
mod tests {
    use sw_model::Theme;

    use super::*;

    fn site() -> SiteProject {
        SiteProject {
            slug: "marys-restaurant".to_owned(),
            name: "Mary's Restaurant".to_owned(),
            site_template_key: "restaurant-modern".to_owned(),
            theme: Theme::default(),
            pages: Vec::new(),
        }
    }

    #[test]
    fn test_renders_hard_coded_layout() {
        let body = render(&site(), RenderMode::Public);
        assert!(body.contains("Welcome to Mary&#39;s Restaurant"));
        assert!(body.contains("From our kitchen"));
        assert!(body.contains("Opening Hours"));
    }

    #[test]
    fn test_empty_site_still_renders() {
        let mut bare = site();
        bare.name = String::new();
        let body = render(&bare, RenderMode::Public);
        assert!(body.contains("sw-legacy-restaurant"));
    }

    #[test]
    fn test_preview_disables_reservation_link() {
        let body = render(&site(), RenderMode::Preview);
        assert!(!body.contains("/reservations"));
    }
}
