//! The `jcw-main` legacy page: the platform's own marketing site.

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
            r#"<div class="sw-legacy sw-legacy-jcw">"#,
            r#"<header class="sw-masthead"><h1>{name}</h1>{nav}</header>"#,
            r#"<section class="sw-hero sw-marketing-hero">"#,
            "<h2>Your business, online this week</h2>",
            "<p>Websites for garages, restaurants, and local trades. No agencies, no waiting.</p>",
            r#"<a class="sw-cta" href="{signup}">Start building</a>"#,
            "</section>"
        ),
        name = name,
        nav = page_nav(site, mode),
        signup = link_href("/signup", mode),
    )
    .unwrap();

    out.push_str(concat!(
        r#"<section class="sw-features"><h2>Everything included</h2><ul>"#,
        "<li><h3>Templates</h3><p>Designs built for your trade.</p></li>",
        "<li><h3>Editing</h3><p>Change any text from your dashboard.</p></li>",
        "<li><h3>Leads</h3><p>Quote requests land straight in your inbox.</p></li>",
        "</ul></section>",
    ));

    write!(
        out,
        r#"<footer class="sw-footer"><p>{name}</p></footer></div>"#,
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
            slug: "jcw".to_owned(),
            name: "JCW".to_owned(),
            site_template_key: "jcw-main".to_owned(),
            theme: Theme::default(),
            pages: Vec::new(),
        }
    }

    #[test]
    fn test_renders_marketing_layout() {
        let body = render(&site(), RenderMode::Public);
        assert!(body.contains("sw-legacy-jcw"));
        assert!(body.contains("Everything included"));
    }

    #[test]
    fn test_public_mode_keeps_signup_link() {
        let body = render(&site(), RenderMode::Public);
        assert!(body.contains("/signup"));
    }
}
