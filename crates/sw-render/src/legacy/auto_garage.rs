//! The `auto-garage-modern` legacy page.

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
            r#"<div class="sw-legacy sw-legacy-garage">"#,
            r#"<header class="sw-masthead"><h1>{name}</h1>{nav}</header>"#,
            r#"<section class="sw-hero sw-garage-hero">"#,
            "<h2>Expert Auto Repair Services</h2>",
            "<p>{name} keeps you on the road with fast, honest service.</p>",
            r#"<a class="sw-cta" href="{contact}">Book a service</a>"#,
            "</section>"
        ),
        name = name,
        nav = page_nav(site, mode),
        contact = link_href("/contact", mode),
    )
    .unwrap();

    out.push_str(concat!(
        r#"<section class="sw-services"><h2>Our Services</h2><ul>"#,
        "<li><h3>Servicing</h3><p>Scheduled maintenance for every make.</p></li>",
        "<li><h3>Repairs</h3><p>Engine, brakes, suspension, exhaust.</p></li>",
        "<li><h3>Diagnostics</h3><p>Fault finding with modern equipment.</p></li>",
        "</ul></section>",
    ));

    write!(
        out,
        "<footer class=\"sw-footer\"><p>{name}</p><p>Mon\u{2013}Fri 08:00\u{2013}17:00</p></footer></div>",
    )
    .unwrap();

    out
}
