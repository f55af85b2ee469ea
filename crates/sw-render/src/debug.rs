//! Raw-JSON fallback view.
//!
//! Shown when a site has neither structured section data nor a known
//! legacy template key. This is an operator/developer inspection aid,
//! never end-customer UI.

use sw_model::SiteProject;

use crate::html::escape_html;

/// Render the site payload as pretty-printed, escaped JSON.
///
/// This view must never fail: if the payload cannot be serialized the
/// placeholder explains so instead.
#[must_use]
pub fn render_debug_json(site: &SiteProject) -> String {
    let payload = serde_json::to_string_pretty(site)
        .unwrap_or_else(|error| format!("(site payload unavailable: {error})"));

    format!(
        concat!(
            r#"<section class="sw-debug">"#,
            r#"<p class="sw-debug-banner">No template matched this site; showing the raw payload.</p>"#,
            "<pre>{payload}</pre>",
            "</section>"
        ),
        payload = escape_html(&payload),
    )
}

#[cfg(test)]
mod tests {
    use sw_model::Theme;

    use super::*;

    fn site() -> SiteProject {
        SiteProject {
            slug: "acme".to_owned(),
            name: "Acme <Motors>".to_owned(),
            site_template_key: "unknown".to_owned(),
            theme: Theme::default(),
            pages: Vec::new(),
        }
    }

    #[test]
    fn test_contains_pretty_json() {
        let html = render_debug_json(&site());
        assert!(html.contains(r#"&quot;slug&quot;: &quot;acme&quot;"#));
    }

    #[test]
    fn test_payload_is_escaped() {
        let html = render_debug_json(&site());
        assert!(html.contains("Acme &lt;Motors&gt;"));
        assert!(!html.contains("Acme <Motors>"));
    }

    #[test]
    fn test_carries_operator_banner() {
        let html = render_debug_json(&site());
        assert!(html.contains("sw-debug-banner"));
    }
}
