//! HTML output utilities shared by all components.

use std::fmt::Write;

use sw_model::{RenderMode, Theme};

/// Escape text for safe interpolation into HTML content or attributes.
///
/// Every tenant-supplied value goes through this before it reaches
/// markup; field values are plain text by contract, never HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Resolve a link target for the given mode.
///
/// The dashboard preview renders inside the editor, where real
/// navigation would tear the user out of their editing session, so
/// every link collapses to a fragment.
#[must_use]
pub(crate) fn link_href(url: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::Public => escape_html(url),
        RenderMode::Preview => "#".to_owned(),
    }
}

/// Emit the theme's color tokens as CSS custom properties.
pub(crate) fn theme_style(theme: &Theme) -> String {
    format!(
        "<style>:root{{--sw-primary:{};--sw-secondary:{};--sw-background:{};--sw-text:{}}}</style>",
        escape_html(&theme.primary),
        escape_html(&theme.secondary),
        escape_html(&theme.background),
        escape_html(&theme.text),
    )
}

/// Wrap rendered body markup in a full HTML document.
pub(crate) fn document_shell(
    title: &str,
    description: Option<&str>,
    theme: &Theme,
    body: &str,
) -> String {
    let mut out = String::with_capacity(body.len() + 512);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(out, "<title>{}</title>", escape_html(title)).unwrap();
    if let Some(description) = description {
        writeln!(
            out,
            r#"<meta name="description" content="{}">"#,
            escape_html(description)
        )
        .unwrap();
    }
    out.push_str(&theme_style(theme));
    out.push_str("\n</head>\n<body>\n");
    out.push_str(body);
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Acme Motors"), "Acme Motors");
    }

    #[test]
    fn test_link_href_public_keeps_url() {
        assert_eq!(link_href("/contact", RenderMode::Public), "/contact");
    }

    #[test]
    fn test_link_href_preview_collapses_to_fragment() {
        assert_eq!(link_href("/contact", RenderMode::Preview), "#");
    }

    #[test]
    fn test_theme_style_emits_tokens() {
        let style = theme_style(&Theme::default());
        assert!(style.contains("--sw-primary:#1d4ed8"));
        assert!(style.contains("--sw-text:#111827"));
    }

    #[test]
    fn test_document_shell() {
        let doc = document_shell("Acme", Some("Repairs"), &Theme::default(), "<p>hi</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Acme</title>"));
        assert!(doc.contains(r#"<meta name="description" content="Repairs">"#));
        assert!(doc.contains("<p>hi</p>"));
    }

    #[test]
    fn test_document_shell_without_description() {
        let doc = document_shell("Acme", None, &Theme::default(), "");
        assert!(!doc.contains("description"));
    }
}
