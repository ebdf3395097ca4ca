//! Shared helpers for markup generation and page rendering.

/// HTML-escape a string for safe output.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Whether a link target may be emitted into an `href`.
///
/// Allows site-relative paths, fragments, http(s), `mailto:` and `tel:`.
/// Protocol-relative URLs (`//host`) and every other scheme are rejected.
pub fn is_safe_url(url: &str) -> bool {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return false;
    }
    let lower = trimmed.to_ascii_lowercase();
    trimmed.starts_with('/')
        || trimmed.starts_with('#')
        || lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
}

/// Return the href when it is present and safe.
pub fn safe_href(href: Option<&str>) -> Option<&str> {
    href.map(str::trim).filter(|h| is_safe_url(h))
}

/// `target`/`rel` attributes for a link, with a leading space when non-empty.
pub fn link_target_attrs(open_in_new_tab: bool) -> &'static str {
    if open_in_new_tab {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    }
}

/// Non-blank text, trimmed.
pub fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_special_chars() {
        assert_eq!(
            html_escape("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_html_escape_ampersand() {
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_html_escape_quotes() {
        assert_eq!(html_escape(r#"say "hello""#), "say &quot;hello&quot;");
    }

    #[test]
    fn test_safe_urls() {
        for url in [
            "/shop",
            "#faq",
            "https://example.com",
            "HTTP://EXAMPLE.COM",
            "mailto:sales@example.com",
            "tel:+441234",
        ] {
            assert!(is_safe_url(url), "{url} should be safe");
        }
    }

    #[test]
    fn test_unsafe_urls() {
        for url in [
            "",
            "   ",
            "javascript:alert(1)",
            "JavaScript:alert(1)",
            "data:text/html,hi",
            "//evil.example.com",
            "shop",
        ] {
            assert!(!is_safe_url(url), "{url} should be rejected");
        }
    }

    #[test]
    fn test_link_target_attrs() {
        assert_eq!(link_target_attrs(false), "");
        assert!(link_target_attrs(true).contains("noopener noreferrer"));
    }
}
