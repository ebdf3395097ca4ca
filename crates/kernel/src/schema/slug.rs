//! Slug generation for document URLs.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of characters that are not lowercase ASCII letters or digits.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex literal"));

/// Turn a title into a URL path: `"Hello, World!"` becomes `/hello-world`.
pub fn create_slug(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    let dashed = NON_SLUG_RUN.replace_all(&lower, "-");
    format!("/{}", dashed.trim_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_titles() {
        assert_eq!(create_slug("Hello, World!"), "/hello-world");
        assert_eq!(create_slug("  Dental  Chairs & Lights "), "/dental-chairs-lights");
        assert_eq!(create_slug("/already/a/path"), "/already-a-path");
        assert_eq!(create_slug("Café 2024"), "/caf-2024");
    }

    #[test]
    fn empty_input_is_root() {
        assert_eq!(create_slug(""), "/");
        assert_eq!(create_slug("!!!"), "/");
    }
}
