//! Identifier sanitization for SVG element ids

use regex::Regex;
use std::sync::OnceLock;

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9A-Za-z]+").expect("valid literal pattern"))
}

/// Sanitize a label for use as a structural element identifier.
///
/// Every run of non-alphanumeric characters collapses to a single `_`;
/// leading and trailing separators are trimmed. The operation is
/// idempotent.
///
/// # Examples
///
/// ```
/// use swatchgrid::ident::sanitize_id;
///
/// assert_eq!(sanitize_id("Some Group"), "Some_Group");
/// assert_eq!(sanitize_id("123 Group!"), "123_Group");
/// assert_eq!(sanitize_id("Primary 1 (Main)"), "Primary_1_Main");
/// ```
pub fn sanitize_id(text: &str) -> String {
    separator_re()
        .replace_all(text, "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(sanitize_id("Some Group"), "Some_Group");
    }

    #[test]
    fn test_runs_collapse_to_single_separator() {
        assert_eq!(sanitize_id("a - b -- c"), "a_b_c");
    }

    #[test]
    fn test_leading_trailing_trimmed() {
        assert_eq!(sanitize_id("  Brand!  "), "Brand");
        assert_eq!(sanitize_id("(Accent)"), "Accent");
    }

    #[test]
    fn test_already_clean_unchanged() {
        assert_eq!(sanitize_id("Primary_1"), "Primary_1");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Some Group", "a -- b", " (x) ", "plain", "!!!"] {
            let once = sanitize_id(input);
            assert_eq!(sanitize_id(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_all_separators_yields_empty() {
        assert_eq!(sanitize_id("!!!"), "");
        assert_eq!(sanitize_id(""), "");
    }
}
