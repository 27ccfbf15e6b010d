//! Palette file parsing
//!
//! The input format is one color per line:
//!
//! ```text
//! # comment lines start with '#'
//! Primary 1: #FF5733
//! Brand Blue 2 (Hover): #3357FF ignored trailing tokens
//! ```
//!
//! Parsing fails soft: malformed lines are skipped and recorded as
//! warnings, never raised as errors. The caller decides whether an empty
//! result is fatal.

use crate::models::{ColorEntry, Palette, Warning};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Result of parsing a palette file.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub palette: Palette,
    pub warnings: Vec<Warning>,
}

/// Matches labels of the form `<word(s)> <integer> [descriptor]`.
fn grouped_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+?)\s+\d+(\s.*)?$").expect("valid literal pattern"))
}

/// Extract the group name from a label.
///
/// A label shaped like `<word(s)> <integer> [descriptor]` groups under its
/// words prefix; anything else groups under the whole label.
///
/// # Examples
///
/// ```
/// use swatchgrid::parser::extract_group;
///
/// assert_eq!(extract_group("Primary 1"), "Primary");
/// assert_eq!(extract_group("Brand Blue 2 (Hover)"), "Brand Blue");
/// assert_eq!(extract_group("Accent"), "Accent");
/// ```
pub fn extract_group(label: &str) -> &str {
    grouped_label_re()
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map_or(label, |m| m.as_str())
}

/// Parse palette file text into ordered color groups.
///
/// Per line: trim whitespace, skip blanks and `#` comments, split on the
/// first `:`, take the first whitespace-delimited token on the right as
/// the color candidate, and validate it as `#RRGGBB`. Lines failing any
/// step are skipped with a warning.
pub fn parse_str(text: &str) -> ParseResult {
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        // A leading '#' always marks a comment; color values only ever
        // appear after a colon.
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((left, right)) = line.split_once(':') else {
            warnings.push(Warning {
                message: "missing ':' separator".to_string(),
                line: line_number,
            });
            continue;
        };

        let label = left.trim();
        let Some(candidate) = right.split_whitespace().next() else {
            warnings.push(Warning {
                message: format!("no color value after '{label}:'"),
                line: line_number,
            });
            continue;
        };

        match ColorEntry::new(label, extract_group(label), candidate) {
            Ok(entry) => entries.push(entry),
            Err(e) => warnings.push(Warning {
                message: format!("invalid color '{candidate}': {e}"),
                line: line_number,
            }),
        }
    }

    debug!(
        colors = entries.len(),
        skipped = warnings.len(),
        "parsed palette text"
    );

    ParseResult {
        palette: Palette::from_entries(entries),
        warnings,
    }
}
