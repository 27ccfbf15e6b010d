//! Hex color validation
//!
//! Palette files carry colors as `#RRGGBB` strings. [`HexColor`] is the
//! validated form: construction rejects anything that is not exactly a hash
//! followed by six hex digits, and the original casing is preserved so the
//! rendered output echoes the file byte-for-byte.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be exactly 6 hex chars after #)
    #[error("invalid color length {0}, expected 6")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// A validated `#RRGGBB` color string.
///
/// # Examples
///
/// ```
/// use swatchgrid::color::HexColor;
///
/// let color = HexColor::parse("#Ff5733").unwrap();
/// assert_eq!(color.as_str(), "#Ff5733");
///
/// assert!(HexColor::parse("#FFF").is_err());
/// assert!(HexColor::parse("FF5733").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parse and validate a `#RRGGBB` string, keeping its casing.
    ///
    /// # Errors
    ///
    /// Returns `ColorError` if the input is empty, lacks the leading `#`,
    /// has a length other than six hex digits, or contains a non-hex
    /// character.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ColorError::MissingHash);
        };
        if hex.len() != 6 {
            return Err(ColorError::InvalidLength(hex.len()));
        }
        for c in hex.chars() {
            if !c.is_ascii_hexdigit() {
                return Err(ColorError::InvalidHex(c));
            }
        }
        Ok(Self(s.to_string()))
    }

    /// The color as it appeared in the input, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_lowercase() {
        let color = HexColor::parse("#ff5733").unwrap();
        assert_eq!(color.as_str(), "#ff5733");
    }

    #[test]
    fn test_parse_preserves_case() {
        // Mixed-case input must come back byte-for-byte
        let color = HexColor::parse("#AbCdEf").unwrap();
        assert_eq!(color.as_str(), "#AbCdEf");
        assert_eq!(color.to_string(), "#AbCdEf");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(HexColor::parse(""), Err(ColorError::Empty));
    }

    #[test]
    fn test_parse_missing_hash() {
        assert_eq!(HexColor::parse("FF5733"), Err(ColorError::MissingHash));
    }

    #[test]
    fn test_parse_short_hex_rejected() {
        // Three-digit CSS shorthand is not part of the palette format
        assert_eq!(HexColor::parse("#FFF"), Err(ColorError::InvalidLength(3)));
    }

    #[test]
    fn test_parse_long_hex_rejected() {
        assert_eq!(
            HexColor::parse("#FF5733AA"),
            Err(ColorError::InvalidLength(8))
        );
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(HexColor::parse("#GG5733"), Err(ColorError::InvalidHex('G')));
    }

    #[test]
    fn test_parse_hash_only() {
        assert_eq!(HexColor::parse("#"), Err(ColorError::InvalidLength(0)));
    }

    #[test]
    fn test_error_display() {
        let err = HexColor::parse("#12345Z").unwrap_err();
        assert!(err.to_string().contains('Z'));
    }
}
