//! Hex color shape checks.
//!
//! Only the `#RRGGBB` shape is checked; colors are never converted.

use crate::error::{PaletteError, Result};

/// True when `s` is `#` followed by exactly six hex digits (either case).
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Check a single color string.
///
/// # Errors
/// Returns [`PaletteError::InvalidColor`] when the string is not `#RRGGBB`.
pub fn validate_hex_color(s: &str) -> Result<()> {
    if is_hex_color(s) {
        Ok(())
    } else {
        Err(PaletteError::InvalidColor(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("#4477AA" ; "upper case")]
    #[test_case("#ff4b00" ; "lower case")]
    #[test_case("#aAbBcC" ; "mixed case")]
    #[test_case("#000000" ; "digits only")]
    fn test_accepts(color: &str) {
        assert!(is_hex_color(color));
        assert!(validate_hex_color(color).is_ok());
    }

    #[test_case("" ; "empty")]
    #[test_case("#" ; "hash only")]
    #[test_case("4477AA" ; "missing hash")]
    #[test_case("#4477A" ; "five digits")]
    #[test_case("#4477AAFF" ; "eight digits")]
    #[test_case("#GG77AA" ; "non hex")]
    #[test_case("#44 7AA" ; "inner space")]
    #[test_case("##4477A" ; "double hash")]
    #[test_case("#ＡＢＣ" ; "full width")]
    fn test_rejects(color: &str) {
        assert!(!is_hex_color(color));
        let err = validate_hex_color(color).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor(s) if s == color));
    }
}
