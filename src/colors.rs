//! Hex color utilities for the presentation layer
//!
//! Team colors are stored as hex strings; these helpers normalize them and
//! pick a readable foreground. Nothing in the clock/match engine consumes
//! this module.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex color: {input:?}")]
    InvalidHexColor { input: String },
}

/// Check whether a string is a valid `#rgb` or `#rrggbb` color.
pub fn is_hex_color(s: &str) -> bool {
    let s = s.trim();
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Normalize a hex color to lowercase `#rrggbb`, expanding `#rgb` shorthand.
pub fn normalize_hex(s: &str) -> Result<String, ColorError> {
    let trimmed = s.trim();
    if !is_hex_color(trimmed) {
        return Err(ColorError::InvalidHexColor {
            input: s.to_string(),
        });
    }

    let lower = trimmed.to_lowercase();
    let digits = &lower[1..];
    if digits.len() == 3 {
        let mut expanded = String::with_capacity(7);
        expanded.push('#');
        for c in digits.chars() {
            expanded.push(c);
            expanded.push(c);
        }
        Ok(expanded)
    } else {
        Ok(lower)
    }
}

/// Convert `#rrggbb` (or `#rgb`) to an RGB triple.
pub fn hex_to_rgb(s: &str) -> Result<(u8, u8, u8), ColorError> {
    let normalized = normalize_hex(s)?;
    let digits = &normalized[1..];
    let parse = |range: std::ops::Range<usize>| {
        // Normalized form is guaranteed two hex digits per component.
        u8::from_str_radix(&digits[range], 16).unwrap_or(0)
    };
    Ok((parse(0..2), parse(2..4), parse(4..6)))
}

/// Convert an RGB triple to lowercase `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Pick black or white foreground for the given background, using an
/// approximate sRGB relative luminance.
pub fn contrast_color(bg_hex: &str) -> Result<&'static str, ColorError> {
    let (r, g, b) = hex_to_rgb(bg_hex)?;
    let lum = 0.2126 * (r as f32 / 255.0) + 0.7152 * (g as f32 / 255.0) + 0.0722 * (b as f32 / 255.0);
    Ok(if lum > 0.5 { "#000000" } else { "#ffffff" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_shorthand_and_case() {
        assert_eq!(normalize_hex("#FA3").unwrap(), "#ffaa33");
        assert_eq!(normalize_hex("#AABBCC").unwrap(), "#aabbcc");
        assert_eq!(normalize_hex("  #ff0000 ").unwrap(), "#ff0000");
    }

    #[test]
    fn rejects_bad_colors() {
        for bad in ["", "ff0000", "#ff00", "#gggggg", "#ff00001", "red"] {
            assert!(normalize_hex(bad).is_err(), "expected {bad:?} rejected");
        }
    }

    #[test]
    fn converts_between_hex_and_rgb() {
        assert_eq!(hex_to_rgb("#ff8000").unwrap(), (255, 128, 0));
        assert_eq!(hex_to_rgb("#f80").unwrap(), (255, 136, 0));
        assert_eq!(rgb_to_hex(255, 128, 0), "#ff8000");
    }

    #[test]
    fn picks_contrasting_foreground() {
        assert_eq!(contrast_color("#ffffff").unwrap(), "#000000");
        assert_eq!(contrast_color("#000000").unwrap(), "#ffffff");
        assert_eq!(contrast_color("#ffff00").unwrap(), "#000000");
        assert_eq!(contrast_color("#0000ff").unwrap(), "#ffffff");
    }
}
