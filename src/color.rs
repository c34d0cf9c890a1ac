//! Color model: rgba token parsing, hex conversion, and contrast decisions.
//!
//! Every color in a saved site is stored as a canonical `rgba(r,g,b,a)`
//! token. The hex + separate alpha form used by color pickers is a derived,
//! UI-only representation; conversion must round-trip losslessly for the
//! RGB channels (alpha is edited in 0.01 steps, so two decimals suffice).
//!
//! Parsing is deliberately forgiving: color fields are edited
//! character-by-character, so malformed input falls back to opaque black
//! instead of raising.

use thiserror::Error;

/// Token returned for bright backgrounds (dark slate text).
pub const DARK_TEXT: &str = "rgba(31, 41, 55, 1)";

/// Token returned for dark backgrounds (near-white text).
pub const LIGHT_TEXT: &str = "rgba(248, 250, 252, 1)";

/// Errors from the strict hex parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not a 6-hex-digit string (optionally `#`-prefixed).
    #[error("invalid hex color {0:?} (expected 6 hex digits)")]
    InvalidFormat(String),
}

// ============================================================================
// Types
// ============================================================================

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The hex + separate alpha representation used by the editor UI.
#[derive(Debug, Clone, PartialEq)]
pub struct HexAlpha {
    /// Uppercase `#RRGGBB` string, no alpha.
    pub hex: String,
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
}

// ============================================================================
// Hex conversion
// ============================================================================

/// Parses a strict 6-hex-digit color, with optional leading `#`.
///
/// # Example
///
/// ```
/// use sprout_renderer::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#1F2937").unwrap(), Rgb { r: 31, g: 41, b: 55 });
/// assert!(hex_to_rgb("#fff").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Rgb { r, g, b }),
        _ => Err(ColorError::InvalidFormat(hex.to_string())),
    }
}

/// Formats an RGB triple as an uppercase `#RRGGBB` string.
///
/// Uppercase matters: generated SVG embeds these strings, and byte-identical
/// output across renders is part of the reproducibility contract.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

// ============================================================================
// rgba token parsing
// ============================================================================

/// Parses an `rgba(r,g,b[,a])` or `rgb(r,g,b)` token.
///
/// Returns `None` when the token does not match; callers decide how to
/// fall back.
pub fn parse_rgba(token: &str) -> Option<(u8, u8, u8, f64)> {
    let token = token.trim();
    let inner = token
        .strip_prefix("rgba(")
        .or_else(|| token.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    let a = match parts.next() {
        Some(raw) => raw.parse().ok()?,
        None => 1.0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((r, g, b, a))
}

/// Splits an rgba token into its hex + alpha representation.
///
/// Never fails: unparseable input yields opaque black, so a half-typed
/// token can't break a render pass.
///
/// # Example
///
/// ```
/// use sprout_renderer::rgba_to_hex_a;
///
/// let ha = rgba_to_hex_a("rgba(255, 0, 128, 0.5)");
/// assert_eq!(ha.hex, "#FF0080");
/// assert_eq!(ha.alpha, 0.5);
///
/// assert_eq!(rgba_to_hex_a("garbage").hex, "#000000");
/// ```
pub fn rgba_to_hex_a(token: &str) -> HexAlpha {
    match parse_rgba(token) {
        Some((r, g, b, a)) => HexAlpha {
            hex: rgb_to_hex(r, g, b),
            alpha: a,
        },
        None => HexAlpha {
            hex: "#000000".to_string(),
            alpha: 1.0,
        },
    }
}

/// Composes a hex color and an alpha back into a canonical rgba token.
///
/// Fails closed to opaque black if the hex is malformed.
pub fn hex_a_to_rgba(hex: &str, alpha: f64) -> String {
    let Rgb { r, g, b } = hex_to_rgb(hex).unwrap_or(Rgb { r: 0, g: 0, b: 0 });
    format!("rgba({r},{g},{b},{alpha})")
}

// ============================================================================
// Contrast
// ============================================================================

/// Picks a readable text color for the given background token.
///
/// Uses perceptual brightness `(299*r + 587*g + 114*b) / 1000` with a
/// threshold of 150, not 128. The higher threshold biases toward dark text
/// on mid-tones and must stay exactly at 150 for visual parity with
/// existing saved sites.
pub fn contrasting_text_color(token: &str) -> &'static str {
    let Some((r, g, b, _)) = parse_rgba(token) else {
        return DARK_TEXT;
    };
    let brightness =
        (299.0 * f64::from(r) + 587.0 * f64::from(g) + 114.0 * f64::from(b)) / 1000.0;
    if brightness > 150.0 { DARK_TEXT } else { LIGHT_TEXT }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_exhaustive_channels() {
        // Full 24-bit space is too slow for a unit test; sweeping each
        // channel independently covers every two-digit pair.
        for v in 0..=255u8 {
            assert_eq!(hex_to_rgb(&rgb_to_hex(v, 0, 0)).unwrap(), Rgb { r: v, g: 0, b: 0 });
            assert_eq!(hex_to_rgb(&rgb_to_hex(0, v, 0)).unwrap(), Rgb { r: 0, g: v, b: 0 });
            assert_eq!(hex_to_rgb(&rgb_to_hex(0, 0, v)).unwrap(), Rgb { r: 0, g: 0, b: v });
        }
    }

    #[test]
    fn hex_parses_with_and_without_hash() {
        assert_eq!(hex_to_rgb("aabbcc").unwrap(), Rgb { r: 170, g: 187, b: 204 });
        assert_eq!(hex_to_rgb("#AABBCC").unwrap(), Rgb { r: 170, g: 187, b: 204 });
    }

    #[test]
    fn hex_rejects_bad_input() {
        for bad in ["", "#fff", "#ffffff00", "zzzzzz", "#12345g"] {
            assert!(hex_to_rgb(bad).is_err(), "should reject {bad:?}");
        }
    }

    #[test]
    fn rgba_token_to_hex_a() {
        let ha = rgba_to_hex_a("rgba(31, 41, 55, 1)");
        assert_eq!(ha.hex, "#1F2937");
        assert_eq!(ha.alpha, 1.0);

        // Alpha defaults to 1 when omitted.
        let ha = rgba_to_hex_a("rgb(255,255,255)");
        assert_eq!(ha.hex, "#FFFFFF");
        assert_eq!(ha.alpha, 1.0);
    }

    #[test]
    fn malformed_rgba_falls_back_to_black() {
        for bad in ["", "rgba(", "rgba(1,2)", "#ffffff", "rgba(300,0,0,1)"] {
            let ha = rgba_to_hex_a(bad);
            assert_eq!(ha.hex, "#000000");
            assert_eq!(ha.alpha, 1.0);
        }
    }

    #[test]
    fn alpha_round_trip_within_slider_precision() {
        for step in 0..=100u32 {
            let alpha = f64::from(step) / 100.0;
            let token = hex_a_to_rgba("#3C82F6", alpha);
            let ha = rgba_to_hex_a(&token);
            assert_eq!(ha.hex, "#3C82F6");
            assert!((ha.alpha - alpha).abs() < 0.01);
        }
    }

    #[test]
    fn hex_a_to_rgba_fails_closed() {
        assert_eq!(hex_a_to_rgba("nope", 0.5), "rgba(0,0,0,0.5)");
    }

    #[test]
    fn contrast_threshold_boundary() {
        // r = g = b gives brightness equal to the channel value, so 150
        // and 151 sit exactly on either side of the threshold.
        assert_eq!(contrasting_text_color("rgba(150,150,150,1)"), LIGHT_TEXT);
        assert_eq!(contrasting_text_color("rgba(151,151,151,1)"), DARK_TEXT);
    }

    #[test]
    fn contrast_fallback_is_dark_text() {
        assert_eq!(contrasting_text_color("not-a-color"), DARK_TEXT);
    }
}
