//! Web-app icon rendering: a single centered letter over a generated or
//! flat background.
//!
//! The same SVG is used for the editor preview (as a data URI) and for
//! export-time rasterization at 32/192/512 px, so every offset in the
//! composition is a fraction of `size`, never a fixed pixel value.
//! Rendering the same config at any two sizes yields proportionally
//! identical output.

use tracing::debug;

use crate::config::{BackgroundConfig, ProceduralConfig, PwaIconConfig};
use crate::pattern::generate;

/// Picks the icon letter from a profile name: first character, uppercased,
/// with `L` as the fallback for empty names.
///
/// # Example
///
/// ```
/// use sprout_renderer::default_letter;
///
/// assert_eq!(default_letter("@yourname"), '@');
/// assert_eq!(default_letter("jane"), 'J');
/// assert_eq!(default_letter(""), 'L');
/// ```
pub fn default_letter(profile_name: &str) -> char {
    profile_name
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('L')
}

/// Renders the icon SVG at the given pixel size.
///
/// With `waves` enabled, a synthetic layered-waves background is generated
/// from the config's two background colors at `size` x `size`; otherwise
/// the background is a flat `bg_color1` square. The letter is drawn at
/// `0.6 * size` with its baseline nudged down by `size/16` past center to
/// visually center the glyph.
pub fn render_icon(config: &PwaIconConfig, letter: char, size: u32) -> String {
    debug!(letter = %letter, size, waves = config.waves, "rendering icon svg");

    let s = f64::from(size);
    let text_y = s / 2.0 + s / 16.0;
    let font_size = s * 0.6;
    let text = format!(
        r#"<text x="50%" y="{text_y}" dominant-baseline="middle" text-anchor="middle" font-size="{font_size}" fill="{}" font-family="{}" font-weight="bold">{}</text>"#,
        config.letter_color,
        config.font_family,
        escape_letter(letter),
    );

    if config.waves {
        let waves_config = BackgroundConfig::LayeredWaves(ProceduralConfig {
            seed: config.seed,
            complexity: config.complexity,
            contrast: config.contrast,
            colors: vec![config.bg_color1.clone(), config.bg_color2.clone()],
        });
        let svg = generate(&waves_config, size, size);
        match svg.strip_suffix("</svg>") {
            Some(body) => format!("{body}{text}</svg>"),
            None => svg,
        }
    } else {
        format!(
            r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg"><rect width="{size}" height="{size}" fill="{}" />{text}</svg>"#,
            config.bg_color1
        )
    }
}

/// Escapes the letter for embedding in SVG text content.
fn escape_letter(letter: char) -> String {
    match letter {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
