//! Aesthetic palette synthesis for the "randomize" control.
//!
//! One draw produces six mutually coherent colors: a page background pair,
//! a card background pair that pops against the page, a binary text color,
//! and a roughly complementary accent. Unlike pattern generation this is
//! *not* seeded (a fresh palette every click is the point), but the
//! HSL-to-RGB mapping itself is fixed math that the feature's visual
//! identity depends on, so it is implemented by hand here rather than
//! through a color library.

use rand::Rng;

/// Near-white text token used in dark mode.
pub const DARK_MODE_TEXT: &str = "rgba(248, 250, 252, 1)";
/// Near-black text token used in light mode.
pub const LIGHT_MODE_TEXT: &str = "rgba(15, 23, 42, 1)";

/// Six derived colors from one randomize draw.
///
/// Ephemeral: consumed immediately to build new background configs and
/// style fields, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub page_bg1: String,
    pub page_bg2: String,
    pub card_bg1: String,
    pub card_bg2: String,
    pub text_color: String,
    pub accent_color: String,
}

// ============================================================================
// HSL conversion
// ============================================================================

/// Converts HSL (h in degrees, s and l in percent) plus alpha to a
/// canonical rgba token.
///
/// Standard piecewise-linear formula over six 60-degree hue sectors.
/// Channels round half-away-from-zero and alpha is formatted with two
/// decimals, e.g. `rgba(255,0,0,0.95)`.
pub fn hsl_to_rgba(h: f64, s: f64, l: f64, a: f64) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (((h / 60.0) % 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if (0.0..60.0).contains(&h) => (c, x, 0.0),
        h if (60.0..120.0).contains(&h) => (x, c, 0.0),
        h if (120.0..180.0).contains(&h) => (0.0, c, x),
        h if (180.0..240.0).contains(&h) => (0.0, x, c),
        h if (240.0..300.0).contains(&h) => (x, 0.0, c),
        h if (300.0..360.0).contains(&h) => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    let byte = |v: f64| ((v + m) * 255.0).round() as u8;
    format!("rgba({},{},{},{a:.2})", byte(r), byte(g), byte(b))
}

// ============================================================================
// Synthesis
// ============================================================================

/// Synthesizes a palette from the thread-local RNG.
pub fn synthesize() -> Palette {
    synthesize_with(&mut rand::rng())
}

/// Synthesizes a palette from the given RNG.
///
/// Taking the RNG as a parameter keeps the derivation testable with a
/// seeded generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use sprout_renderer::synthesize_with;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let a = synthesize_with(&mut rng);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let b = synthesize_with(&mut rng);
/// assert_eq!(a, b);
/// ```
pub fn synthesize_with<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    let dark_mode = rng.random::<f64>() > 0.5;
    let base_hue = (rng.random::<f64>() * 360.0).floor();

    fn alpha<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        0.8 + rng.random::<f64>() * 0.2
    }
    fn saturation<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        40.0 + rng.random::<f64>() * 40.0
    }
    fn lightness<R: Rng + ?Sized>(rng: &mut R, dark: bool) -> f64 {
        if dark {
            10.0 + rng.random::<f64>() * 15.0
        } else {
            85.0 + rng.random::<f64>() * 10.0
        }
    }

    // Page pair: base hue, then a +/-25-50 degree hue shift and a
    // +/-8-16 point lightness shift, clamped to [0, 100].
    let page_hue1 = base_hue;
    let page_lightness1 = lightness(rng, dark_mode);
    let (s, a) = (saturation(rng), alpha(rng));
    let page_bg1 = hsl_to_rgba(page_hue1, s, page_lightness1, a);

    let hue_shift = 25.0 + rng.random::<f64>() * 25.0;
    let signed_shift = if rng.random::<f64>() > 0.5 { hue_shift } else { -hue_shift };
    let page_hue2 = (page_hue1 + signed_shift + 360.0) % 360.0;
    let lightness_shift = 8.0 + rng.random::<f64>() * 8.0;
    let signed_lightness = if rng.random::<f64>() > 0.5 {
        lightness_shift
    } else {
        -lightness_shift
    };
    let page_lightness2 = (page_lightness1 + signed_lightness).clamp(0.0, 100.0);
    let (s, a) = (saturation(rng), alpha(rng));
    let page_bg2 = hsl_to_rgba(page_hue2, s, page_lightness2, a);

    // Card pair: offset further in hue (+30-60), half saturation, lightness
    // biased toward the opposite extreme so the card pops against the page.
    let card_hue1 = (base_hue + 30.0 + rng.random::<f64>() * 30.0) % 360.0;
    let card_lightness1 = if dark_mode {
        15.0 + rng.random::<f64>() * 10.0
    } else {
        90.0 + rng.random::<f64>() * 5.0
    };
    let (s, a) = (saturation(rng) / 2.0, alpha(rng));
    let card_bg1 = hsl_to_rgba(card_hue1, s, card_lightness1, a);

    let card_shift = if rng.random::<f64>() > 0.5 {
        20.0 + rng.random::<f64>() * 20.0
    } else {
        -(20.0 + rng.random::<f64>() * 20.0)
    };
    let card_hue2 = (card_hue1 + card_shift + 360.0) % 360.0;
    let card_lightness_shift = if rng.random::<f64>() > 0.5 {
        -(5.0 + rng.random::<f64>() * 5.0)
    } else {
        5.0 + rng.random::<f64>() * 5.0
    };
    let card_lightness2 = (card_lightness1 + card_lightness_shift).clamp(0.0, 100.0);
    let (s, a) = (saturation(rng) / 2.0, alpha(rng));
    let card_bg2 = hsl_to_rgba(card_hue2, s, card_lightness2, a);

    // Text is binary, not hue-derived.
    let text_color = if dark_mode { DARK_MODE_TEXT } else { LIGHT_MODE_TEXT };

    // Accent: roughly complementary, high saturation, mid lightness.
    let accent_color = hsl_to_rgba(
        (base_hue + 150.0 + rng.random::<f64>() * 60.0) % 360.0,
        75.0 + rng.random::<f64>() * 20.0,
        50.0 + rng.random::<f64>() * 10.0,
        0.95,
    );

    Palette {
        page_bg1,
        page_bg2,
        card_bg1,
        card_bg2,
        text_color: text_color.to_string(),
        accent_color,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_rgba;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgba(0.0, 100.0, 50.0, 1.0), "rgba(255,0,0,1.00)");
        assert_eq!(hsl_to_rgba(120.0, 100.0, 50.0, 1.0), "rgba(0,255,0,1.00)");
        assert_eq!(hsl_to_rgba(240.0, 100.0, 50.0, 1.0), "rgba(0,0,255,1.00)");
        assert_eq!(hsl_to_rgba(0.0, 0.0, 100.0, 1.0), "rgba(255,255,255,1.00)");
        assert_eq!(hsl_to_rgba(0.0, 0.0, 0.0, 1.0), "rgba(0,0,0,1.00)");
    }

    #[test]
    fn hsl_alpha_has_two_decimals() {
        assert!(hsl_to_rgba(180.0, 50.0, 50.0, 0.95).ends_with(",0.95)"));
        assert!(hsl_to_rgba(180.0, 50.0, 50.0, 1.0).ends_with(",1.00)"));
    }

    #[test]
    fn hsl_matches_reference_implementation() {
        // Cross-check the hand-rolled sector math against the palette
        // crate, tolerating one count of rounding slack per channel.
        use palette::{FromColor, Hsl, Srgb};

        for h in (0..360).step_by(15) {
            for (s, l) in [(40.0, 20.0), (60.0, 50.0), (85.0, 90.0), (100.0, 50.0)] {
                let token = hsl_to_rgba(f64::from(h), s, l, 1.0);
                let (r, g, b, _) = parse_rgba(&token).unwrap();

                let reference = Srgb::from_color(Hsl::new_srgb(
                    h as f32,
                    (s / 100.0) as f32,
                    (l / 100.0) as f32,
                ))
                .into_format::<u8>();

                assert!(
                    (i16::from(r) - i16::from(reference.red)).abs() <= 1
                        && (i16::from(g) - i16::from(reference.green)).abs() <= 1
                        && (i16::from(b) - i16::from(reference.blue)).abs() <= 1,
                    "hsl({h},{s},{l}) -> {token}, reference {:?}",
                    (reference.red, reference.green, reference.blue)
                );
            }
        }
    }

    #[test]
    fn synthesis_is_deterministic_per_rng_seed() {
        let a = synthesize_with(&mut StdRng::seed_from_u64(99));
        let b = synthesize_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn all_tokens_are_canonical() {
        for seed in 0..50 {
            let p = synthesize_with(&mut StdRng::seed_from_u64(seed));
            for token in [
                &p.page_bg1,
                &p.page_bg2,
                &p.card_bg1,
                &p.card_bg2,
                &p.text_color,
                &p.accent_color,
            ] {
                assert!(parse_rgba(token).is_some(), "unparseable token {token}");
            }
        }
    }

    #[test]
    fn text_color_is_binary() {
        for seed in 0..50 {
            let p = synthesize_with(&mut StdRng::seed_from_u64(seed));
            assert!(
                p.text_color == DARK_MODE_TEXT || p.text_color == LIGHT_MODE_TEXT,
                "unexpected text color {}",
                p.text_color
            );
        }
    }

    #[test]
    fn accent_alpha_is_095() {
        for seed in 0..20 {
            let p = synthesize_with(&mut StdRng::seed_from_u64(seed));
            let (_, _, _, a) = parse_rgba(&p.accent_color).unwrap();
            assert_eq!(a, 0.95);
        }
    }

    #[test]
    fn page_backgrounds_track_the_mode() {
        // Dark mode pins text near-white and page lightness low; verify the
        // pairing holds over many draws.
        for seed in 0..50 {
            let p = synthesize_with(&mut StdRng::seed_from_u64(seed));
            let (r, g, b, _) = parse_rgba(&p.page_bg1).unwrap();
            let luma = (u32::from(r) + u32::from(g) + u32::from(b)) / 3;
            if p.text_color == DARK_MODE_TEXT {
                assert!(luma < 128, "dark-mode page bg too bright: {}", p.page_bg1);
            } else {
                assert!(luma > 128, "light-mode page bg too dark: {}", p.page_bg1);
            }
        }
    }
}
