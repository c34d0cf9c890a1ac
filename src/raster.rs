//! SVG-to-PNG rasterization for export icons.
//!
//! The editor previews everything as SVG data URIs, but exported sites ship
//! fixed-size PNG icons for the favicon and the web-app manifest. This
//! module is the in-process equivalent of the browser's canvas step: given
//! the exact SVG text, produce the exact bitmap.

use std::io::Cursor;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use thiserror::Error;
use tracing::debug;

use crate::config::PwaIconConfig;
use crate::icon::render_icon;

/// The icon sizes an exported site ships: favicon, manifest, splash.
pub const ICON_SIZES: [u32; 3] = [32, 192, 512];

/// Errors from the rasterization pipeline.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The SVG text could not be parsed.
    #[error("failed to parse svg: {0}")]
    Parse(#[from] resvg::usvg::Error),

    /// Pixmap allocation failed (zero or absurd size).
    #[error("failed to allocate {0}x{0} pixmap")]
    Pixmap(u32),

    /// PNG encoding failed.
    #[error("failed to encode png: {0}")]
    Encode(#[from] image::ImageError),
}

/// Rasterizes an SVG document to an RGBA bitmap of `size` x `size` pixels.
///
/// The document is scaled uniformly so its larger dimension fills `size`;
/// generated backgrounds and icons are square already, so this is a plain
/// resize. System fonts are loaded so the icon letter renders.
pub fn rasterize(svg: &str, size: u32) -> Result<RgbaImage, RasterError> {
    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = Tree::from_str(svg, &options)?;

    let doc_size = tree.size();
    let scale = size as f32 / doc_size.width().max(doc_size.height());

    let mut pixmap = Pixmap::new(size, size).ok_or(RasterError::Pixmap(size))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    debug!(size, "rasterized svg");
    Ok(pixmap_to_rgba(&pixmap))
}

/// Encodes an RGBA bitmap as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RasterError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Renders and rasterizes a web-app icon in one step.
///
/// # Example
///
/// ```no_run
/// use sprout_renderer::{icon_png, PwaIconConfig, ICON_SIZES};
///
/// let config = PwaIconConfig::default();
/// for size in ICON_SIZES {
///     let png = icon_png(&config, 'S', size).unwrap();
///     assert!(!png.is_empty());
/// }
/// ```
pub fn icon_png(config: &PwaIconConfig, letter: char, size: u32) -> Result<Vec<u8>, RasterError> {
    let svg = render_icon(config, letter, size);
    encode_png(&rasterize(&svg, size)?)
}

/// Converts a premultiplied tiny-skia pixmap into a straight-alpha image.
fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (px, out) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        let a = px.alpha();
        *out = if a == 0 {
            Rgba([0, 0, 0, 0])
        } else {
            let unmul = |c: u8| (f32::from(c) * 255.0 / f32::from(a)).round().min(255.0) as u8;
            Rgba([unmul(px.red()), unmul(px.green()), unmul(px.blue()), a])
        };
    }
    img
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackgroundConfig, ProceduralConfig};
    use crate::pattern::generate;

    fn waves_config() -> BackgroundConfig {
        BackgroundConfig::LayeredWaves(ProceduralConfig {
            seed: 4,
            complexity: 3,
            contrast: 0.5,
            colors: vec![
                "rgba(200,30,30,1)".to_string(),
                "rgba(30,30,200,1)".to_string(),
            ],
        })
    }

    #[test]
    fn rasterizes_generated_pattern_at_requested_size() {
        let svg = generate(&waves_config(), 64, 64);
        let img = rasterize(&svg, 64).unwrap();
        assert_eq!(img.dimensions(), (64, 64));

        // Background rect is the first palette color: the top-left corner
        // must be opaque and red-dominant.
        let corner = img.get_pixel(0, 0);
        assert_eq!(corner[3], 255);
        assert!(corner[0] > corner[2], "expected red-dominant corner, got {corner:?}");
    }

    #[test]
    fn rescales_to_target_size() {
        // A 64x64 document requested at 32 must come out 32x32.
        let svg = generate(&waves_config(), 64, 64);
        let img = rasterize(&svg, 32).unwrap();
        assert_eq!(img.dimensions(), (32, 32));
    }

    #[test]
    fn malformed_svg_is_an_error_not_a_panic() {
        assert!(rasterize("<svg", 32).is_err());
    }

    #[test]
    fn png_bytes_decode_back() {
        let svg = generate(&waves_config(), 32, 32);
        let img = rasterize(&svg, 32).unwrap();
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded, img);
    }

    #[test]
    fn icon_png_produces_all_export_sizes() {
        // Flat variant: no font lookup involved in the background, and the
        // text layer simply doesn't rasterize on hosts without fonts.
        let config = PwaIconConfig {
            waves: false,
            ..PwaIconConfig::default()
        };
        for size in ICON_SIZES {
            let png = icon_png(&config, 'S', size).unwrap();
            let decoded = image::load_from_memory(&png).unwrap();
            assert_eq!(decoded.width(), size);
            assert_eq!(decoded.height(), size);
        }
    }
}
