//! Procedural SVG pattern generation.
//!
//! [`generate`] is a pure function from a [`BackgroundConfig`] plus target
//! dimensions to a complete SVG document string: a solid background rect
//! (first palette color) followed by one shape group per configured color.
//!
//! Determinism is the load-bearing property here. Each call seeds one
//! [`SeededRng`] and threads it through every sub-step in a fixed order, so
//! the same config always yields a byte-identical document. In particular
//! the low-poly kind's per-triangle color picks come from the same stream
//! as its vertex jitter; splitting the stream would silently break
//! reproducibility of saved sites.
//!
//! No input can make this panic: non-procedural and unknown kinds degrade
//! to the background rect alone, and out-of-range parameters are clamped.

use std::f64::consts::TAU;

use tracing::debug;

use crate::color::rgba_to_hex_a;
use crate::config::{BackgroundConfig, ProceduralConfig};
use crate::rng::SeededRng;

/// Default render width for page/card backgrounds.
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default render height for page/card backgrounds.
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Background fill used when a config carries no colors at all.
const FALLBACK_FILL: &str = "rgba(255,255,255,1)";

/// Row ceiling for the low-poly mesh. Tall card canvases can push the
/// aspect ratio well past 1, but the mesh cost must stay bounded the same
/// way complexity is.
const MAX_LOW_POLY_ROWS: usize = 60;

#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
}

// ============================================================================
// Entry points
// ============================================================================

/// Generates pattern SVG at the default 1920x1080 background size.
pub fn generate_default(config: &BackgroundConfig) -> String {
    generate(config, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Generates a complete SVG document for the given config and dimensions.
///
/// # Example
///
/// ```
/// use sprout_renderer::{generate, BackgroundConfig, ProceduralConfig};
///
/// let config = BackgroundConfig::Blob(ProceduralConfig {
///     seed: 42,
///     complexity: 6,
///     contrast: 0.5,
///     colors: vec!["rgba(30,41,59,1)".into(), "rgba(99,102,241,1)".into()],
/// });
/// let svg = generate(&config, 800, 600);
/// assert!(svg.starts_with("<svg"));
/// assert_eq!(svg, generate(&config, 800, 600)); // deterministic
/// ```
pub fn generate(config: &BackgroundConfig, width: u32, height: u32) -> String {
    debug!(kind = config.kind_name(), width, height, "generating pattern svg");

    let w = f64::from(width);
    let h = f64::from(height);
    let mut rng = SeededRng::new(config.seed());

    let first = config
        .colors()
        .first()
        .map(String::as_str)
        .unwrap_or(FALLBACK_FILL);
    let bg = rgba_to_hex_a(first);
    let bg_rect = format!(
        r#"<rect width="{width}" height="{height}" fill="{}" fill-opacity="{}" />"#,
        bg.hex, bg.alpha
    );

    let shapes = match config {
        BackgroundConfig::LayeredWaves(p) => layered_waves(p, &mut rng, w, h),
        BackgroundConfig::Blob(p) => blobs(p, &mut rng, w, h),
        BackgroundConfig::BlurryGradient(p) => blurry_gradient(p, &mut rng, w, h),
        BackgroundConfig::LowPoly(p) => low_poly(p, &mut rng, w, h),
        // Gradient/image are resolved as CSS, not drawn; an unknown kind
        // from a newer app version degrades to the background rect.
        BackgroundConfig::Gradient { .. }
        | BackgroundConfig::Image { .. }
        | BackgroundConfig::Unknown => String::new(),
    };

    format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="none">{bg_rect}{shapes}</svg>"#
    )
}

// ============================================================================
// Spline helper
// ============================================================================

/// Connects points with cubic Bezier segments, Catmull-Rom style: control
/// points are offset by one sixth of the vector between each point's
/// neighbors two steps apart.
///
/// With `fill_to_bottom`, the path runs down to `(width,height)`, across to
/// `(0,height)` and closes, guaranteeing full-canvas fill for wave shapes.
fn smooth_path(pts: &[Point], width: f64, height: f64, fill_to_bottom: bool) -> String {
    let Some(first) = pts.first() else {
        return String::new();
    };
    let mut d = format!("M {},{}", first.x, first.y);

    for i in 0..pts.len().saturating_sub(1) {
        let p0 = if i == 0 { pts[0] } else { pts[i - 1] };
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p3 = if i + 2 < pts.len() { pts[i + 2] } else { p2 };

        let c1x = p1.x + (p2.x - p0.x) / 6.0;
        let c1y = p1.y + (p2.y - p0.y) / 6.0;
        let c2x = p2.x - (p3.x - p1.x) / 6.0;
        let c2y = p2.y - (p3.y - p1.y) / 6.0;
        d.push_str(&format!(" C {c1x},{c1y} {c2x},{c2y} {},{}", p2.x, p2.y));
    }

    if fill_to_bottom {
        d.push_str(&format!(" L {width},{height} L 0,{height} Z"));
    }
    d
}

fn fill_attrs(token: &str) -> (String, f64) {
    let ha = rgba_to_hex_a(token);
    (ha.hex, ha.alpha)
}

// ============================================================================
// Pattern kinds
// ============================================================================

/// One wave per color. Wave `i` sits on a baseline at height fraction
/// `(i+1)/(n+1) * 0.8` with `complexity` jittered interior points.
fn layered_waves(p: &ProceduralConfig, rng: &mut SeededRng, w: f64, h: f64) -> String {
    let complexity = p.clamped_complexity();
    let contrast = p.clamped_contrast();
    let n = p.colors.len() as f64;

    let mut out = String::new();
    for (i, color) in p.colors.iter().enumerate() {
        let base_y = (h / (n + 1.0)) * (i as f64 + 1.0) * 0.8;
        let mut pts = vec![Point { x: 0.0, y: base_y }];
        for j in 1..=complexity {
            pts.push(Point {
                x: (f64::from(j) / f64::from(complexity)) * w,
                y: base_y + (rng.next_f64() - 0.5) * h * contrast * 0.5,
            });
        }
        // Settle back on the baseline at the right edge.
        pts.push(Point { x: w, y: base_y });

        let (hex, alpha) = fill_attrs(color);
        let d = smooth_path(&pts, w, h, true);
        out.push_str(&format!(
            r#"<path d="{d}" fill="{hex}" fill-opacity="{alpha}" />"#
        ));
    }
    out
}

/// One closed polygon per color around the canvas center, radius growing
/// slightly with layer index, smoothed into a blob.
fn blobs(p: &ProceduralConfig, rng: &mut SeededRng, w: f64, h: f64) -> String {
    let sides = p.clamped_complexity();
    let contrast = p.clamped_contrast();
    let cx = w / 2.0;
    let cy = h / 2.0;

    let mut out = String::new();
    for (i, color) in p.colors.iter().enumerate() {
        let radius = w.min(h) * 0.3 * (1.0 + i as f64 * 0.1);
        let mut pts = Vec::with_capacity(sides as usize + 1);
        for j in 0..sides {
            let angle = f64::from(j) / f64::from(sides) * TAU;
            let r = radius * (1.0 + (rng.next_f64() - 0.5) * contrast);
            pts.push(Point {
                x: cx + angle.cos() * r,
                y: cy + angle.sin() * r,
            });
        }
        // Close by coinciding first and last point; blobs get no
        // fill-to-bottom tail.
        pts.push(pts[0]);

        let (hex, alpha) = fill_attrs(color);
        let d = smooth_path(&pts, w, h, false);
        out.push_str(&format!(
            r#"<path d="{d}" fill="{hex}" fill-opacity="{alpha}" />"#
        ));
    }
    out
}

/// One randomly placed, randomly sized circle per color, all softened by a
/// shared Gaussian blur filter.
fn blurry_gradient(p: &ProceduralConfig, rng: &mut SeededRng, w: f64, h: f64) -> String {
    let complexity = p.clamped_complexity();
    let contrast = p.clamped_contrast();

    let mut out = format!(
        r#"<defs><filter id="blur-filter"><feGaussianBlur stdDeviation="{}" /></filter></defs>"#,
        contrast * 50.0
    );
    for color in &p.colors {
        let cx = rng.next_f64() * w;
        let cy = rng.next_f64() * h;
        let r = (rng.next_f64() * 0.2 + 0.2) * w.min(h) * (f64::from(complexity) / 5.0);
        let (hex, alpha) = fill_attrs(color);
        out.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{hex}" fill-opacity="{alpha}" filter="url(#blur-filter)" />"#
        ));
    }
    out
}

/// A jittered grid of `complexity x round(complexity * h/w)` cells, each
/// split into two triangles along one diagonal. Triangle colors are
/// independent uniform picks from the palette, not tied to grid position.
fn low_poly(p: &ProceduralConfig, rng: &mut SeededRng, w: f64, h: f64) -> String {
    if p.colors.is_empty() {
        return String::new();
    }
    let contrast = p.clamped_contrast();
    let cols = p.clamped_complexity() as usize;
    // h/w is not finite for a zero-width canvas; treat that as square.
    let ratio = h / w;
    let ratio = if ratio.is_finite() { ratio } else { 1.0 };
    let rows = ((cols as f64) * ratio)
        .round()
        .clamp(1.0, MAX_LOW_POLY_ROWS as f64) as usize;

    let mut points = Vec::with_capacity((rows + 1) * (cols + 1));
    for i in 0..=rows {
        for j in 0..=cols {
            points.push(Point {
                x: (j as f64 / cols as f64) * w + (rng.next_f64() - 0.5) * w / cols as f64 * contrast,
                y: (i as f64 / rows as f64) * h + (rng.next_f64() - 0.5) * h / rows as f64 * contrast,
            });
        }
    }

    let pick = |rng: &mut SeededRng| {
        let idx = (rng.next_f64() * p.colors.len() as f64) as usize;
        p.colors[idx.min(p.colors.len() - 1)].as_str()
    };

    let mut out = String::new();
    for i in 0..rows {
        for j in 0..cols {
            let p1 = points[i * (cols + 1) + j];
            let p2 = points[i * (cols + 1) + j + 1];
            let p3 = points[(i + 1) * (cols + 1) + j];
            let p4 = points[(i + 1) * (cols + 1) + j + 1];

            let (hex1, a1) = fill_attrs(pick(rng));
            let (hex2, a2) = fill_attrs(pick(rng));
            out.push_str(&format!(
                r#"<polygon points="{},{} {},{} {},{}" fill="{hex1}" fill-opacity="{a1}" />"#,
                p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            ));
            out.push_str(&format!(
                r#"<polygon points="{},{} {},{} {},{}" fill="{hex2}" fill-opacity="{a2}" />"#,
                p2.x, p2.y, p4.x, p4.y, p3.x, p3.y
            ));
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
