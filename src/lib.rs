//! sprout-renderer: Procedural background and icon generation for
//! link-in-bio pages.
//!
//! This crate is the rendering core of a page builder: given a small,
//! serializable configuration it synthesizes SVG art (layered waves, blobs,
//! blurry gradients, low-poly meshes), resolves it to CSS background
//! values, derives coherent color palettes for the "randomize" control, and
//! renders the installable web-app icon.
//!
//! Everything here is pure and deterministic per seed: a saved site stores
//! only its [`BackgroundConfig`] values, and reloading reproduces the art
//! byte-for-byte without persisting any rendered image.
//!
//! # Example
//!
//! ```
//! use sprout_renderer::{
//!     background_value, generate_default, BackgroundConfig, ProceduralConfig,
//! };
//!
//! let config = BackgroundConfig::LayeredWaves(ProceduralConfig {
//!     seed: 1718000000000,
//!     complexity: 4,
//!     contrast: 0.8,
//!     colors: vec!["rgba(30,41,59,1)".into(), "rgba(99,102,241,1)".into()],
//! });
//!
//! // A complete SVG document...
//! let svg = generate_default(&config);
//! assert!(svg.starts_with("<svg"));
//!
//! // ...or a CSS background-image value ready for an inline style.
//! let css = background_value(&config);
//! assert!(css.starts_with("url('data:image/svg+xml;base64,"));
//! ```
//!
//! # Randomize palettes
//!
//! ```
//! use sprout_renderer::{contrasting_text_color, synthesize};
//!
//! let palette = synthesize();
//! let button_text = contrasting_text_color(&palette.accent_color);
//! assert!(button_text.starts_with("rgba("));
//! ```
//!
//! # Web-app icons
//!
//! ```
//! use sprout_renderer::{default_letter, render_icon, PwaIconConfig};
//!
//! let config = PwaIconConfig::default();
//! let letter = default_letter("@yourname");
//! let svg = render_icon(&config, letter, 512);
//! assert!(svg.contains("<text"));
//! ```

mod background;
mod color;
mod config;
mod icon;
mod palette;
mod pattern;
mod raster;
mod rng;

pub use background::background_value;
pub use color::{
    ColorError, DARK_TEXT, HexAlpha, LIGHT_TEXT, Rgb, contrasting_text_color, hex_a_to_rgba,
    hex_to_rgb, parse_rgba, rgb_to_hex, rgba_to_hex_a,
};
pub use config::{
    BackgroundConfig, MAX_COLORS, MAX_COMPLEXITY, MAX_CONTRAST, MIN_COLORS, MIN_COMPLEXITY,
    MIN_CONTRAST, ProceduralConfig, PwaIconConfig,
};
pub use icon::{default_letter, render_icon};
pub use palette::{
    DARK_MODE_TEXT, LIGHT_MODE_TEXT, Palette, hsl_to_rgba, synthesize, synthesize_with,
};
pub use pattern::{DEFAULT_HEIGHT, DEFAULT_WIDTH, generate, generate_default};
pub use raster::{ICON_SIZES, RasterError, encode_png, icon_png, rasterize};
pub use rng::SeededRng;
