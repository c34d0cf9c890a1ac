//! Serializable generator configuration for persisted sites.
//!
//! A [`BackgroundConfig`] captures everything needed to reproduce one page
//! or card background. Saved sites store these verbatim as JSON, so the
//! wire format here is the compatibility contract:
//!
//! ```json
//! { "type": "layered-waves", "seed": 1718000000000,
//!   "complexity": 4, "contrast": 0.8,
//!   "colors": ["rgba(30,41,59,1)", "rgba(99,102,241,1)"] }
//! ```
//!
//! Decoding is best-effort by design: a config written by a newer app
//! version with a pattern kind this build doesn't know about decodes to
//! [`BackgroundConfig::Unknown`] and renders as a blank background rather
//! than failing the whole site load.

use serde::{Deserialize, Serialize};

/// Smallest usable point/shape count for a procedural pattern.
pub const MIN_COMPLEXITY: u32 = 2;
/// Largest point/shape count; keeps generator cost safe for per-keystroke
/// slider edits.
pub const MAX_COMPLEXITY: u32 = 15;
/// Lower bound of the jitter multiplier.
pub const MIN_CONTRAST: f64 = 0.1;
/// Upper bound of the jitter multiplier.
pub const MAX_CONTRAST: f64 = 1.5;

/// Procedural backgrounds need at least this many colors (draw order is
/// z-order, and one layer is not a pattern).
pub const MIN_COLORS: usize = 2;
/// And at most this many.
pub const MAX_COLORS: usize = 4;

// ============================================================================
// Procedural parameters
// ============================================================================

/// Shared parameters of the four procedural pattern kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ProceduralConfig {
    /// Seed for the deterministic stream. Normally wall-clock derived when
    /// the user edits a pattern, then persisted so reloads reproduce it.
    #[serde(default)]
    pub seed: u64,

    /// Point/shape count, UI-enforced to `2..=15`.
    pub complexity: u32,

    /// Jitter/variance multiplier, UI-enforced to `0.1..=1.5`.
    pub contrast: f64,

    /// Ordered palette, 2-4 rgba tokens. Order determines draw z-order.
    pub colors: Vec<String>,
}

impl ProceduralConfig {
    /// Complexity clamped into the documented range.
    ///
    /// The UI enforces the range, but a corrupted persisted config must not
    /// blow up generation cost, so the generator clamps again.
    pub fn clamped_complexity(&self) -> u32 {
        self.complexity.clamp(MIN_COMPLEXITY, MAX_COMPLEXITY)
    }

    /// Contrast clamped into the documented range.
    pub fn clamped_contrast(&self) -> f64 {
        self.contrast.clamp(MIN_CONTRAST, MAX_CONTRAST)
    }
}

// ============================================================================
// BackgroundConfig
// ============================================================================

/// Tagged configuration selecting a background kind and its parameters.
///
/// Adding a pattern kind is a compile-time-checked change: every consumer
/// (generator, resolver) matches exhaustively on this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BackgroundConfig {
    /// Plain two-stop CSS gradient; not procedurally drawn.
    Gradient {
        #[serde(default)]
        seed: u64,
        /// Exactly two rgba tokens.
        colors: [String; 2],
        /// Free-form CSS gradient direction keyword, e.g. `to bottom right`.
        style: String,
    },

    /// External or uploaded image; not procedurally drawn.
    Image {
        #[serde(default)]
        seed: u64,
        /// May be an external URL or a `data:` URI.
        url: String,
    },

    /// Stacked horizontal waves, one per color.
    LayeredWaves(ProceduralConfig),

    /// Concentric smoothed polygons around the canvas center.
    Blob(ProceduralConfig),

    /// Gaussian-blurred random circles, one per color.
    BlurryGradient(ProceduralConfig),

    /// Jittered triangle mesh with per-triangle random palette picks.
    LowPoly(ProceduralConfig),

    /// A kind this build doesn't know about (config from a newer app
    /// version). Renders as a blank background.
    #[serde(other)]
    Unknown,
}

impl BackgroundConfig {
    /// The seed driving this config's deterministic stream.
    pub fn seed(&self) -> u64 {
        match self {
            Self::Gradient { seed, .. } | Self::Image { seed, .. } => *seed,
            Self::LayeredWaves(p) | Self::Blob(p) | Self::BlurryGradient(p) | Self::LowPoly(p) => {
                p.seed
            }
            Self::Unknown => 0,
        }
    }

    /// The wire-format kind tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Gradient { .. } => "gradient",
            Self::Image { .. } => "image",
            Self::LayeredWaves(_) => "layered-waves",
            Self::Blob(_) => "blob",
            Self::BlurryGradient(_) => "blurry-gradient",
            Self::LowPoly(_) => "low-poly",
            Self::Unknown => "unknown",
        }
    }

    /// The configured colors, in draw order. Empty for kinds without a
    /// palette (`image`, `unknown`).
    pub fn colors(&self) -> &[String] {
        match self {
            Self::Gradient { colors, .. } => colors.as_slice(),
            Self::LayeredWaves(p) | Self::Blob(p) | Self::BlurryGradient(p) | Self::LowPoly(p) => {
                &p.colors
            }
            Self::Image { .. } | Self::Unknown => &[],
        }
    }

    /// True for the four algorithmically drawn kinds.
    pub fn is_procedural(&self) -> bool {
        self.procedural().is_some()
    }

    /// The procedural parameters, if this is a procedural kind.
    pub fn procedural(&self) -> Option<&ProceduralConfig> {
        match self {
            Self::LayeredWaves(p) | Self::Blob(p) | Self::BlurryGradient(p) | Self::LowPoly(p) => {
                Some(p)
            }
            _ => None,
        }
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a config from a JSON string.
    ///
    /// Unknown pattern kinds decode to [`BackgroundConfig::Unknown`]; only
    /// structurally invalid JSON is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// PwaIconConfig
// ============================================================================

/// Settings for the generated web-app icon: a single centered letter over a
/// layered-waves or flat background.
///
/// Serialized with camelCase field names to match the persisted site state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct PwaIconConfig {
    /// Draw the waves background; a flat `bg_color1` square otherwise.
    pub waves: bool,

    /// First background color; also the solid fill when `waves` is off.
    pub bg_color1: String,

    /// Second background color, used by the waves variant.
    pub bg_color2: String,

    /// Fill for the centered letter.
    pub letter_color: String,

    /// The letter to draw. Empty means "derive from the profile name";
    /// see [`default_letter`](crate::default_letter).
    pub letter: String,

    /// CSS font-family stack for the letter.
    pub font_family: String,

    /// Wave point count, same meaning as [`ProceduralConfig::complexity`].
    pub complexity: u32,

    /// Wave jitter, same meaning as [`ProceduralConfig::contrast`].
    pub contrast: f64,

    /// Seed for the waves variant, persisted so exported icons match the
    /// editor preview.
    pub seed: u64,
}

impl Default for PwaIconConfig {
    fn default() -> Self {
        Self {
            waves: true,
            bg_color1: "rgba(99, 102, 241, 1)".to_string(),
            bg_color2: "rgba(168, 85, 247, 1)".to_string(),
            letter_color: "rgba(255, 255, 255, 1)".to_string(),
            letter: String::new(),
            font_family: "'Inter', sans-serif".to_string(),
            complexity: 4,
            contrast: 1.0,
            seed: 0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
