//! Background resolver: config to CSS `background-image` value.
//!
//! The editor re-invokes this on every style edit (slider drag, color
//! pick), so it performs no caching of its own; generation is cheap enough
//! per keystroke because complexity is bounded. Callers may memoize by
//! `(kind, complexity, contrast, colors, seed, width, height)` since the
//! whole pipeline is referentially transparent.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::config::BackgroundConfig;
use crate::pattern::generate_default;

/// Resolves a config to a CSS background value.
///
/// - `gradient` becomes `linear-gradient(<style>, <c1>, <c2>)`
/// - `image` becomes `url('<url>')` verbatim
/// - procedural kinds render to SVG and wrap it as a base64 data URI
/// - an unknown kind resolves to `none`
///
/// # Example
///
/// ```
/// use sprout_renderer::{background_value, BackgroundConfig};
///
/// let config = BackgroundConfig::Gradient {
///     seed: 1,
///     colors: ["rgba(209, 213, 219, 1)".into(), "rgba(156, 163, 175, 1)".into()],
///     style: "to bottom right".into(),
/// };
/// assert_eq!(
///     background_value(&config),
///     "linear-gradient(to bottom right, rgba(209, 213, 219, 1), rgba(156, 163, 175, 1))",
/// );
/// ```
pub fn background_value(config: &BackgroundConfig) -> String {
    match config {
        BackgroundConfig::Gradient { colors, style, .. } => {
            format!("linear-gradient({style}, {}, {})", colors[0], colors[1])
        }
        BackgroundConfig::Image { url, .. } => format!("url('{url}')"),
        BackgroundConfig::LayeredWaves(_)
        | BackgroundConfig::Blob(_)
        | BackgroundConfig::BlurryGradient(_)
        | BackgroundConfig::LowPoly(_) => {
            let svg = generate_default(config);
            debug!(kind = config.kind_name(), bytes = svg.len(), "encoding background data uri");
            format!("url('data:image/svg+xml;base64,{}')", STANDARD.encode(svg))
        }
        BackgroundConfig::Unknown => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProceduralConfig;
    use base64::Engine as _;

    #[test]
    fn image_url_is_verbatim() {
        let config = BackgroundConfig::Image {
            seed: 0,
            url: "data:image/png;base64,AAAA".to_string(),
        };
        assert_eq!(background_value(&config), "url('data:image/png;base64,AAAA')");
    }

    #[test]
    fn procedural_config_becomes_svg_data_uri() {
        let config = BackgroundConfig::LayeredWaves(ProceduralConfig {
            seed: 11,
            complexity: 3,
            contrast: 0.5,
            colors: vec!["rgba(0,0,0,1)".to_string(), "rgba(9,9,9,1)".to_string()],
        });

        let value = background_value(&config);
        assert!(value.starts_with("url('data:image/svg+xml;base64,"));
        assert!(value.ends_with("')"));

        // The payload must decode back to the exact generated document.
        let b64 = &value["url('data:image/svg+xml;base64,".len()..value.len() - 2];
        let decoded = STANDARD.decode(b64).unwrap();
        assert_eq!(decoded, generate_default(&config).into_bytes());
    }

    #[test]
    fn resolution_is_stable_across_calls() {
        let config = BackgroundConfig::LowPoly(ProceduralConfig {
            seed: 77,
            complexity: 4,
            contrast: 0.9,
            colors: vec!["rgba(5,5,5,1)".to_string(), "rgba(200,200,200,1)".to_string()],
        });
        assert_eq!(background_value(&config), background_value(&config));
    }

    #[test]
    fn unknown_kind_resolves_to_none() {
        assert_eq!(background_value(&BackgroundConfig::Unknown), "none");
    }
}
