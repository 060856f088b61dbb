//! Scene configuration, loaded from TOML

use bloom_core::{BloomError, Color, Result};
use bloom_gesture::{ClassifierConfig, DebounceConfig};
use bloom_particles::{FormationShape, SpreadOptions};
use bloom_runtime::Mode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a scene needs at construction. Every field has a default, so an
/// empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub initial_mode: Mode,
    pub gesture: GestureConfig,
    pub foliage: LayerConfig,
    pub petals: LayerConfig,
    pub photos: PhotoConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_mode: Mode::Chaos,
            gesture: GestureConfig::default(),
            foliage: LayerConfig::foliage(),
            petals: LayerConfig::petals(),
            photos: PhotoConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values no clamp can make sense of. Layout parameters are clamped
    /// later, not rejected.
    pub fn validate(&self) -> Result<()> {
        for (name, layer) in [("foliage", &self.foliage), ("petals", &self.petals)] {
            if !layer.rate.is_finite() || layer.rate < 0.0 {
                return Err(BloomError::ConfigError(format!(
                    "{name}.rate must be a non-negative number, got {}",
                    layer.rate
                )));
            }
            if !(0.0..1.0).contains(&layer.stagger) {
                return Err(BloomError::ValueOutOfRange {
                    field: format!("{name}.stagger"),
                    min: 0.0,
                    max: 1.0,
                    value: layer.stagger as f64,
                });
            }
        }
        if !self.photos.rate.is_finite() || self.photos.rate < 0.0 {
            return Err(BloomError::ConfigError(format!(
                "photos.rate must be a non-negative number, got {}",
                self.photos.rate
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub classifier: ClassifierConfig,
    pub debounce: DebounceConfig,
}

/// One dual-position particle layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    pub count: usize,
    pub shape: FormationShape,
    /// Progress smoothing speed in 1/seconds
    pub rate: f32,
    /// Fraction of the transition by which the slowest particle trails, in [0, 1)
    pub stagger: f32,
    pub size: f32,
    pub size_variance: f32,
    pub color: Color,
}

impl LayerConfig {
    pub fn foliage() -> Self {
        Self {
            count: 12_000,
            shape: FormationShape::default(),
            rate: 2.5,
            stagger: 0.3,
            size: 0.08,
            size_variance: 0.4,
            color: Color::from_hex(0x2E7D4F),
        }
    }

    pub fn petals() -> Self {
        Self {
            count: 600,
            shape: FormationShape {
                seed: 7,
                max_radius: 5.0,
                height: 7.5,
                density_exponent: 0.8,
                arm_count: 5,
                spiral_twist: 0.6,
                height_jitter: 0.9,
                radial_jitter: 0.3,
                ..FormationShape::default()
            },
            rate: 2.0,
            stagger: 0.45,
            size: 0.25,
            size_variance: 0.3,
            color: Color::from_hex(0xF4A7C0),
        }
    }
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self::foliage()
    }
}

/// Photo cards laid out by the spread function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoConfig {
    pub count: usize,
    pub spread: SpreadOptions,
    pub rate: f32,
    /// Spread easing once fully formed; 1 keeps the cards fully spread
    pub formed_easing: f32,
    /// Height of the ring's center
    pub center_y: f32,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            count: 12,
            spread: SpreadOptions::default(),
            rate: 2.0,
            formed_easing: 0.55,
            center_y: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = SceneConfig::from_toml_str("").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
initial_mode = "formed"

[gesture.debounce]
threshold = 8

[gesture.classifier]
finger_ratio = 1.7

[foliage]
count = 500
rate = 4.0

[foliage.shape]
max_radius = 2.0
arm_count = 2

[photos]
count = 3
"#;
        let config = SceneConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.initial_mode, Mode::Formed);
        assert_eq!(config.gesture.debounce.threshold, 8);
        assert!((config.gesture.classifier.finger_ratio - 1.7).abs() < 1e-6);
        assert!((config.gesture.classifier.thumb_ratio - 1.2).abs() < 1e-6);
        assert_eq!(config.foliage.count, 500);
        assert_eq!(config.foliage.shape.arm_count, 2);
        assert_eq!(config.petals, LayerConfig::petals());
        assert_eq!(config.photos.count, 3);
    }

    #[test]
    fn rejects_stagger_out_of_range() {
        let err = SceneConfig::from_toml_str("[petals]\nstagger = 1.5\n").unwrap_err();
        assert!(matches!(err, BloomError::ValueOutOfRange { .. }));
    }

    #[test]
    fn rejects_negative_rate() {
        assert!(SceneConfig::from_toml_str("[photos]\nrate = -1.0\n").is_err());
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = SceneConfig::from_toml_str("initial_mode = \"tree\"\n").unwrap_err();
        assert!(matches!(err, BloomError::TomlParseError(_)));
    }

    #[test]
    fn toml_roundtrip_preserves_config() {
        let config = SceneConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(SceneConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn negative_count_is_not_representable() {
        assert!(SceneConfig::from_toml_str("[foliage]\ncount = -5\n").is_err());
    }
}
