//! Visualizer configuration and colour resources.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::canvas::{parse_hex_color, Color, DEFAULT_BLUR_RADIUS};
use crate::layout::{BOTTOM_BAND, DEFAULT_SIZE};
use crate::modes::VisualMode;

/// Resource name looked up for the default stroke colour.
pub const DEFAULT_COLOR_RESOURCE: &str = "black";

/// Errors raised while building or updating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid spectrum count: {0} (must be at least 1)")]
    InvalidSpectrumCount(usize),

    #[error("Invalid item margin: {0} (must be non-negative)")]
    InvalidItemMargin(f32),

    #[error("Invalid spectrum ratio: {0} (must be non-negative)")]
    InvalidSpectrumRatio(f32),

    #[error("Invalid circle radius: {0} (must be positive)")]
    InvalidCircleRadius(f32),

    #[error("Invalid bottom band: {0} (must be finite and non-negative)")]
    InvalidBottomBand(f32),

    #[error("Invalid default size: {0} (must be at least 1)")]
    InvalidDefaultSize(u32),

    #[error("Invalid blur radius: {0} (must be finite and non-negative)")]
    InvalidBlurRadius(f32),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Host-provided colour lookup by resource name.
pub trait ColorResources {
    fn color(&self, name: &str) -> Option<Color>;
}

/// Resources that only know `black` and `white`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinColors;

impl ColorResources for BuiltinColors {
    fn color(&self, name: &str) -> Option<Color> {
        match name {
            "black" => Some(Color::BLACK),
            "white" => Some(Color::WHITE),
            _ => None,
        }
    }
}

impl ColorResources for HashMap<String, Color> {
    fn color(&self, name: &str) -> Option<Color> {
        self.get(name).copied()
    }
}

/// Tunable attributes of the visualizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Number of bins drawn per frame.
    pub spectrum_count: usize,
    /// Gap between adjacent bars in surface units.
    pub item_margin: f32,
    /// Gain applied to magnitudes by the circle, net and reflect modes.
    pub spectrum_ratio: f32,
    /// Radius of the base circle.
    pub circle_radius: f32,
    /// Height of the undrawn band at the bottom of the widget.
    pub bottom_band: f32,
    /// Size of a dimension the host does not constrain exactly.
    pub default_size: u32,
    pub blur_radius: f32,
    pub mode: VisualMode,
    /// Hex colour overriding the `black` resource.
    pub color: Option<String>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            spectrum_count: 60,
            item_margin: 12.0,
            spectrum_ratio: 2.0,
            circle_radius: 150.0,
            bottom_band: BOTTOM_BAND,
            default_size: DEFAULT_SIZE,
            blur_radius: DEFAULT_BLUR_RADIUS,
            mode: VisualMode::Wave,
            color: None,
        }
    }
}

impl VisualizerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_spectrum_count(self.spectrum_count)?;
        validate_item_margin(self.item_margin)?;
        validate_spectrum_ratio(self.spectrum_ratio)?;
        validate_circle_radius(self.circle_radius)?;
        if !(self.bottom_band.is_finite() && self.bottom_band >= 0.0) {
            return Err(ConfigError::InvalidBottomBand(self.bottom_band));
        }
        if self.default_size == 0 {
            return Err(ConfigError::InvalidDefaultSize(self.default_size));
        }
        if !(self.blur_radius.is_finite() && self.blur_radius >= 0.0) {
            return Err(ConfigError::InvalidBlurRadius(self.blur_radius));
        }
        if let Some(hex) = &self.color {
            parse_hex_color(hex).ok_or_else(|| ConfigError::InvalidColor(hex.clone()))?;
        }
        Ok(())
    }

    /// Stroke colour: explicit override, then the `black` resource, then
    /// opaque black.
    pub fn resolve_color(&self, resources: &dyn ColorResources) -> Result<Color, ConfigError> {
        if let Some(hex) = &self.color {
            return parse_hex_color(hex).ok_or_else(|| ConfigError::InvalidColor(hex.clone()));
        }
        Ok(resources
            .color(DEFAULT_COLOR_RESOURCE)
            .unwrap_or(Color::BLACK))
    }
}

pub(crate) fn validate_spectrum_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::InvalidSpectrumCount(count));
    }
    Ok(())
}

// NaN fails every comparison, so `!(x >= 0.0)` also rejects it.
pub(crate) fn validate_item_margin(margin: f32) -> Result<(), ConfigError> {
    if !(margin >= 0.0) {
        return Err(ConfigError::InvalidItemMargin(margin));
    }
    Ok(())
}

pub(crate) fn validate_spectrum_ratio(ratio: f32) -> Result<(), ConfigError> {
    if !(ratio >= 0.0) {
        return Err(ConfigError::InvalidSpectrumRatio(ratio));
    }
    Ok(())
}

pub(crate) fn validate_circle_radius(radius: f32) -> Result<(), ConfigError> {
    if !(radius > 0.0) {
        return Err(ConfigError::InvalidCircleRadius(radius));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = VisualizerConfig::default();
        assert_eq!(config.spectrum_count, 60);
        assert_eq!(config.item_margin, 12.0);
        assert_eq!(config.spectrum_ratio, 2.0);
        assert_eq!(config.circle_radius, 150.0);
        assert_eq!(config.bottom_band, 50.0);
        assert_eq!(config.default_size, 500);
        assert_eq!(config.blur_radius, 5.0);
        assert_eq!(config.mode, VisualMode::Wave);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = VisualizerConfig::from_json_str(r#"{ "spectrum_count": 32, "mode": "net" }"#)
            .unwrap();
        assert_eq!(config.spectrum_count, 32);
        assert_eq!(config.mode, VisualMode::Net);
        assert_eq!(config.circle_radius, 150.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = VisualizerConfig {
            color: Some("#ff0000".into()),
            mode: VisualMode::Grain,
            ..Default::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(VisualizerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = [
            VisualizerConfig { spectrum_count: 0, ..Default::default() },
            VisualizerConfig { item_margin: -1.0, ..Default::default() },
            VisualizerConfig { spectrum_ratio: f32::NAN, ..Default::default() },
            VisualizerConfig { circle_radius: 0.0, ..Default::default() },
            VisualizerConfig { color: Some("nope".into()), ..Default::default() },
            VisualizerConfig { bottom_band: -5.0, ..Default::default() },
            VisualizerConfig { bottom_band: f32::INFINITY, ..Default::default() },
            VisualizerConfig { default_size: 0, ..Default::default() },
            VisualizerConfig { blur_radius: -1.0, ..Default::default() },
            VisualizerConfig { blur_radius: f32::NAN, ..Default::default() },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn test_ambient_attributes_are_validated() {
        let err = VisualizerConfig::from_json_str(r#"{ "blur_radius": -2.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBlurRadius(_)));

        let err = VisualizerConfig::from_json_str(r#"{ "default_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaultSize(0)));

        let config = VisualizerConfig { blur_radius: 0.0, bottom_band: 0.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mode_alias_in_json() {
        let config = VisualizerConfig::from_json_str(r#"{ "mode": "mirror" }"#).unwrap();
        assert_eq!(config.mode, VisualMode::Reflect);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = VisualizerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let err = VisualizerConfig::from_json_str(r#"{ "spectrum_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpectrumCount(0)));
    }

    #[test]
    fn test_resolve_color_prefers_override_then_resource() {
        let mut resources: HashMap<String, Color> = HashMap::new();
        resources.insert("black".into(), Color::rgb(10, 20, 30));

        let config = VisualizerConfig::default();
        assert_eq!(config.resolve_color(&resources).unwrap(), Color::rgb(10, 20, 30));
        assert_eq!(config.resolve_color(&HashMap::<String, Color>::new()).unwrap(), Color::BLACK);
        assert_eq!(config.resolve_color(&BuiltinColors).unwrap(), Color::BLACK);

        let config = VisualizerConfig {
            color: Some("#00ff88".into()),
            ..Default::default()
        };
        assert_eq!(config.resolve_color(&resources).unwrap(), Color::rgb(0, 255, 136));
    }
}
