//! Panel configuration: widget sizes and ranges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::control::{DEFAULT_SCALE_MAX, DEFAULT_SCALE_MIN};
use crate::geometry::GeometryError;
use crate::scale::{DEFAULT_OFF_ZONE, ScaleSlider};
use crate::slider::{FADE_EXPONENT, LinearSlider, ValueMap};
use crate::wheel::{DEFAULT_WHEEL_THICKNESS, WheelGeometry};

/// Viewport width the default layout is sized for.
pub const BROWSER_WIDTH: f64 = 390.0;
/// Horizontal margin taken by the slider thumb.
pub const THUMB_MARGIN: f64 = 36.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {section} geometry: {source}")]
    Geometry {
        section: &'static str,
        #[source]
        source: GeometryError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub size: f64,
    pub thickness: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: 300.0,
            thickness: DEFAULT_WHEEL_THICKNESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub min: f64,
    pub max: f64,
    /// Width of the dead zone that switches the control off.
    pub off_zone: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_SCALE_MIN,
            max: DEFAULT_SCALE_MAX,
            off_zone: DEFAULT_OFF_ZONE,
        }
    }
}

/// Layout of the whole control panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub wheel: WheelConfig,
    /// Track length of the horizontal sliders.
    pub slider_length: f64,
    pub scale: ScaleConfig,
    pub fade_exponent: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            wheel: WheelConfig::default(),
            slider_length: BROWSER_WIDTH - THUMB_MARGIN,
            scale: ScaleConfig::default(),
            fade_exponent: FADE_EXPONENT,
        }
    }
}

fn section(section: &'static str) -> impl FnOnce(GeometryError) -> ConfigError {
    move |source| ConfigError::Geometry { section, source }
}

impl PanelConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Build every widget geometry once so misconfiguration surfaces here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wheel_geometry()?;
        self.slider()?;
        self.fade_slider()?;
        self.scale_slider()?;
        Ok(())
    }

    pub fn wheel_geometry(&self) -> Result<WheelGeometry, ConfigError> {
        WheelGeometry::new(self.wheel.size, self.wheel.thickness).map_err(section("wheel"))
    }

    pub fn slider(&self) -> Result<LinearSlider, ConfigError> {
        LinearSlider::horizontal(self.slider_length).map_err(section("slider"))
    }

    pub fn fade_slider(&self) -> Result<LinearSlider, ConfigError> {
        self.slider()?
            .with_value_map(ValueMap::Power {
                exponent: self.fade_exponent,
            })
            .map_err(section("fade"))
    }

    pub fn scale_slider(&self) -> Result<ScaleSlider, ConfigError> {
        ScaleSlider::new(self.slider_length, self.scale.min, self.scale.max)
            .and_then(|s| s.with_off_zone(self.scale.off_zone))
            .map_err(section("scale"))
    }
}
