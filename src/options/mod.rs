//! Centralized control-layer options with TOML preset support.
//!
//! All tunable settings (display geometry, camera optics, gesture thresholds,
//! motion dynamics) are consolidated here. Options serialize to/from TOML so
//! a rig can be recalibrated without a rebuild.

mod camera;
mod display;
mod gesture;
mod motion;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use gesture::GestureOptions;
pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SholoError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gesture]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Physical screen geometry and scene placement.
    pub display: DisplayOptions,
    /// Webcam optics and face-tracking parameters.
    pub camera: CameraOptions,
    /// Swipe / stop classification thresholds.
    pub gesture: GestureOptions,
    /// Spin inertia parameters.
    pub motion: MotionOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, malformed TOML, or out-of-range values.
    pub fn load(path: &Path) -> Result<Self, SholoError> {
        let content = std::fs::read_to_string(path).map_err(SholoError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| SholoError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails on serialization or I/O errors.
    pub fn save(&self, path: &Path) -> Result<(), SholoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SholoError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SholoError::Io)?;
        }
        std::fs::write(path, content).map_err(SholoError::Io)
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::InvalidOptions`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SholoError> {
        self.display.validate()?;
        self.camera.validate()?;
        self.gesture.validate()?;
        self.motion.validate()
    }
}

/// Reject zero, negative and non-finite values.
pub(crate) fn require_positive(
    field: &str,
    value: f32,
) -> Result<(), SholoError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SholoError::InvalidOptions(format!(
            "{field} must be positive, got {value}"
        )))
    }
}

/// Reject negative and non-finite values.
pub(crate) fn require_non_negative(
    field: &str,
    value: f32,
) -> Result<(), SholoError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SholoError::InvalidOptions(format!(
            "{field} must be non-negative, got {value}"
        )))
    }
}
