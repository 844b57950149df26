use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::error::SholoError;

/// Physical screen geometry and the virtual scene's depth behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Visible screen width in centimeters.
    #[schemars(title = "Screen Width (cm)", range(min = 1.0, max = 500.0))]
    pub width_cm: f32,
    /// Visible screen height in centimeters.
    #[schemars(title = "Screen Height (cm)", range(min = 1.0, max = 500.0))]
    pub height_cm: f32,
    /// Screen resolution `[width, height]` in pixels.
    #[schemars(title = "Resolution (px)")]
    pub resolution_px: [u32; 2],
    /// Distance from the screen plane to the virtual scene in centimeters.
    #[schemars(title = "Scene Distance (cm)", range(min = 1.0, max = 1000.0))]
    pub scene_distance_cm: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width_cm: 52.0,
            height_cm: 29.5,
            resolution_px: [1920, 1080],
            scene_distance_cm: 200.0,
        }
    }
}

impl DisplayOptions {
    pub(crate) fn validate(&self) -> Result<(), SholoError> {
        require_positive("display.width_cm", self.width_cm)?;
        require_positive("display.height_cm", self.height_cm)?;
        require_positive("display.scene_distance_cm", self.scene_distance_cm)?;
        if self.resolution_px.contains(&0) {
            return Err(SholoError::InvalidOptions(format!(
                "display.resolution_px must be non-zero, got {:?}",
                self.resolution_px
            )));
        }
        Ok(())
    }
}
