use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive};
use crate::error::SholoError;

/// Webcam optics and face-tracking parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Lens focal length in millimeters.
    #[schemars(title = "Focal Length (mm)", range(min = 0.5, max = 50.0))]
    pub focal_length_mm: f32,
    /// Sensor width in millimeters.
    #[schemars(title = "Sensor Width (mm)", range(min = 0.5, max = 50.0))]
    pub sensor_width_mm: f32,
    /// Captured frame width in pixels.
    #[schemars(skip)]
    pub frame_width_px: u32,
    /// Real inter-pupillary distance of the viewer in centimeters.
    #[schemars(title = "Inter-Pupillary Distance (cm)", range(min = 4.0, max = 9.0), extend("step" = 0.1))]
    pub ipd_cm: f32,
    /// Mirror landmarks horizontally (selfie view).
    #[schemars(title = "Mirror")]
    pub mirror: bool,
    /// Below this estimated distance the viewer is flagged as too close.
    #[schemars(title = "Minimum Distance (cm)", range(min = 0.0, max = 200.0))]
    pub min_distance_cm: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            focal_length_mm: 3.92,
            // 1/2.9" sensor format
            sensor_width_mm: (1.0 / 2.9) * 2.54 * 10.0,
            frame_width_px: 640,
            ipd_cm: 6.5,
            mirror: true,
            min_distance_cm: 20.0,
        }
    }
}

impl CameraOptions {
    pub(crate) fn validate(&self) -> Result<(), SholoError> {
        require_positive("camera.focal_length_mm", self.focal_length_mm)?;
        require_positive("camera.sensor_width_mm", self.sensor_width_mm)?;
        require_positive("camera.ipd_cm", self.ipd_cm)?;
        if self.frame_width_px == 0 {
            return Err(SholoError::InvalidOptions(
                "camera.frame_width_px must be non-zero".into(),
            ));
        }
        require_non_negative(
            "camera.min_distance_cm",
            self.min_distance_cm,
        )
    }
}
