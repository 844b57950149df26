use crate::options::CameraOptions;

/// Focal length in camera pixels for the given optics.
///
/// The sensor is assumed to span twice the captured frame width, which is
/// how the rig's webcam crops its sensor.
#[must_use]
pub fn focal_length_px(
    focal_length_mm: f32,
    sensor_width_mm: f32,
    frame_width_px: u32,
) -> f32 {
    (focal_length_mm / sensor_width_mm) * (2.0 * frame_width_px as f32)
}

/// Pinhole-model viewer distance estimate from the apparent eye spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceEstimator {
    ipd_cm: f32,
    focal_length_px: f32,
}

impl DistanceEstimator {
    /// Derive the estimator once from the camera options.
    #[must_use]
    pub fn new(camera: &CameraOptions) -> Self {
        Self {
            ipd_cm: camera.ipd_cm,
            focal_length_px: focal_length_px(
                camera.focal_length_mm,
                camera.sensor_width_mm,
                camera.frame_width_px,
            ),
        }
    }

    /// Focal length in pixels this estimator was derived with.
    #[must_use]
    pub fn focal_length_px(&self) -> f32 {
        self.focal_length_px
    }

    /// Viewer distance in centimeters for an inter-pupillary distance in
    /// pixels. Returns `None` for degenerate (zero, negative, non-finite)
    /// spacings.
    #[must_use]
    pub fn estimate(&self, ipd_px: f32) -> Option<f32> {
        if !ipd_px.is_finite() || ipd_px <= 0.0 {
            return None;
        }
        let distance = (self.ipd_cm * self.focal_length_px) / ipd_px;
        distance.is_finite().then_some(distance)
    }
}
