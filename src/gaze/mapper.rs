use glam::Vec3;

use crate::error::SholoError;
use crate::options::DisplayOptions;

/// Where the viewer is looking on the screen and how far away they are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeSample {
    /// Horizontal gaze point in screen pixels.
    pub screen_x: i32,
    /// Vertical gaze point in screen pixels.
    pub screen_y: i32,
    /// Estimated viewer distance from the screen in centimeters.
    pub distance_cm: f32,
}

/// Camera look rotation derived from a [`GazeSample`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeRotation {
    /// Combined yaw/pitch magnitude in radians, negated.
    pub angle: f32,
    /// Unit axis `[pitch, yaw, 0]`, or zero when looking dead center.
    pub direction: Vec3,
}

/// Maps gaze samples to look rotations for a fixed screen geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct GazeMapper {
    center: [f32; 2],
    cm_per_px: [f32; 2],
    scene_distance_cm: f32,
}

impl GazeMapper {
    /// Build a mapper from the display geometry.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::InvalidOptions`] for a degenerate display.
    pub fn new(display: &DisplayOptions) -> Result<Self, SholoError> {
        display.validate()?;
        let [w, h] = display.resolution_px.map(|v| v as f32);
        Ok(Self {
            center: [w / 2.0, h / 2.0],
            cm_per_px: [display.width_cm / w, display.height_cm / h],
            scene_distance_cm: display.scene_distance_cm,
        })
    }

    /// Look rotation for a gaze sample.
    ///
    /// `arctan2` keeps the mapping stable even when the offset approaches
    /// the viewing distance.
    #[must_use]
    pub fn rotation(&self, sample: &GazeSample) -> GazeRotation {
        let dx = sample.screen_x as f32 - self.center[0];
        let dy = sample.screen_y as f32 - self.center[1];

        let dx_cm = dx * self.cm_per_px[0];
        let dy_cm = dy * self.cm_per_px[1];

        let viewing_distance = self.scene_distance_cm + sample.distance_cm;
        let yaw = dx_cm.atan2(viewing_distance);
        let pitch = dy_cm.atan2(viewing_distance);

        GazeRotation {
            angle: -yaw.hypot(pitch),
            direction: Vec3::new(pitch, yaw, 0.0).normalize_or_zero(),
        }
    }
}
