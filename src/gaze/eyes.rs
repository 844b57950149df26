use glam::Vec2;

use super::distance::DistanceEstimator;
use super::mapper::GazeSample;
use crate::error::SholoError;
use crate::options::Options;

/// Face-mesh landmarks outlining the left eye (corners, upper and lower lid).
pub const LEFT_EYE: [usize; 4] = [33, 133, 159, 145];
/// Face-mesh landmarks outlining the right eye.
pub const RIGHT_EYE: [usize; 4] = [362, 263, 386, 374];

/// Eye centres of one detected face, normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Left eye centre.
    pub left_eye: Vec2,
    /// Right eye centre.
    pub right_eye: Vec2,
}

impl Face {
    /// Eye centres from a full face mesh. `None` if the mesh is too short
    /// to contain the eye landmarks.
    #[must_use]
    pub fn from_mesh(points: &[Vec2]) -> Option<Self> {
        Some(Self {
            left_eye: eye_center(points, &LEFT_EYE)?,
            right_eye: eye_center(points, &RIGHT_EYE)?,
        })
    }

    /// The same face seen in a horizontally flipped frame.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self {
            left_eye: Vec2::new(1.0 - self.left_eye.x, self.left_eye.y),
            right_eye: Vec2::new(1.0 - self.right_eye.x, self.right_eye.y),
        }
    }
}

fn eye_center(points: &[Vec2], indices: &[usize; 4]) -> Option<Vec2> {
    let sum: Vec2 = indices
        .iter()
        .map(|&i| points.get(i).copied())
        .sum::<Option<Vec2>>()?;
    Some(sum / indices.len() as f32)
}

/// Turns a detected face into a [`GazeSample`].
///
/// The eye midpoint's offset from the frame centre is projected linearly
/// onto the screen; the eye spacing gives the viewer distance.
#[derive(Debug, Clone)]
pub struct EyeTracker {
    estimator: DistanceEstimator,
    resolution: [u32; 2],
    min_distance_cm: f32,
    too_close: bool,
}

impl EyeTracker {
    /// Build a tracker for the configured camera and display.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::InvalidOptions`] for invalid optics or display.
    pub fn new(options: &Options) -> Result<Self, SholoError> {
        options.camera.validate()?;
        options.display.validate()?;
        Ok(Self {
            estimator: DistanceEstimator::new(&options.camera),
            resolution: options.display.resolution_px,
            min_distance_cm: options.camera.min_distance_cm,
            too_close: false,
        })
    }

    /// Whether the last tracked face was closer than the comfort minimum.
    #[must_use]
    pub fn is_too_close(&self) -> bool {
        self.too_close
    }

    /// Gaze sample for `face` in a frame of `frame_size` pixels.
    ///
    /// Returns `None` when the eye centres coincide in pixel space (no
    /// usable distance) or the frame is empty.
    pub fn track(
        &mut self,
        face: &Face,
        frame_size: [u32; 2],
    ) -> Option<GazeSample> {
        let [w, h] = frame_size;
        if w == 0 || h == 0 {
            return None;
        }
        let (w, h) = (w as f32, h as f32);

        let left_x = (face.left_eye.x * w) as i32;
        let left_y = (face.left_eye.y * h) as i32;
        let right_x = (face.right_eye.x * w) as i32;
        let right_y = (face.right_eye.y * h) as i32;

        let ipd_px =
            ((left_x - right_x) as f32).hypot((left_y - right_y) as f32);
        let Some(distance_cm) = self.estimator.estimate(ipd_px) else {
            log::debug!("eye centres coincide, skipping gaze for this frame");
            return None;
        };
        self.update_too_close(distance_cm);

        let eye_x = (left_x + right_x) as f32 / 2.0;
        let eye_y = (left_y + right_y) as f32 / 2.0;
        let relative_x = (eye_x - w / 2.0) / (w / 2.0);
        let relative_y = (eye_y - h / 2.0) / (h / 2.0);

        let [res_x, res_y] = self.resolution.map(|v| v as f32);
        Some(GazeSample {
            screen_x: ((relative_x + 1.0) / 2.0 * res_x) as i32,
            screen_y: ((relative_y + 1.0) / 2.0 * res_y) as i32,
            distance_cm,
        })
    }

    fn update_too_close(&mut self, distance_cm: f32) {
        let too_close = distance_cm < self.min_distance_cm;
        if too_close && !self.too_close {
            log::warn!(
                "viewer too close to the screen ({distance_cm:.1} cm < {:.1} cm)",
                self.min_distance_cm
            );
        } else if !too_close && self.too_close {
            log::info!("viewer back at a comfortable distance");
        }
        self.too_close = too_close;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: [u32; 2] = [640, 480];

    fn tracker() -> EyeTracker {
        EyeTracker::new(&Options::default()).unwrap()
    }

    fn face(left: (f32, f32), right: (f32, f32)) -> Face {
        Face {
            left_eye: Vec2::new(left.0, left.1),
            right_eye: Vec2::new(right.0, right.1),
        }
    }

    #[test]
    fn centered_face_looks_at_screen_center() {
        let mut t = tracker();
        let sample =
            t.track(&face((0.4375, 0.5), (0.5625, 0.5)), FRAME).unwrap();
        assert_eq!(sample.screen_x, 960);
        assert_eq!(sample.screen_y, 540);
        // 80 px apart
        let expected = 6.5 * 572.8756 / 80.0;
        assert!((sample.distance_cm - expected).abs() < 0.01);
        assert!(!t.is_too_close());
    }

    #[test]
    fn face_left_of_frame_maps_left_on_screen() {
        let mut t = tracker();
        let sample = t.track(&face((0.2, 0.25), (0.3, 0.25)), FRAME).unwrap();
        assert!(sample.screen_x < 960);
        assert!(sample.screen_y < 540);
    }

    #[test]
    fn coincident_eyes_produce_no_sample() {
        let mut t = tracker();
        assert_eq!(t.track(&face((0.5, 0.5), (0.5, 0.5)), FRAME), None);
        // Sub-pixel spacing truncates to the same pixel
        assert_eq!(t.track(&face((0.5, 0.5), (0.5005, 0.5)), FRAME), None);
    }

    #[test]
    fn too_close_flag_follows_distance() {
        let mut t = tracker();
        let _ = t.track(&face((0.1, 0.5), (0.9, 0.5)), FRAME).unwrap();
        assert!(t.is_too_close());
        let _ = t.track(&face((0.4375, 0.5), (0.5625, 0.5)), FRAME).unwrap();
        assert!(!t.is_too_close());
    }

    #[test]
    fn eye_centres_from_mesh() {
        let mut mesh = vec![Vec2::ZERO; 468];
        for &i in &LEFT_EYE {
            mesh[i] = Vec2::new(0.4, 0.5);
        }
        mesh[LEFT_EYE[0]] = Vec2::new(0.36, 0.5);
        mesh[LEFT_EYE[1]] = Vec2::new(0.44, 0.5);
        for &i in &RIGHT_EYE {
            mesh[i] = Vec2::new(0.6, 0.48);
        }
        let f = Face::from_mesh(&mesh).unwrap();
        assert!((f.left_eye - Vec2::new(0.4, 0.5)).length() < 1e-6);
        assert!((f.right_eye - Vec2::new(0.6, 0.48)).length() < 1e-6);
    }

    #[test]
    fn short_mesh_has_no_face() {
        assert_eq!(Face::from_mesh(&[Vec2::ZERO; 100]), None);
    }

    #[test]
    fn mirroring_flips_x_only() {
        let f = face((0.3, 0.4), (0.6, 0.4)).mirrored();
        assert!((f.left_eye - Vec2::new(0.7, 0.4)).length() < 1e-6);
        assert!((f.right_eye - Vec2::new(0.4, 0.4)).length() < 1e-6);
    }
}
