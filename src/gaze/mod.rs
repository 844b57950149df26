//! Gaze mapping: eye landmarks to a screen gaze point, viewer distance, and
//! a camera look rotation.

/// Camera optics and inter-pupillary distance to viewer distance.
pub mod distance;
/// Face-mesh eye centres and the per-frame eye tracker.
pub mod eyes;
/// Gaze point + distance to a look angle and axis.
pub mod mapper;

pub use distance::{focal_length_px, DistanceEstimator};
pub use eyes::{EyeTracker, Face};
pub use mapper::{GazeMapper, GazeRotation, GazeSample};
