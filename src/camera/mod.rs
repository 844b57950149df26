//! Camera look-offset handling.
//!
//! Provides the reversible gaze pose controller and a scene orientation
//! accumulator that composes spin increments with pose deltas.

/// Reversible gaze pose bookkeeping.
pub mod pose;
/// Scene orientation accumulator.
pub mod transform;

pub use pose::{CameraPose, CameraPoseController, PoseDelta};
pub use transform::SceneTransform;
