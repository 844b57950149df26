//! Spin inertia: gesture-forced rotation speed with smooth decay.

/// Per-tick rotation controller.
pub mod inertia;
/// Mutable speed/direction state.
pub mod state;

pub use inertia::InertialRotation;
pub use state::{MotionState, RotationDirection};
