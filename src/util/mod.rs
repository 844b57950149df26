//! Shared utilities.

/// Fixed-rate tick pacing.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
