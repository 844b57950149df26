//! Hand gesture classification: per-frame hand landmarks to debounced
//! swipe / stop events.

/// Per-hand swipe / stop state machine.
pub mod classifier;
/// Gesture event type.
pub mod event;
/// Hand landmark sample and skeleton indices.
pub mod hand;
/// One classifier per tracked hand.
pub mod tracker;

pub use classifier::{GestureClassifier, GestureTimingState};
pub use event::GestureEvent;
pub use hand::HandSample;
pub use tracker::{HandGestures, HandId};
