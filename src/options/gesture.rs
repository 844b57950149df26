use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive};
use crate::error::SholoError;

/// Swipe / stop classification thresholds and debounce windows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gesture", inline)]
#[serde(default)]
pub struct GestureOptions {
    /// Minimum frame-to-frame wrist travel (normalized x) for a swipe.
    #[schemars(title = "Swipe Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub swipe_threshold: f32,
    /// Minimum mean fingertip-to-palm height (normalized y) for an open palm.
    #[schemars(title = "Stop Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub stop_threshold: f32,
    /// Shared cooldown between any two gestures, in seconds.
    #[schemars(title = "Cooldown (s)", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub cooldown_secs: f32,
    /// How long a hand may be lost before its last position is forgotten.
    #[schemars(title = "Visibility Reset (s)", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub visibility_reset_secs: f32,
    /// Multiplier from wrist travel to swipe magnitude.
    #[schemars(skip)]
    pub swipe_scale: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            swipe_threshold: 0.15,
            stop_threshold: 0.6,
            cooldown_secs: 0.5,
            visibility_reset_secs: 1.5,
            swipe_scale: 10.0,
        }
    }
}

impl GestureOptions {
    pub(crate) fn validate(&self) -> Result<(), SholoError> {
        require_non_negative("gesture.swipe_threshold", self.swipe_threshold)?;
        require_non_negative("gesture.stop_threshold", self.stop_threshold)?;
        require_non_negative("gesture.cooldown_secs", self.cooldown_secs)?;
        require_non_negative(
            "gesture.visibility_reset_secs",
            self.visibility_reset_secs,
        )?;
        require_positive("gesture.swipe_scale", self.swipe_scale)
    }
}
