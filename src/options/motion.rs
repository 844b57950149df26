use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive};
use crate::error::SholoError;

/// Spin inertia parameters. Speeds are in revolutions per second.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
pub struct MotionOptions {
    /// Render ticks per second; the inertia step is `1 / tick_rate`.
    #[schemars(title = "Tick Rate", range(min = 1, max = 240))]
    pub tick_rate: u32,
    /// Spin speed at startup.
    #[schemars(skip)]
    pub initial_speed: f32,
    /// Idle cruising speed a swipe decays back to.
    #[schemars(title = "Base Speed", range(min = 0.0, max = 2.0), extend("step" = 0.005))]
    pub base_speed: f32,
    /// Slow decay rate used after a swipe.
    #[schemars(title = "Base Deceleration", range(min = 0.0, max = 1.0), extend("step" = 0.0025))]
    pub base_deceleration: f32,
    /// Fast decay rate used after a stop.
    #[schemars(title = "Stop Deceleration", range(min = 0.0, max = 5.0), extend("step" = 0.01))]
    pub stop_deceleration: f32,
    /// Divisor applied to an incoming swipe magnitude.
    #[schemars(skip)]
    pub swipe_divisor: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            tick_rate: 24,
            initial_speed: 0.0,
            base_speed: 0.125,
            base_deceleration: 0.0125,
            stop_deceleration: 0.25,
            swipe_divisor: 5.0,
        }
    }
}

impl MotionOptions {
    /// Fixed simulation step in seconds.
    #[must_use]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    pub(crate) fn validate(&self) -> Result<(), SholoError> {
        if self.tick_rate == 0 {
            return Err(SholoError::InvalidOptions(
                "motion.tick_rate must be non-zero".into(),
            ));
        }
        require_non_negative("motion.initial_speed", self.initial_speed)?;
        require_non_negative("motion.base_speed", self.base_speed)?;
        require_non_negative(
            "motion.base_deceleration",
            self.base_deceleration,
        )?;
        require_non_negative(
            "motion.stop_deceleration",
            self.stop_deceleration,
        )?;
        require_positive("motion.swipe_divisor", self.swipe_divisor)
    }
}
