//! Inertial spin controller.
//!
//! Gestures are the only thing that raise the speed. Each tick only ever
//! decelerates toward the target: exponentially while far above it, then
//! linearly (clamped) for the final approach so the target is reached
//! exactly in finite time.

use std::f32::consts::TAU;

use super::state::{MotionState, RotationDirection};
use crate::error::SholoError;
use crate::gesture::GestureEvent;
use crate::options::MotionOptions;

/// Turns gesture events and time into per-tick spin increments.
#[derive(Debug, Clone)]
pub struct InertialRotation {
    state: MotionState,
    base_speed: f32,
    base_deceleration: f32,
    stop_deceleration: f32,
    swipe_divisor: f32,
}

impl InertialRotation {
    /// Create a controller at the configured initial speed.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::InvalidOptions`] for negative speeds or
    /// decelerations, or a non-positive swipe divisor.
    pub fn new(options: &MotionOptions) -> Result<Self, SholoError> {
        options.validate()?;
        Ok(Self {
            state: MotionState::at_speed(options.initial_speed),
            base_speed: options.base_speed,
            base_deceleration: options.base_deceleration,
            stop_deceleration: options.stop_deceleration,
            swipe_divisor: options.swipe_divisor,
        })
    }

    /// Current dynamics.
    #[must_use]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Apply a classified gesture.
    pub fn receive(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Swipe { magnitude } => self.swipe(magnitude),
            GestureEvent::Stop => self.stop(),
        }
    }

    /// Add a signed swipe impulse. A swipe against the current direction
    /// reverses the spin once it outweighs the current speed.
    pub fn swipe(&mut self, magnitude: f32) {
        if !magnitude.is_finite() {
            log::warn!("ignoring non-finite swipe magnitude {magnitude}");
            return;
        }
        let impulse = magnitude / self.swipe_divisor;
        let signed_speed = impulse + self.state.signed_speed();
        if !(signed_speed * TAU).is_finite() {
            log::warn!("ignoring swipe {magnitude}: speed would overflow");
            return;
        }

        self.state.rotation_direction = RotationDirection::of(signed_speed);
        self.state.current_speed = signed_speed.abs();
        self.state.target_speed = self.base_speed;
        self.state.deceleration = self.base_deceleration;
        log::debug!(
            "swipe {magnitude:+.2}: speed {:.3} rev/s {:?}",
            self.state.current_speed,
            self.state.rotation_direction
        );
    }

    /// Brake to a halt at the stop deceleration.
    pub fn stop(&mut self) {
        self.state.target_speed = 0.0;
        self.state.deceleration = self.stop_deceleration;
        log::debug!(
            "stop: coasting from {:.3} rev/s",
            self.state.current_speed
        );
    }

    /// Advance by `dt` seconds and return the rotation increment in radians
    /// about the world up axis. Speed never drops below the target, even
    /// for steps longer than a second.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        let s = &mut self.state;
        if s.current_speed > s.target_speed {
            let excess = s.current_speed - s.target_speed;
            if excess > s.target_speed.max(s.deceleration) {
                s.current_speed = (s.current_speed * (1.0 - dt)
                    + s.target_speed * dt)
                    .max(s.target_speed);
            } else {
                s.current_speed = (s.current_speed - s.deceleration * dt)
                    .max(s.target_speed);
            }
        }
        s.rotation_direction.sign() * s.current_speed * TAU * dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 24.0;

    fn controller() -> InertialRotation {
        InertialRotation::new(&MotionOptions::default()).unwrap()
    }

    fn with_state(state: MotionState) -> InertialRotation {
        InertialRotation {
            state,
            ..controller()
        }
    }

    #[test]
    fn far_above_target_decays_exponentially() {
        let mut c = with_state(MotionState {
            current_speed: 1.0,
            target_speed: 0.0,
            deceleration: 0.25,
            rotation_direction: RotationDirection::Positive,
        });
        let _ = c.tick(DT);
        assert!((c.state().current_speed - 0.958_333).abs() < 1e-5);
    }

    #[test]
    fn near_target_decays_linearly() {
        let mut c = with_state(MotionState {
            current_speed: 0.2,
            target_speed: 0.125,
            deceleration: 0.0125,
            rotation_direction: RotationDirection::Positive,
        });
        let _ = c.tick(DT);
        let expected = 0.2 - 0.0125 / 24.0;
        assert!((c.state().current_speed - expected).abs() < 1e-6);
        assert!((c.state().current_speed - 0.1995).abs() < 1e-4);
    }

    #[test]
    fn linear_approach_clamps_at_target() {
        let mut c = with_state(MotionState {
            current_speed: 0.1251,
            target_speed: 0.125,
            deceleration: 0.0125,
            rotation_direction: RotationDirection::Positive,
        });
        let _ = c.tick(DT);
        assert_eq!(c.state().current_speed, 0.125);
    }

    #[test]
    fn never_accelerates_on_its_own() {
        let mut c = with_state(MotionState {
            current_speed: 0.05,
            target_speed: 0.125,
            deceleration: 0.0125,
            rotation_direction: RotationDirection::Negative,
        });
        let delta = c.tick(DT);
        assert_eq!(c.state().current_speed, 0.05);
        assert!((delta + 0.05 * TAU * DT).abs() < 1e-7);
    }

    #[test]
    fn swipe_from_rest() {
        let mut c = controller();
        c.receive(GestureEvent::Swipe { magnitude: 2.0 });
        let s = c.state();
        assert!((s.current_speed - 0.4).abs() < 1e-6);
        assert_eq!(s.rotation_direction, RotationDirection::Positive);
        assert_eq!(s.target_speed, 0.125);
        assert_eq!(s.deceleration, 0.0125);
    }

    #[test]
    fn swipe_with_the_spin_adds_speed() {
        let mut c = controller();
        c.receive(GestureEvent::Swipe { magnitude: 2.0 });
        c.receive(GestureEvent::Swipe { magnitude: 1.0 });
        assert!((c.state().current_speed - 0.6).abs() < 1e-6);
    }

    #[test]
    fn opposing_swipe_slows_then_reverses() {
        let mut c = controller();
        c.receive(GestureEvent::Swipe { magnitude: 2.0 });
        c.receive(GestureEvent::Swipe { magnitude: -1.0 });
        assert!((c.state().current_speed - 0.2).abs() < 1e-6);
        assert_eq!(c.state().rotation_direction, RotationDirection::Positive);

        c.receive(GestureEvent::Swipe { magnitude: -2.0 });
        assert!((c.state().current_speed - 0.2).abs() < 1e-6);
        assert_eq!(c.state().rotation_direction, RotationDirection::Negative);
        assert!(c.tick(DT) < 0.0);
    }

    #[test]
    fn stop_coasts_monotonically_to_zero() {
        let mut c = controller();
        c.receive(GestureEvent::Swipe { magnitude: 5.0 });
        c.receive(GestureEvent::Stop);
        assert_eq!(c.state().target_speed, 0.0);
        assert_eq!(c.state().deceleration, 0.25);

        let mut previous = c.state().current_speed;
        for _ in 0..24 * 30 {
            let _ = c.tick(DT);
            let speed = c.state().current_speed;
            assert!(speed <= previous);
            assert!(speed >= 0.0);
            previous = speed;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn swipe_decays_back_to_cruise() {
        let mut c = controller();
        c.receive(GestureEvent::Swipe { magnitude: 3.0 });
        for _ in 0..24 * 120 {
            let _ = c.tick(DT);
        }
        assert_eq!(c.state().current_speed, 0.125);
    }

    #[test]
    fn increment_is_one_turn_per_revolution() {
        let mut c = with_state(MotionState::at_speed(1.0));
        let total: f32 = (0..24).map(|_| c.tick(DT)).sum();
        assert!((total - TAU).abs() < 1e-4);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut c = controller();
        c.receive(GestureEvent::Swipe { magnitude: f32::NAN });
        assert_eq!(c.state().current_speed, 0.0);
        assert_eq!(c.tick(f32::INFINITY), 0.0);
        assert!(c.state().current_speed.is_finite());
    }

    #[test]
    fn long_step_settles_on_target() {
        let mut c = controller();
        c.receive(GestureEvent::Swipe { magnitude: 5.0 });
        c.receive(GestureEvent::Stop);
        let delta = c.tick(2.0);
        assert_eq!(c.state().current_speed, 0.0);
        assert_eq!(delta, 0.0);

        c.receive(GestureEvent::Swipe { magnitude: 5.0 });
        let _ = c.tick(3.0);
        assert_eq!(c.state().current_speed, 0.125);
    }

    #[test]
    fn overflowing_swipe_keeps_previous_speed() {
        let mut c = controller();
        c.receive(GestureEvent::Swipe { magnitude: 2.0 });
        for _ in 0..6 {
            c.receive(GestureEvent::Swipe {
                magnitude: f32::MAX,
            });
        }
        assert!((c.state().current_speed - 0.4).abs() < 1e-6);
        assert!(c.tick(DT).is_finite());
    }

    #[test]
    fn invalid_options_fail_fast() {
        let options = MotionOptions {
            stop_deceleration: -1.0,
            ..MotionOptions::default()
        };
        assert!(InertialRotation::new(&options).is_err());
    }
}
