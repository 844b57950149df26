//! Swipe / stop classification for a single tracked hand.
//!
//! The classifier is advanced once per camera frame with either the hand's
//! landmarks or `None` when the hand was not detected. Both gestures share
//! one cooldown clock, so a swipe and a stop can never fire back to back.

use web_time::{Duration, Instant};

use super::event::GestureEvent;
use super::hand::HandSample;
use crate::error::SholoError;
use crate::options::GestureOptions;

/// Presence and debounce bookkeeping for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTimingState {
    /// Wrist x from the previous frame the hand was seen in. Cleared once
    /// the hand has been gone longer than the visibility reset.
    pub previous_wrist_x: Option<f32>,
    /// Whether the hand is currently considered visible.
    pub hand_visible: bool,
    /// When the hand was last detected.
    pub last_seen: Option<Instant>,
    /// When the last gesture (of either kind) fired.
    pub last_gesture: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Thresholds {
    swipe: f32,
    stop: f32,
    swipe_scale: f32,
    cooldown: Duration,
    visibility_reset: Duration,
}

impl Thresholds {
    pub(crate) fn new(options: &GestureOptions) -> Result<Self, SholoError> {
        options.validate()?;
        Ok(Self {
            swipe: options.swipe_threshold,
            stop: options.stop_threshold,
            swipe_scale: options.swipe_scale,
            cooldown: secs("gesture.cooldown_secs", options.cooldown_secs)?,
            visibility_reset: secs(
                "gesture.visibility_reset_secs",
                options.visibility_reset_secs,
            )?,
        })
    }
}

fn secs(field: &str, value: f32) -> Result<Duration, SholoError> {
    Duration::try_from_secs_f32(value).map_err(|e| {
        SholoError::InvalidOptions(format!("{field}: {e}"))
    })
}

/// Per-hand gesture state machine.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    thresholds: Thresholds,
    state: GestureTimingState,
}

impl GestureClassifier {
    /// Create a classifier with the given thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::InvalidOptions`] for negative or non-finite
    /// thresholds.
    pub fn new(options: &GestureOptions) -> Result<Self, SholoError> {
        Ok(Self::with_thresholds(Thresholds::new(options)?))
    }

    pub(crate) fn with_thresholds(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            state: GestureTimingState::default(),
        }
    }

    /// Current presence and debounce state.
    #[must_use]
    pub fn state(&self) -> &GestureTimingState {
        &self.state
    }

    /// Advance by one frame. `hand` is `None` when no hand was detected.
    /// A sample with non-finite landmarks counts as no detection.
    ///
    /// Returns the gestures recognised in this frame, in firing order.
    pub fn observe(
        &mut self,
        now: Instant,
        hand: Option<&HandSample>,
    ) -> Vec<GestureEvent> {
        let Some(hand) = hand.filter(|h| h.is_finite()) else {
            if hand.is_some() {
                log::debug!("dropping hand sample with non-finite landmarks");
            }
            self.hand_missing(now);
            return Vec::new();
        };

        self.state.hand_visible = true;
        self.state.last_seen = Some(now);

        let mut events = Vec::with_capacity(2);
        events.extend(self.detect_swipe(now, hand));
        events.extend(self.detect_stop(now, hand));
        for event in &events {
            log::debug!("gesture: {} ({event:?})", event.label());
        }
        events
    }

    /// Whether this hand is gone, forgotten, and out of cooldown, so its
    /// state carries no information any more.
    #[must_use]
    pub fn is_idle(&self, now: Instant) -> bool {
        !self.state.hand_visible
            && self.state.previous_wrist_x.is_none()
            && self.cooldown_elapsed(now)
    }

    fn hand_missing(&mut self, now: Instant) {
        if !self.state.hand_visible {
            return;
        }
        let unseen_for = self
            .state
            .last_seen
            .map_or(Duration::MAX, |seen| now.saturating_duration_since(seen));
        if unseen_for > self.thresholds.visibility_reset {
            log::debug!("hand lost for {unseen_for:?}, forgetting position");
            self.state.previous_wrist_x = None;
            self.state.hand_visible = false;
        }
    }

    fn detect_swipe(
        &mut self,
        now: Instant,
        hand: &HandSample,
    ) -> Option<GestureEvent> {
        let x = hand.wrist.x;
        let previous = self.state.previous_wrist_x.replace(x)?;

        let movement = x - previous;
        let swiped = movement.abs() > self.thresholds.swipe;
        if !swiped || !self.cooldown_elapsed(now) {
            return None;
        }
        self.state.last_gesture = Some(now);

        let strength = round_to_hundredths(
            movement.abs() * self.thresholds.swipe_scale,
        );
        let sign = if movement > 0.0 { 1.0 } else { -1.0 };
        Some(GestureEvent::Swipe {
            magnitude: sign * strength,
        })
    }

    fn detect_stop(
        &mut self,
        now: Instant,
        hand: &HandSample,
    ) -> Option<GestureEvent> {
        let open = hand.openness() > self.thresholds.stop;
        if !open || !self.cooldown_elapsed(now) {
            return None;
        }
        self.state.last_gesture = Some(now);
        Some(GestureEvent::Stop)
    }

    fn cooldown_elapsed(&self, now: Instant) -> bool {
        self.state.last_gesture.is_none_or(|last| {
            now.saturating_duration_since(last) > self.thresholds.cooldown
        })
    }
}

fn round_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(&GestureOptions::default()).unwrap()
    }

    /// A relaxed hand (fingertips close to the wrist) at wrist x.
    fn hand_at(x: f32) -> HandSample {
        HandSample {
            wrist: Vec2::new(x, 0.6),
            fingertips: [Vec2::new(x, 0.5); 5],
        }
    }

    fn open_palm() -> HandSample {
        HandSample {
            wrist: Vec2::new(0.5, 0.9),
            fingertips: [Vec2::new(0.5, 0.1); 5],
        }
    }

    fn at(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn first_sample_never_swipes() {
        let mut c = classifier();
        let t0 = Instant::now();
        assert!(c.observe(t0, Some(&hand_at(0.9))).is_empty());
        assert_eq!(c.state().previous_wrist_x, Some(0.9));
        assert!(c.state().hand_visible);
    }

    #[test]
    fn swipe_magnitude_is_scaled_and_rounded() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.4)));
        let events = c.observe(at(t0, 40), Some(&hand_at(0.6)));
        assert_eq!(events, vec![GestureEvent::Swipe { magnitude: 2.0 }]);
    }

    #[test]
    fn leftward_swipe_is_negative() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.7)));
        let events = c.observe(at(t0, 40), Some(&hand_at(0.45)));
        assert_eq!(events, vec![GestureEvent::Swipe { magnitude: -2.5 }]);
    }

    #[test]
    fn small_movement_is_ignored() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.4)));
        assert!(c.observe(at(t0, 40), Some(&hand_at(0.5))).is_empty());
    }

    #[test]
    fn second_swipe_within_cooldown_is_suppressed() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.1)));
        assert_eq!(c.observe(at(t0, 40), Some(&hand_at(0.4))).len(), 1);
        assert!(c.observe(at(t0, 300), Some(&hand_at(0.7))).is_empty());
        // Past the cooldown a new swipe fires again
        assert_eq!(c.observe(at(t0, 600), Some(&hand_at(0.95))).len(), 1);
    }

    #[test]
    fn swipe_uses_frame_to_frame_delta() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.1)));
        let _ = c.observe(at(t0, 40), Some(&hand_at(0.4)));
        // Suppressed move still updates the reference position
        let _ = c.observe(at(t0, 100), Some(&hand_at(0.7)));
        assert_eq!(c.state().previous_wrist_x, Some(0.7));
        // Only 0.05 from the previous frame, despite 0.35 since the swipe
        assert!(c.observe(at(t0, 800), Some(&hand_at(0.75))).is_empty());
    }

    #[test]
    fn open_palm_stops() {
        let mut c = classifier();
        let t0 = Instant::now();
        assert_eq!(c.observe(t0, Some(&open_palm())), vec![GestureEvent::Stop]);
    }

    #[test]
    fn swipe_and_stop_share_cooldown() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.1)));
        assert_eq!(c.observe(at(t0, 40), Some(&hand_at(0.5))).len(), 1);
        assert!(c.observe(at(t0, 80), Some(&open_palm())).is_empty());
        assert_eq!(
            c.observe(at(t0, 700), Some(&open_palm())),
            vec![GestureEvent::Stop]
        );
    }

    #[test]
    fn open_palm_swiping_fires_swipe_first() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.1)));
        let moving_palm = HandSample {
            wrist: Vec2::new(0.5, 0.9),
            fingertips: [Vec2::new(0.5, 0.1); 5],
        };
        let events = c.observe(at(t0, 40), Some(&moving_palm));
        assert_eq!(events, vec![GestureEvent::Swipe { magnitude: 4.0 }]);
    }

    #[test]
    fn long_absence_forgets_position() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.2)));
        let _ = c.observe(at(t0, 1_000), None);
        assert!(c.state().hand_visible);
        let _ = c.observe(at(t0, 2_000), None);
        assert!(!c.state().hand_visible);
        assert_eq!(c.state().previous_wrist_x, None);
        // Reappearing far away is not a swipe
        assert!(c.observe(at(t0, 2_040), Some(&hand_at(0.8))).is_empty());
    }

    #[test]
    fn short_absence_keeps_position() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.2)));
        let _ = c.observe(at(t0, 1_000), None);
        let events = c.observe(at(t0, 1_040), Some(&hand_at(0.8)));
        assert_eq!(events, vec![GestureEvent::Swipe { magnitude: 6.0 }]);
    }

    #[test]
    fn idle_after_reset_and_cooldown() {
        let mut c = classifier();
        let t0 = Instant::now();
        assert!(c.is_idle(t0));
        let _ = c.observe(t0, Some(&hand_at(0.2)));
        assert!(!c.is_idle(t0));
        let _ = c.observe(at(t0, 2_000), None);
        assert!(c.is_idle(at(t0, 2_000)));
    }

    #[test]
    fn non_finite_landmarks_count_as_missing() {
        let mut c = classifier();
        let t0 = Instant::now();
        let _ = c.observe(t0, Some(&hand_at(0.2)));

        let nan_wrist = hand_at(f32::NAN);
        assert!(c.observe(at(t0, 40), Some(&nan_wrist)).is_empty());
        let mut nan_tip = hand_at(0.25);
        nan_tip.fingertips[2].y = f32::NAN;
        assert!(c.observe(at(t0, 80), Some(&nan_tip)).is_empty());

        assert_eq!(c.state().previous_wrist_x, Some(0.2));
        assert_eq!(c.state().last_gesture, None);
        // A real swipe still fires afterwards
        let events = c.observe(at(t0, 120), Some(&hand_at(0.6)));
        assert_eq!(events, vec![GestureEvent::Swipe { magnitude: 4.0 }]);
    }

    #[test]
    fn negative_threshold_fails_fast() {
        let options = GestureOptions {
            swipe_threshold: -0.1,
            ..GestureOptions::default()
        };
        assert!(GestureClassifier::new(&options).is_err());
    }

    #[test]
    fn unrepresentable_cooldown_fails_fast() {
        let options = GestureOptions {
            cooldown_secs: 1e30,
            ..GestureOptions::default()
        };
        assert!(GestureClassifier::new(&options).is_err());
    }
}
