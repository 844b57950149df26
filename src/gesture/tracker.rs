use rustc_hash::FxHashMap;
use web_time::Instant;

use super::classifier::{GestureClassifier, Thresholds};
use super::event::GestureEvent;
use super::hand::HandSample;
use crate::error::SholoError;
use crate::options::GestureOptions;

/// Stable identifier the hand detector assigns to a tracked hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandId(pub u32);

/// Runs one [`GestureClassifier`] per tracked hand.
///
/// Hands missing from a frame are advanced through their classifier's
/// absent path, so each hand's visibility reset runs on its own clock.
/// Classifiers that have become idle are dropped.
#[derive(Debug, Clone)]
pub struct HandGestures {
    thresholds: Thresholds,
    hands: FxHashMap<HandId, GestureClassifier>,
}

impl HandGestures {
    /// Create an empty tracker.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::InvalidOptions`] for invalid thresholds.
    pub fn new(options: &GestureOptions) -> Result<Self, SholoError> {
        Ok(Self {
            thresholds: Thresholds::new(options)?,
            hands: FxHashMap::default(),
        })
    }

    /// Number of hands with live state.
    #[must_use]
    pub fn tracked_hands(&self) -> usize {
        self.hands.len()
    }

    /// Classifier state for one hand, if it is being tracked.
    #[must_use]
    pub fn classifier(&self, id: HandId) -> Option<&GestureClassifier> {
        self.hands.get(&id)
    }

    /// Advance every hand by one frame.
    ///
    /// Events come back in the order of `detected`, each hand's swipe
    /// before its stop.
    pub fn observe(
        &mut self,
        now: Instant,
        detected: &[(HandId, HandSample)],
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        for (id, hand) in detected {
            let thresholds = self.thresholds;
            let classifier = self.hands.entry(*id).or_insert_with(|| {
                GestureClassifier::with_thresholds(thresholds)
            });
            events.extend(classifier.observe(now, Some(hand)));
        }

        for (id, classifier) in &mut self.hands {
            if !detected.iter().any(|(seen, _)| seen == id) {
                let _ = classifier.observe(now, None);
            }
        }
        self.hands.retain(|_, classifier| !classifier.is_idle(now));
        events
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use web_time::Duration;

    use super::*;

    fn hand_at(x: f32) -> HandSample {
        HandSample {
            wrist: Vec2::new(x, 0.6),
            fingertips: [Vec2::new(x, 0.5); 5],
        }
    }

    fn at(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn hands_keep_independent_positions() {
        let mut hands = HandGestures::new(&GestureOptions::default()).unwrap();
        let t0 = Instant::now();
        let _ = hands.observe(
            t0,
            &[(HandId(0), hand_at(0.2)), (HandId(1), hand_at(0.8))],
        );
        // Each hand moves a little relative to itself
        let events = hands.observe(
            at(t0, 40),
            &[(HandId(0), hand_at(0.25)), (HandId(1), hand_at(0.75))],
        );
        assert!(events.is_empty());
        assert_eq!(hands.tracked_hands(), 2);
    }

    #[test]
    fn events_follow_detection_order() {
        let options = GestureOptions {
            cooldown_secs: 0.0,
            ..GestureOptions::default()
        };
        let mut hands = HandGestures::new(&options).unwrap();
        let t0 = Instant::now();
        let _ = hands.observe(
            t0,
            &[(HandId(7), hand_at(0.1)), (HandId(3), hand_at(0.9))],
        );
        let events = hands.observe(
            at(t0, 40),
            &[(HandId(7), hand_at(0.4)), (HandId(3), hand_at(0.5))],
        );
        assert_eq!(
            events,
            vec![
                GestureEvent::Swipe { magnitude: 3.0 },
                GestureEvent::Swipe { magnitude: -4.0 },
            ]
        );
    }

    #[test]
    fn lost_hand_is_forgotten() {
        let mut hands = HandGestures::new(&GestureOptions::default()).unwrap();
        let t0 = Instant::now();
        let _ = hands.observe(t0, &[(HandId(0), hand_at(0.2))]);
        let _ = hands.observe(at(t0, 1_000), &[]);
        assert!(hands.classifier(HandId(0)).is_some());
        let _ = hands.observe(at(t0, 2_000), &[]);
        assert_eq!(hands.tracked_hands(), 0);
        // Reacquired hand starts from scratch
        assert!(hands
            .observe(at(t0, 2_040), &[(HandId(0), hand_at(0.9))])
            .is_empty());
    }

    #[test]
    fn lost_hand_keeps_cooldown_until_it_expires() {
        let options = GestureOptions {
            visibility_reset_secs: 0.1,
            cooldown_secs: 1.0,
            ..GestureOptions::default()
        };
        let mut hands = HandGestures::new(&options).unwrap();
        let t0 = Instant::now();
        let _ = hands.observe(t0, &[(HandId(0), hand_at(0.2))]);
        assert_eq!(
            hands.observe(at(t0, 40), &[(HandId(0), hand_at(0.6))]).len(),
            1
        );
        let _ = hands.observe(at(t0, 300), &[]);
        // Position forgotten but the cooldown still holds the classifier
        assert_eq!(hands.tracked_hands(), 1);
        let _ = hands.observe(at(t0, 1_100), &[]);
        assert_eq!(hands.tracked_hands(), 0);
    }
}
