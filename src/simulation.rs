//! Scripted stand-in for a webcam and landmark detectors.
//!
//! [`ScriptedSource`] synthesizes [`TrackedFrame`]s from a timeline of
//! [`Stimulus`] entries: a face whose gaze slowly wanders, plus a hand that
//! appears around each scripted gesture. Frames carry raw camera
//! coordinates, so with mirroring on the hand moves the opposite way in the
//! frame than it does on screen.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::{Duration, Instant};

use crate::engine::{FrameSource, TrackedFrame};
use crate::gaze::Face;
use crate::gesture::{HandId, HandSample};

const FRAME_SIZE: [u32; 2] = [640, 480];
/// Frame spacing used when the requested rate is unusable (30 fps).
const DEFAULT_INTERVAL: Duration = Duration::from_nanos(33_333_333);
/// Where the hand starts, in screen-space x.
const HAND_START_X: f32 = 0.15;
/// Horizontal distance covered by one swipe.
const SWIPE_TRAVEL: f32 = 0.25;
/// Hand visible this long either side of a swipe.
const SWIPE_WINDOW_SECS: f32 = 0.3;
/// Open palm held this long after its timestamp.
const PALM_HOLD_SECS: f32 = 0.3;
/// Wrist jitter amplitude.
const JITTER: f32 = 0.005;
/// Eye spacing in normalized frame units (80 px at 640 wide).
const EYE_SPACING: f32 = 0.125;

/// A scripted gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stimulus {
    /// Horizontal swipe; positive `direction` moves right on screen.
    Swipe {
        /// Sign of the movement.
        direction: f32,
    },
    /// Open palm held up.
    OpenPalm,
}

/// Frame source playing a gesture timeline.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    interval: Duration,
    script: Vec<(f32, Stimulus)>,
    duration_secs: f32,
    realtime: bool,
    mirror: bool,
    rng: StdRng,
    start: Option<Instant>,
    frame: u64,
}

impl ScriptedSource {
    /// Three rightward swipes, then an open palm, at `fps` frames per
    /// second.
    #[must_use]
    pub fn new(fps: f32) -> Self {
        let interval = Duration::try_from_secs_f64(f64::from(fps).recip())
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_INTERVAL);
        Self {
            interval,
            script: vec![
                (2.0, Stimulus::Swipe { direction: 1.0 }),
                (3.0, Stimulus::Swipe { direction: 1.0 }),
                (4.0, Stimulus::Swipe { direction: 1.0 }),
                (10.0, Stimulus::OpenPalm),
            ],
            duration_secs: 11.0,
            realtime: false,
            mirror: true,
            rng: StdRng::seed_from_u64(0),
            start: None,
            frame: 0,
        }
    }

    /// Replace the timeline. Entries are `(seconds, stimulus)` and are
    /// sorted by time.
    #[must_use]
    pub fn with_script(mut self, mut script: Vec<(f32, Stimulus)>) -> Self {
        script.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.script = script;
        self
    }

    /// Stop producing frames after `secs`.
    #[must_use]
    pub fn with_duration(mut self, secs: f32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Pace frames on the wall clock instead of returning them immediately.
    #[must_use]
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Emit frames as a mirroring camera would see them.
    #[must_use]
    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Seed the jitter generator.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Wrist x on screen at `t`: the start position plus every swipe
    /// already performed.
    fn hand_x(&self, t: f32) -> f32 {
        self.script
            .iter()
            .filter(|(at, _)| *at <= t)
            .fold(HAND_START_X, |x, (_, stimulus)| match stimulus {
                Stimulus::Swipe { direction } => {
                    x + SWIPE_TRAVEL * direction.signum()
                }
                Stimulus::OpenPalm => x,
            })
    }

    /// The stimulus whose window covers `t`, if any.
    fn active(&self, t: f32) -> Option<Stimulus> {
        self.script.iter().find_map(|&(at, stimulus)| {
            let visible = match stimulus {
                Stimulus::Swipe { .. } => {
                    t >= at - SWIPE_WINDOW_SECS && t < at + SWIPE_WINDOW_SECS
                }
                Stimulus::OpenPalm => t >= at && t < at + PALM_HOLD_SECS,
            };
            visible.then_some(stimulus)
        })
    }

    fn hand(&mut self, t: f32) -> Option<HandSample> {
        let stimulus = self.active(t)?;
        let x = self.hand_x(t) + self.rng.random_range(-JITTER..=JITTER);
        let hand = match stimulus {
            Stimulus::Swipe { .. } => HandSample {
                wrist: Vec2::new(x, 0.6),
                fingertips: [Vec2::new(x, 0.5); 5],
            },
            Stimulus::OpenPalm => HandSample {
                wrist: Vec2::new(x, 0.9),
                fingertips: [
                    Vec2::new(x - 0.08, 0.3),
                    Vec2::new(x - 0.04, 0.15),
                    Vec2::new(x, 0.1),
                    Vec2::new(x + 0.04, 0.15),
                    Vec2::new(x + 0.07, 0.2),
                ],
            },
        };
        Some(hand)
    }

    fn face(t: f32) -> Face {
        let center = Vec2::new(
            0.5 + 0.1 * (0.5 * t).sin(),
            0.5 + 0.05 * (0.3 * t).sin(),
        );
        let half = Vec2::new(EYE_SPACING / 2.0, 0.0);
        Face {
            left_eye: center - half,
            right_eye: center + half,
        }
    }
}

impl FrameSource for ScriptedSource {
    fn next_frame(&mut self) -> Option<TrackedFrame> {
        let start = *self.start.get_or_insert_with(Instant::now);
        let offset = self
            .interval
            .checked_mul(u32::try_from(self.frame).ok()?)?;
        let t = offset.as_secs_f32();
        if t > self.duration_secs {
            return None;
        }
        self.frame += 1;

        let timestamp = start + offset;
        if self.realtime {
            let wait = timestamp.saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }

        let mut face = Self::face(t);
        let mut hand = self.hand(t);
        if self.mirror {
            face = face.mirrored();
            hand = hand.map(HandSample::mirrored);
        }

        Some(TrackedFrame {
            timestamp,
            size: FRAME_SIZE,
            face: Some(face),
            hands: hand.map(|h| (HandId(0), h)).into_iter().collect(),
        })
    }
}
