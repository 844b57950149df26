//! Synchronous per-frame classification (the producer's work unit).

use super::frame::TrackedFrame;
use crate::error::SholoError;
use crate::gaze::{EyeTracker, GazeMapper, GazeRotation};
use crate::gesture::{GestureEvent, HandGestures, HandSample};
use crate::options::Options;

/// What one frame produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameOutput {
    /// Look rotation, when a usable face was detected.
    pub gaze: Option<GazeRotation>,
    /// Gestures recognised in this frame, in firing order.
    pub gestures: Vec<GestureEvent>,
}

/// Runs the eye tracker, gaze mapper and hand gesture classifiers over
/// tracked frames.
#[derive(Debug, Clone)]
pub struct FrameProcessor {
    mirror: bool,
    eyes: EyeTracker,
    mapper: GazeMapper,
    hands: HandGestures,
}

impl FrameProcessor {
    /// Build every per-frame stage from the options.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::InvalidOptions`] if any section is invalid.
    pub fn new(options: &Options) -> Result<Self, SholoError> {
        Ok(Self {
            mirror: options.camera.mirror,
            eyes: EyeTracker::new(options)?,
            mapper: GazeMapper::new(&options.display)?,
            hands: HandGestures::new(&options.gesture)?,
        })
    }

    /// Whether the viewer was last seen too close to the screen.
    #[must_use]
    pub fn viewer_too_close(&self) -> bool {
        self.eyes.is_too_close()
    }

    /// Classify one frame.
    pub fn process(&mut self, frame: &TrackedFrame) -> FrameOutput {
        let gaze = frame
            .face
            .map(|face| if self.mirror { face.mirrored() } else { face })
            .and_then(|face| self.eyes.track(&face, frame.size))
            .map(|sample| self.mapper.rotation(&sample));

        let gestures = if self.mirror {
            let mirrored: Vec<_> = frame
                .hands
                .iter()
                .map(|(id, hand)| (*id, HandSample::mirrored(*hand)))
                .collect();
            self.hands.observe(frame.timestamp, &mirrored)
        } else {
            self.hands.observe(frame.timestamp, &frame.hands)
        };

        FrameOutput { gaze, gestures }
    }
}
