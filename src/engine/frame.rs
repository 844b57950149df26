use std::collections::VecDeque;

use web_time::Instant;

use crate::gaze::Face;
use crate::gesture::{HandId, HandSample};

/// Landmarks extracted from one camera frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedFrame {
    /// Capture time on the monotonic clock.
    pub timestamp: Instant,
    /// Frame size `[width, height]` in pixels.
    pub size: [u32; 2],
    /// The detected face, if any.
    pub face: Option<Face>,
    /// Every detected hand, in detector order.
    pub hands: Vec<(HandId, HandSample)>,
}

impl TrackedFrame {
    /// A frame with nothing detected.
    #[must_use]
    pub fn empty(timestamp: Instant, size: [u32; 2]) -> Self {
        Self {
            timestamp,
            size,
            face: None,
            hands: Vec::new(),
        }
    }
}

/// Blocking supplier of tracked frames (camera + landmark detectors).
pub trait FrameSource: Send + 'static {
    /// Block until the next frame is available. `None` ends the stream.
    fn next_frame(&mut self) -> Option<TrackedFrame>;
}

/// Replays a fixed list of frames, then ends.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    frames: VecDeque<TrackedFrame>,
}

impl ReplaySource {
    /// Replay `frames` in order.
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = TrackedFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for ReplaySource {
    fn next_frame(&mut self) -> Option<TrackedFrame> {
        self.frames.pop_front()
    }
}
