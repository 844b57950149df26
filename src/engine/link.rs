//! Producer → consumer link.
//!
//! Gesture events travel over an unbounded channel so they are applied in
//! classification order. Gaze rotations only matter when fresh, so the
//! producer publishes the latest one through a triple buffer and the
//! consumer picks it up at most once.

use std::sync::mpsc::{self, TryRecvError};

use crate::gaze::GazeRotation;
use crate::gesture::GestureEvent;

/// Producer half of the link.
pub struct ControlSender {
    events: mpsc::Sender<GestureEvent>,
    gaze: triple_buffer::Input<Option<GazeRotation>>,
}

/// Consumer half of the link.
pub struct ControlLink {
    events: mpsc::Receiver<GestureEvent>,
    gaze: triple_buffer::Output<Option<GazeRotation>>,
}

/// Create a connected sender/link pair.
#[must_use]
pub fn control_link() -> (ControlSender, ControlLink) {
    let (events_tx, events_rx) = mpsc::channel();
    let (gaze_input, gaze_output) = triple_buffer::triple_buffer(&None);
    (
        ControlSender {
            events: events_tx,
            gaze: gaze_input,
        },
        ControlLink {
            events: events_rx,
            gaze: gaze_output,
        },
    )
}

impl ControlSender {
    /// Queue a gesture. Returns `false` once the consumer is gone.
    pub fn send_gesture(&self, event: GestureEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// Publish the newest gaze rotation, replacing any unread one.
    pub fn publish_gaze(&mut self, rotation: GazeRotation) {
        self.gaze.write(Some(rotation));
    }
}

/// Gestures drained from the link in one go.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drained {
    /// Events in the order they were classified.
    pub events: Vec<GestureEvent>,
    /// The producer has hung up; no further events will arrive.
    pub disconnected: bool,
}

impl ControlLink {
    /// Take every queued gesture without blocking.
    pub fn drain(&mut self) -> Drained {
        let mut drained = Drained::default();
        loop {
            match self.events.try_recv() {
                Ok(event) => drained.events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    drained.disconnected = true;
                    break;
                }
            }
        }
        drained
    }

    /// The newest gaze rotation not yet taken, if any.
    pub fn take_gaze(&mut self) -> Option<GazeRotation> {
        let _ = self.gaze.update();
        self.gaze.output_buffer_mut().take()
    }
}
