//! The consumer context: applies gestures and gaze at the render tick.

use super::link::ControlLink;
use crate::camera::{CameraPoseController, PoseDelta};
use crate::error::SholoError;
use crate::motion::InertialRotation;
use crate::options::MotionOptions;

/// What the scene must do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutput {
    /// Spin increment in radians about the world up axis.
    pub spin: f32,
    /// Pose change from a fresh gaze rotation, if one arrived.
    pub pose: Option<PoseDelta>,
}

/// Owns the motion state and camera pose. Lives on the render thread.
pub struct ViewController {
    inertia: InertialRotation,
    pose: CameraPoseController,
    link: ControlLink,
    producer_alive: bool,
}

impl ViewController {
    /// Build a controller reading from `link`.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::InvalidOptions`] for invalid motion options.
    pub fn new(
        options: &MotionOptions,
        link: ControlLink,
    ) -> Result<Self, SholoError> {
        Ok(Self {
            inertia: InertialRotation::new(options)?,
            pose: CameraPoseController::new(),
            link,
            producer_alive: true,
        })
    }

    /// Run one tick of `dt` seconds.
    ///
    /// Every gesture queued since the last tick is applied in order before
    /// the spin is advanced. The newest gaze rotation, if any, replaces the
    /// current pose.
    pub fn tick(&mut self, dt: f32) -> TickOutput {
        let drained = self.link.drain();
        for event in drained.events {
            self.inertia.receive(event);
        }
        if drained.disconnected && self.producer_alive {
            log::info!("stimuli producer disconnected");
            self.producer_alive = false;
        }

        let pose = self
            .link
            .take_gaze()
            .map(|gaze| self.pose.apply_gaze(&gaze))
            .filter(|delta| !delta.is_empty());

        TickOutput {
            spin: self.inertia.tick(dt),
            pose,
        }
    }

    /// Whether the producer may still send gestures.
    #[must_use]
    pub fn is_producer_alive(&self) -> bool {
        self.producer_alive
    }

    /// The spin dynamics.
    #[must_use]
    pub fn motion(&self) -> &InertialRotation {
        &self.inertia
    }

    /// The applied camera pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPoseController {
        &self.pose
    }
}
