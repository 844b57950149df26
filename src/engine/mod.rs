//! Producer/consumer wiring.
//!
//! The stimuli thread (producer) pulls frames from a [`FrameSource`],
//! classifies them with a [`FrameProcessor`], and sends the results over a
//! [`ControlSender`]. The render loop (consumer) owns a [`ViewController`]
//! that drains the link once per tick. Motion state and camera pose are only
//! ever touched by the consumer.

/// Consumer-side tick controller.
pub mod controller;
/// Tracked frames and frame sources.
pub mod frame;
/// Producer → consumer channel pair.
pub mod link;
/// Per-frame classification.
pub mod processor;
/// Producer thread.
pub mod stimuli;

pub use controller::{TickOutput, ViewController};
pub use frame::{FrameSource, ReplaySource, TrackedFrame};
pub use link::{control_link, ControlLink, ControlSender, Drained};
pub use processor::{FrameOutput, FrameProcessor};
pub use stimuli::StimuliThread;

use crate::error::SholoError;
use crate::options::Options;

/// Validate `options`, start the stimuli thread on `source`, and return it
/// together with the controller for the render loop.
///
/// # Errors
///
/// Returns [`SholoError::InvalidOptions`] for invalid options, or
/// [`SholoError::ThreadSpawn`] if the producer thread cannot start.
pub fn launch<S: FrameSource>(
    options: &Options,
    source: S,
) -> Result<(StimuliThread, ViewController), SholoError> {
    options.validate()?;
    let processor = FrameProcessor::new(options)?;
    let (sender, link) = control_link();
    let controller = ViewController::new(&options.motion, link)?;
    let stimuli = StimuliThread::spawn(source, processor, sender)?;
    log::info!(
        "engine launched: {} Hz control tick, mirror {}",
        options.motion.tick_rate,
        options.camera.mirror
    );
    Ok((stimuli, controller))
}
