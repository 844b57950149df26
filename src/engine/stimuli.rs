//! The producer context: a named thread pulling frames and classifying them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use super::frame::FrameSource;
use super::link::ControlSender;
use super::processor::FrameProcessor;
use crate::error::SholoError;

/// Background thread turning frames into gestures and gaze rotations.
///
/// The thread ends when the source runs dry, when the consumer hangs up, or
/// after [`request_stop`](Self::request_stop) once the frame in flight is
/// done. Either way the [`ControlSender`] is dropped so the consumer sees
/// the link disconnect.
pub struct StimuliThread {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<u64>>,
}

impl StimuliThread {
    /// Spawn the producer thread.
    ///
    /// # Errors
    ///
    /// Returns [`SholoError::ThreadSpawn`] if the thread fails to spawn.
    pub fn spawn<S: FrameSource>(
        source: S,
        processor: FrameProcessor,
        sender: ControlSender,
    ) -> Result<Self, SholoError> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let thread = std::thread::Builder::new()
            .name("stimuli".into())
            .spawn(move || {
                Self::thread_loop(source, processor, sender, &thread_stop)
            })
            .map_err(SholoError::ThreadSpawn)?;

        Ok(Self {
            stop,
            thread: Some(thread),
        })
    }

    /// Ask the thread to stop after the current frame.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether the thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stop the thread and wait for it. Returns the number of frames it
    /// processed, or `None` if it was already joined or panicked.
    pub fn shutdown(&mut self) -> Option<u64> {
        self.request_stop();
        self.join()
    }

    /// Wait for the thread to end on its own (source exhausted or consumer
    /// gone), without asking it to stop.
    pub fn join(&mut self) -> Option<u64> {
        let frames = self.thread.take()?.join().ok();
        if let Some(frames) = frames {
            log::info!("stimuli thread stopped after {frames} frames");
        }
        frames
    }

    fn thread_loop<S: FrameSource>(
        mut source: S,
        mut processor: FrameProcessor,
        mut sender: ControlSender,
        stop: &AtomicBool,
    ) -> u64 {
        let mut frames = 0;
        while !stop.load(Ordering::Relaxed) {
            let Some(frame) = source.next_frame() else {
                log::info!("frame source ended");
                break;
            };
            frames += 1;

            let output = processor.process(&frame);
            if let Some(gaze) = output.gaze {
                sender.publish_gaze(gaze);
            }
            let delivered = output
                .gestures
                .into_iter()
                .all(|event| sender.send_gesture(event));
            if !delivered {
                log::info!("controller hung up, stopping stimuli thread");
                break;
            }
        }
        frames
    }
}

impl Drop for StimuliThread {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
