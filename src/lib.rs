// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Pixel <-> normalized conversions are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

//! Gaze- and gesture-driven control layer for a spinning 3D view.
//!
//! Sholo turns tracked eye and hand landmarks into two continuous control
//! signals: a camera look-offset that follows the viewer's gaze, and a spin
//! velocity with inertia that hand swipes push and an open palm brakes.
//!
//! # Key entry points
//!
//! - [`gaze::GazeMapper`] - gaze point + viewer distance to a look rotation
//! - [`gesture::GestureClassifier`] - hand samples to swipe / stop events
//! - [`motion::InertialRotation`] - per-tick spin speed with two-regime decay
//! - [`camera::CameraPoseController`] - reversible gaze pose application
//! - [`options::Options`] - runtime configuration (display, camera, gesture,
//!   motion)
//!
//! # Architecture
//!
//! A [`engine::StimuliThread`] pulls frames from a [`engine::FrameSource`]
//! and classifies them synchronously. Gesture events travel to the consumer
//! over an ordered channel; the latest gaze rotation is published through a
//! lock-free triple buffer. The consumer's [`engine::ViewController`] is
//! ticked at a fixed cadence and emits a spin increment plus an optional
//! pose delta for the renderer to apply.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gaze;
pub mod gesture;
pub mod motion;
pub mod options;
pub mod simulation;
pub mod util;
