//! Playback of recorded algorithm traces
//!
//! This module provides the controller shared by every algorithm:
//! - [`controller`]: [`AnimationController`], the play/pause/step/reset state machine
//!
//! # Playback Model
//!
//! A [`StepGenerator`] turns the current input into a [`Trace`]. Nothing is
//! generated until the first Play or Step; afterwards the controller walks the
//! trace one step per tick (or per manual Step) and stops on its own when the
//! trace runs out. Reset and Apply discard the trace and return to `Idle`.
//!
//! Timing is cooperative: the UI loop calls [`AnimationController::poll`] with the
//! current instant and the controller decides whether a tick is due.
//!
//! [`Trace`]: crate::step::Trace

pub mod controller;

pub use controller::{AnimationController, PlaybackStatus, StepGenerator};
