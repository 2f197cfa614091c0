//! Engine - real-time pacing for the core
//!
//! The core only knows logical ticks. This crate turns wall-clock time into
//! ticks: a [`Clock`] is sampled once per frame, a [`FixedStep`] accumulator
//! converts the elapsed time into whole ticks, and [`Runner`] feeds them to a
//! [`GameState`](tilehop_core::GameState) with that frame's timestamp.
//!
//! Display refresh and tick rate are decoupled: a slow frame runs several ticks
//! (up to a cap), a fast one may run none.

pub mod clock;
pub mod fixed_step;
pub mod runner;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use fixed_step::FixedStep;
pub use runner::Runner;
