//! Frame driver: samples the clock once, runs the due ticks

use std::time::Duration;

use tilehop_core::GameState;

use crate::clock::Clock;
use crate::fixed_step::FixedStep;

/// Drives a game from a clock
#[derive(Debug, Clone)]
pub struct Runner<C: Clock> {
    clock: C,
    step: FixedStep,
    ticks: u64,
}

impl<C: Clock> Runner<C> {
    pub fn new(clock: C, tick: Duration) -> Self {
        let mut step = FixedStep::new(tick);
        step.advance(clock.elapsed());
        Self {
            clock,
            step,
            ticks: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Total ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How long the caller may wait for input before the next tick is due
    pub fn poll_timeout(&self) -> Duration {
        self.step.until_next()
    }

    /// Sample the clock once and run every tick that is due.
    /// All ticks of one frame see the same timestamp.
    pub fn frame(&mut self, game: &mut GameState) -> u32 {
        let now = self.clock.elapsed();
        let due = self.step.advance(now);
        let now_secs = now.as_secs_f64();
        for _ in 0..due {
            game.tick(now_secs);
        }
        self.ticks += due as u64;
        due
    }
}
