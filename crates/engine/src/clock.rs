//! Time sources for the game loop

use std::time::{Duration, Instant};

/// Source of monotonic time since some fixed start
pub trait Clock {
    fn elapsed(&self) -> Duration;

    fn now_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that only moves when told to (tests, replays)
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn set(&mut self, now: Duration) {
        // Monotonic: never step backwards.
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_moves_forward_only() {
        let mut clock = ManualClock::new();
        clock.advance(Duration::from_millis(1500));
        assert_eq!(clock.now_secs(), 1.5);
        clock.set(Duration::from_millis(200));
        assert_eq!(clock.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn test_monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
