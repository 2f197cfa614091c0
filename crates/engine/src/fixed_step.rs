//! Fixed-step accumulator turning frame time into whole logical ticks

use std::time::Duration;

use tilehop_types::TICK_MS;

/// Most ticks a single frame may run; anything beyond is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// Accumulates frame time and releases it in whole ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    tick: Duration,
    accumulated: Duration,
    last: Option<Duration>,
}

impl FixedStep {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
            last: None,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick
    }

    /// Feed the clock reading for this frame; returns ticks to run.
    ///
    /// The first call only establishes the baseline.
    pub fn advance(&mut self, now: Duration) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };
        self.accumulated += now.saturating_sub(last);

        let tick_ns = self.tick.as_nanos();
        let acc_ns = self.accumulated.as_nanos();
        // Remainder is below one tick, so it always fits back into a u64.
        self.accumulated = Duration::from_nanos((acc_ns % tick_ns) as u64);
        (acc_ns / tick_ns).min(MAX_CATCH_UP_TICKS as u128) as u32
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.tick.saturating_sub(self.accumulated)
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_first_frame_is_baseline() {
        let mut step = FixedStep::default();
        assert_eq!(step.advance(ms(1000)), 0);
        assert_eq!(step.advance(ms(1016)), 1);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut step = FixedStep::new(ms(16));
        step.advance(ms(0));
        assert_eq!(step.advance(ms(10)), 0);
        assert_eq!(step.until_next(), ms(6));
        assert_eq!(step.advance(ms(20)), 1);
        assert_eq!(step.advance(ms(52)), 2);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut step = FixedStep::new(ms(16));
        step.advance(ms(0));
        assert_eq!(step.advance(ms(5_000)), MAX_CATCH_UP_TICKS);
        // The backlog is discarded, not replayed.
        assert_eq!(step.advance(ms(5_001)), 0);
    }

    #[test]
    fn test_huge_stall_keeps_sub_tick_remainder() {
        let mut step = FixedStep::new(ms(16));
        step.advance(ms(0));
        // Ten days in one frame: capped ticks, only the partial tick survives.
        let stall = Duration::from_secs(10 * 24 * 3600) + ms(5);
        assert_eq!(step.advance(stall), MAX_CATCH_UP_TICKS);
        assert_eq!(step.until_next(), ms(11));
    }

    #[test]
    fn test_zero_tick_is_raised_to_one_ms() {
        let step = FixedStep::new(Duration::ZERO);
        assert_eq!(step.tick_duration(), ms(1));
    }
}
