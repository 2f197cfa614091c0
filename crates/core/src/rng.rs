//! Randomness for level layout
//!
//! Hazard and obstacle placement is the only place the game draws random
//! numbers, and every draw goes through [`RandomSource`]. A run is fully
//! determined by its seed; tests swap in scripted sources.

/// Source of bounded random integers
pub trait RandomSource {
    /// Next value in `[0, bound)`. `bound` is always > 0.
    fn next_below(&mut self, bound: u32) -> u32;
}

const LCG_MUL: u32 = 1_664_525;
const LCG_INC: u32 = 1_013_904_223;

/// Seeded 32-bit linear congruential generator (modulus 2^32)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // 0 is remapped so that seed 0 and seed 1 share a stream, not a fixed point.
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        self.state
    }

    /// Internal state; `SimpleRng::new(rng.state())` continues the same stream
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        // Low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % bound
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
