//! Shared vertical offset of every raised tile.
//!
//! All raised tiles bob in lockstep. The offset moves one unit per tick and turns
//! around when it reaches either limit.

use crate::types::TILE_OFFSET_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingTileOffset {
    offset: i32,
    rising: bool,
}

impl MovingTileOffset {
    pub fn new() -> Self {
        Self {
            offset: 0,
            rising: true,
        }
    }

    /// Start from an arbitrary offset (clamped to the limits)
    pub fn at(offset: i32, rising: bool) -> Self {
        Self {
            offset: offset.clamp(-TILE_OFFSET_LIMIT, TILE_OFFSET_LIMIT),
            rising,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn rising(&self) -> bool {
        self.rising
    }

    /// Advance one tick
    pub fn step(&mut self) {
        if self.rising {
            self.offset += 1;
            if self.offset >= TILE_OFFSET_LIMIT {
                self.rising = false;
            }
        } else {
            self.offset -= 1;
            if self.offset <= -TILE_OFFSET_LIMIT {
                self.rising = true;
            }
        }
    }
}

impl Default for MovingTileOffset {
    fn default() -> Self {
        Self::new()
    }
}
