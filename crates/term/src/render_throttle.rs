//! Frame pacing for screens that rarely change.
//!
//! While a run is live every frame is drawn. Once it is won or lost the picture
//! is static, so it is only redrawn when its content changes (a camera key, a
//! resize) or at a slow keep-alive interval.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    keep_alive_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(keep_alive_ms: u64) -> Self {
        Self {
            keep_alive_ms,
            last: None,
        }
    }

    /// Whether to draw now. `fingerprint` identifies what would be drawn.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let draw = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, fp)) if fp != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.keep_alive_ms,
        };
        if draw {
            self.last = Some((now_ms, fingerprint));
        }
        draw
    }
}

/// Hash of everything a terminal frame shows for `snap` at `size`
pub fn fingerprint(snap: &GameSnapshot, size: (u16, u16)) -> u64 {
    let mut h = DefaultHasher::new();
    size.hash(&mut h);
    snap.cells.hash(&mut h);
    snap.player_cell.hash(&mut h);
    (snap.camera, snap.facing, snap.speed).hash(&mut h);
    (snap.level, snap.lives_remaining, snap.score, snap.won, snap.lost).hash(&mut h);
    for v in [snap.eye, snap.target, snap.player_world] {
        v.to_array().map(f32::to_bits).hash(&mut h);
    }
    h.finish()
}
