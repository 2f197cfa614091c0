//! Level generation - hazard layout and obstacle shuffling
//!
//! Each row gets exactly one hazard and one obstacle, placed by rejection sampling
//! against a small set of constraints (start and goal stay clear, hazard and
//! obstacle never share a cell). Sampling is capped at [`MAX_REROLLS`] draws per
//! column; past that a deterministic scan from the last draw picks the first
//! acceptable column, so a hostile [`RandomSource`] cannot stall a frame.
//!
//! During a level the obstacles move: every [`OBSTACLE_REFRESH_SECS`] of level
//! time they are cleared and re-placed, keeping away from the player.

use crate::grid::GridState;
use crate::rng::RandomSource;
use crate::types::{
    GridPos, Hazard, GRID_SIZE, MAX_REROLLS, OBSTACLE_REFRESH_SECS,
};

/// Pick a column in `0..GRID_SIZE` accepted by `accept`.
///
/// Returns `None` only when no column is acceptable at all.
pub fn pick_column<R, F>(rng: &mut R, accept: F) -> Option<usize>
where
    R: RandomSource + ?Sized,
    F: Fn(usize) -> bool,
{
    let mut last = 0;
    for _ in 0..MAX_REROLLS {
        let col = rng.next_below(GRID_SIZE as u32) as usize;
        if accept(col) {
            return Some(col);
        }
        last = col;
    }

    (1..=GRID_SIZE)
        .map(|k| (last + k) % GRID_SIZE)
        .find(|&col| accept(col))
}

fn is_protected(row: usize, col: usize) -> bool {
    let pos = GridPos::new(row as i8, col as i8);
    pos == GridPos::ORIGIN || pos == GridPos::GOAL
}

/// Terrain kind for a row's hazard: even rows get moving platforms
pub fn hazard_kind_for_row(row: usize) -> Hazard {
    if row % 2 == 0 {
        Hazard::Raised
    } else {
        Hazard::Lethal
    }
}

/// Lays out levels and shuffles their obstacles
#[derive(Debug, Clone, Default)]
pub struct LevelGenerator {
    /// Level clock value of the last layout or shuffle.
    last_refresh_secs: f64,
}

impl LevelGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_refresh_secs(&self) -> f64 {
        self.last_refresh_secs
    }

    /// Replace the grid with a fresh random layout and restart the refresh window
    pub fn generate_level<R: RandomSource + ?Sized>(
        &mut self,
        grid: &mut GridState,
        rng: &mut R,
        now_secs: f64,
    ) {
        grid.clear();

        for row in 0..GRID_SIZE {
            let hazard_col = pick_column(rng, |col| !is_protected(row, col));
            let obstacle_col =
                pick_column(rng, |col| !is_protected(row, col) && Some(col) != hazard_col);

            if let Some(col) = hazard_col {
                grid.set_hazard(GridPos::new(row as i8, col as i8), hazard_kind_for_row(row));
            }
            if let Some(col) = obstacle_col {
                grid.set_obstacle(GridPos::new(row as i8, col as i8), true);
            }
        }

        self.last_refresh_secs = now_secs;
    }

    /// Start a new refresh window at `now_secs` without touching the grid
    pub fn reset_window(&mut self, now_secs: f64) {
        self.last_refresh_secs = now_secs;
    }

    /// Whether the refresh window has elapsed at `now_secs`
    pub fn refresh_due(&self, now_secs: f64) -> bool {
        now_secs - self.last_refresh_secs >= OBSTACLE_REFRESH_SECS
    }

    /// Re-place every obstacle if the refresh window has elapsed.
    ///
    /// Returns `true` when the obstacles moved. New columns avoid the hazard cell
    /// (raised or lethal), the start and goal cells, and the player's column ±1 in
    /// the player's row.
    pub fn refresh_obstacles<R: RandomSource + ?Sized>(
        &mut self,
        grid: &mut GridState,
        rng: &mut R,
        player: GridPos,
        now_secs: f64,
    ) -> bool {
        if !self.refresh_due(now_secs) {
            return false;
        }

        grid.clear_obstacles();
        for row in 0..GRID_SIZE {
            let player_row = player.i as isize == row as isize;
            let picked = pick_column(rng, |col| {
                let pos = GridPos::new(row as i8, col as i8);
                let near_player = player_row && (col as isize - player.j as isize).abs() <= 1;
                grid.hazard(pos).is_safe() && !is_protected(row, col) && !near_player
            });
            if let Some(col) = picked {
                grid.set_obstacle(GridPos::new(row as i8, col as i8), true);
            }
        }

        self.last_refresh_secs = now_secs;
        true
    }
}
