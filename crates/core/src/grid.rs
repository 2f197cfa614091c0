//! Grid module - hazard and obstacle maps
//!
//! Two 11x11 maps: the terrain (`Hazard` per cell) and the rotating obstacles.
//! Rows/columns 0..9 are playable, index 10 is a margin that movement look-ahead
//! may read. Anything further out reads as flat ground with no obstacle, so the
//! motion code never has to bounds-check its probes; the boundary rule in
//! [`crate::outcome`] is what punishes leaving the grid.

use thiserror::Error;

use crate::types::{GridPos, Hazard, GRID_SIZE, GRID_STRIDE};

/// A broken layout invariant, reported by [`GridState::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridViolation {
    #[error("row {row} has {count} hazard cells, expected 1")]
    HazardCount { row: usize, count: usize },
    #[error("row {row} has {count} obstacle cells, expected 1")]
    ObstacleCount { row: usize, count: usize },
    #[error("row {row} puts hazard and obstacle in the same column {col}")]
    SharedColumn { row: usize, col: usize },
    #[error("start cell is blocked")]
    StartBlocked,
    #[error("goal cell is blocked")]
    GoalBlocked,
    #[error("margin cell ({i}, {j}) is not empty")]
    MarginUsed { i: usize, j: usize },
}

/// Terrain and obstacle layout of the current level
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridState {
    hazards: [[Hazard; GRID_STRIDE]; GRID_STRIDE],
    obstacles: [[bool; GRID_STRIDE]; GRID_STRIDE],
}

impl GridState {
    /// Create an empty grid (all safe, no obstacles)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from explicit maps
    ///
    /// Used for fixtures and replays; normal play goes through the level generator.
    pub fn from_maps(
        hazards: [[Hazard; GRID_STRIDE]; GRID_STRIDE],
        obstacles: [[bool; GRID_STRIDE]; GRID_STRIDE],
    ) -> Self {
        Self { hazards, obstacles }
    }

    #[inline(always)]
    fn index(pos: GridPos) -> Option<(usize, usize)> {
        if pos.i < 0 || pos.j < 0 || pos.i as usize >= GRID_STRIDE || pos.j as usize >= GRID_STRIDE {
            return None;
        }
        Some((pos.i as usize, pos.j as usize))
    }

    /// Terrain at `pos`; `Safe` outside storage
    pub fn hazard(&self, pos: GridPos) -> Hazard {
        Self::index(pos)
            .map(|(i, j)| self.hazards[i][j])
            .unwrap_or_default()
    }

    /// Whether an obstacle patrols `pos`; `false` outside storage
    pub fn obstacle(&self, pos: GridPos) -> bool {
        Self::index(pos)
            .map(|(i, j)| self.obstacles[i][j])
            .unwrap_or(false)
    }

    pub(crate) fn set_hazard(&mut self, pos: GridPos, hazard: Hazard) -> bool {
        match Self::index(pos) {
            Some((i, j)) => {
                self.hazards[i][j] = hazard;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_obstacle(&mut self, pos: GridPos, present: bool) -> bool {
        match Self::index(pos) {
            Some((i, j)) => {
                self.obstacles[i][j] = present;
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_hazards(&mut self) {
        self.hazards = [[Hazard::Safe; GRID_STRIDE]; GRID_STRIDE];
    }

    pub(crate) fn clear_obstacles(&mut self) {
        self.obstacles = [[false; GRID_STRIDE]; GRID_STRIDE];
    }

    pub(crate) fn clear(&mut self) {
        self.clear_hazards();
        self.clear_obstacles();
    }

    /// First non-safe column in `row`
    pub fn hazard_column(&self, row: usize) -> Option<usize> {
        self.hazards
            .get(row)?
            .iter()
            .take(GRID_SIZE)
            .position(|h| !h.is_safe())
    }

    /// First obstacle column in `row`
    pub fn obstacle_column(&self, row: usize) -> Option<usize> {
        self.obstacles
            .get(row)?
            .iter()
            .take(GRID_SIZE)
            .position(|&o| o)
    }

    /// Check the invariants a freshly generated level must satisfy
    pub fn validate(&self) -> Result<(), GridViolation> {
        for row in 0..GRID_SIZE {
            let hazards = self.hazards[row][..GRID_SIZE]
                .iter()
                .filter(|h| !h.is_safe())
                .count();
            if hazards != 1 {
                return Err(GridViolation::HazardCount { row, count: hazards });
            }
            let obstacles = self.obstacles[row][..GRID_SIZE]
                .iter()
                .filter(|&&o| o)
                .count();
            if obstacles != 1 {
                return Err(GridViolation::ObstacleCount { row, count: obstacles });
            }
            if let (Some(h), Some(o)) = (self.hazard_column(row), self.obstacle_column(row)) {
                if h == o {
                    return Err(GridViolation::SharedColumn { row, col: h });
                }
            }
        }

        for pos in [GridPos::ORIGIN, GridPos::GOAL] {
            if !self.hazard(pos).is_safe() || self.obstacle(pos) {
                return Err(if pos == GridPos::ORIGIN {
                    GridViolation::StartBlocked
                } else {
                    GridViolation::GoalBlocked
                });
            }
        }

        for k in 0..GRID_STRIDE {
            for (i, j) in [(GRID_SIZE, k), (k, GRID_SIZE)] {
                if !self.hazards[i][j].is_safe() || self.obstacles[i][j] {
                    return Err(GridViolation::MarginUsed { i, j });
                }
            }
        }

        Ok(())
    }
}
