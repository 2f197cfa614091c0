//! Outcome evaluation and run bookkeeping
//!
//! [`evaluate`] looks at where the player ended up after motion and decides
//! whether that costs a life or clears the level. [`RunState`] carries the
//! counters across levels and turns level clears and deaths into the terminal
//! win/lose flags.

use crate::grid::GridState;
use crate::motion::PlayerState;
use crate::types::{DeathCause, GridPos, Hazard, LEVEL_COUNT, LEVEL_SCORE, MAX_LIVES};

/// Result of checking the player's cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Respawn(DeathCause),
    ReachedGoal,
}

/// Check the player's cell against the grid.
///
/// Checks run in a fixed order: leaving the grid, lethal floor, obstacle, goal.
/// A player already marked dying is left to the respawn on the next tick.
pub fn evaluate(player: &PlayerState, grid: &GridState) -> Outcome {
    if player.dying {
        return Outcome::Continue;
    }

    let cell = player.cell;
    if !cell.in_bounds() {
        Outcome::Respawn(DeathCause::OutOfBounds)
    } else if grid.hazard(cell) == Hazard::Lethal {
        Outcome::Respawn(DeathCause::Hazard)
    } else if grid.obstacle(cell) {
        Outcome::Respawn(DeathCause::Obstacle)
    } else if cell == GridPos::GOAL {
        Outcome::ReachedGoal
    } else {
        Outcome::Continue
    }
}

/// What the end of a tick did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunProgress {
    Playing,
    LevelCleared { level: u32, score: u32 },
    Won { score: u32 },
    Lost { score: u32 },
}

/// Counters that outlive a single level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    pub lives_lost: u32,
    pub score: u32,
    pub levels_cleared: u32,
    /// A new level must be generated on the next tick.
    pub level_transition: bool,
    /// The goal was reached this tick and is waiting for [`RunState::resolve`].
    pub level_won: bool,
    pub game_won: bool,
    pub game_lost: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            lives_lost: 0,
            score: 0,
            levels_cleared: 0,
            level_transition: true,
            level_won: false,
            game_won: false,
            game_lost: false,
        }
    }

    /// Current level, 1-indexed for display
    pub fn level(&self) -> u32 {
        (self.levels_cleared + 1).min(LEVEL_COUNT)
    }

    pub fn lives_remaining(&self) -> u32 {
        MAX_LIVES.saturating_sub(self.lives_lost)
    }

    pub fn is_over(&self) -> bool {
        self.game_won || self.game_lost
    }

    /// Count one death; returns the new lives-lost total
    pub fn lose_life(&mut self) -> u32 {
        self.lives_lost += 1;
        self.lives_lost
    }

    /// Apply the end-of-tick rules: too many deaths loses, a reached goal
    /// clears the level, and clearing the last level wins.
    pub fn resolve(&mut self) -> RunProgress {
        if self.lives_lost >= MAX_LIVES && !self.game_won {
            self.game_lost = true;
            return RunProgress::Lost { score: self.score };
        }

        if !self.level_won {
            return RunProgress::Playing;
        }

        self.level_won = false;
        self.lives_lost = 0;
        self.levels_cleared += 1;
        self.score += LEVEL_SCORE;

        if self.levels_cleared >= LEVEL_COUNT {
            self.game_won = true;
            self.level_transition = false;
            RunProgress::Won { score: self.score }
        } else {
            self.level_transition = true;
            RunProgress::LevelCleared {
                level: self.levels_cleared,
                score: self.score,
            }
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
