//! Plain-data copy of everything a renderer draws for one frame

use glam::Vec3;

use crate::motion::JumpPhase;
use crate::types::{CameraMode, Facing, GridPos, Hazard, GRID_SIZE};

/// One grid cell as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSnapshot {
    pub hazard: Hazard,
    pub obstacle: bool,
    /// Vertical offset of the tile surface; non-zero only for raised tiles.
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionKind {
    #[default]
    Idle,
    Walking,
    Jumping,
}

impl MotionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionKind::Idle => "idle",
            MotionKind::Walking => "walking",
            MotionKind::Jumping => "jumping",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameSnapshot {
    pub cells: [[CellSnapshot; GRID_SIZE]; GRID_SIZE],
    pub tile_offset: i32,
    pub player_cell: GridPos,
    pub player_world: Vec3,
    pub motion: MotionKind,
    /// Set while a jump arc is in flight.
    pub jump_phase: Option<JumpPhase>,
    pub dying: bool,
    pub jump_armed: bool,
    pub eye: Vec3,
    pub target: Vec3,
    pub camera: CameraMode,
    pub facing: Facing,
    /// 1-indexed.
    pub level: u32,
    pub lives_remaining: u32,
    pub score: u32,
    pub speed: u8,
    pub won: bool,
    pub lost: bool,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn cell(&self, pos: GridPos) -> Option<CellSnapshot> {
        if !pos.in_bounds() {
            return None;
        }
        Some(self.cells[pos.i as usize][pos.j as usize])
    }

    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }
}
