//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, logging).
//!
//! # Grid Dimensions
//!
//! - **Playable area**: 10x10 cells, indexed `(i, j)` with both in 0-9
//! - **Storage**: 11x11, the extra row/column is an unused margin
//! - **Start**: (0, 0)
//! - **Goal**: (9, 9)
//!
//! # World Space
//!
//! One cell is 30 world units wide. The first index `i` runs along world `z`,
//! the second index `j` along world `x`:
//!
//! | Quantity | Value |
//! |----------|-------|
//! | `TILE_SIZE` | 30.0 |
//! | `TILE_ORIGIN` | 7.5 (x/z of cell (0,0)) |
//! | `REST_HEIGHT` | 105.0 (player y on flat ground) |
//!
//! # Motion Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Logical frame interval (~60 FPS) |
//! | `DEFAULT_SPEED` | 4 | Walking units per tick |
//! | `JUMP_STEPS` | 30 | Ticks in a full jump arc |
//! | `JUMP_LATERAL_STEP` | 2.0 | Jump units per tick |
//! | `TILE_OFFSET_LIMIT` | 50 | Raised tiles bob between -50 and +50 |
//! | `FALL_THRESHOLD` | -30 | Raised tile this low cannot catch the player |
//!
//! # Examples
//!
//! ```
//! use tilehop_types::{Arrow, Direction, Facing, GridPos};
//!
//! let start = GridPos::ORIGIN;
//! assert_eq!(start.step(Direction::East, 1), GridPos::new(1, 0));
//! assert_eq!(start.step(Direction::North, 2), GridPos::new(0, 2));
//!
//! // Camera facing rotates what the arrow keys mean.
//! assert_eq!(Arrow::Up.to_direction(Facing::Deg0), Direction::North);
//! assert_eq!(Arrow::Up.to_direction(Facing::Deg90), Direction::West);
//! ```

/// Playable cells per side (10)
pub const GRID_SIZE: usize = 10;

/// Storage cells per side, including the margin (11)
pub const GRID_STRIDE: usize = GRID_SIZE + 1;

/// Width of one cell in world units
pub const TILE_SIZE: f32 = 30.0;

/// World x/z coordinate of cell (0,0)
pub const TILE_ORIGIN: f32 = 7.5;

/// Player height when standing on flat ground
pub const REST_HEIGHT: f32 = 105.0;

/// Fixed logical frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Slowest walking speed (world units per tick)
pub const MIN_SPEED: u8 = 1;

/// Fastest walking speed (world units per tick)
pub const MAX_SPEED: u8 = 10;

/// Walking speed at startup
pub const DEFAULT_SPEED: u8 = 4;

/// Ticks a full two-tile jump arc takes
pub const JUMP_STEPS: u32 = 30;

/// Lateral jump distance per tick
pub const JUMP_LATERAL_STEP: f32 = 2.0;

/// Jump-local time added per tick
pub const JUMP_TIME_STEP: f32 = 0.1;

/// Initial vertical velocity of the jump arc (`y = base + v*t - g*t^2`)
pub const JUMP_LAUNCH_SPEED: f32 = 20.0;

/// Quadratic drop coefficient of the jump arc
pub const JUMP_DROP: f32 = 5.0;

/// Raised tiles oscillate in `[-TILE_OFFSET_LIMIT, TILE_OFFSET_LIMIT]`
pub const TILE_OFFSET_LIMIT: i32 = 50;

/// Minimum offset at which a raised tile can be stepped onto
pub const STEP_THRESHOLD: i32 = 0;

/// At or below this offset a raised tile lets the player fall through
pub const FALL_THRESHOLD: i32 = -30;

/// Respawns allowed before the run is lost
pub const MAX_LIVES: u32 = 10;

/// Levels to clear for an overall win
pub const LEVEL_COUNT: u32 = 6;

/// Score awarded per cleared level
pub const LEVEL_SCORE: u32 = 100;

/// Seconds between obstacle re-shuffles within a level
pub const OBSTACLE_REFRESH_SECS: f64 = 5.0;

/// Random draws per column before the generator falls back to a scan
pub const MAX_REROLLS: u32 = 64;

/// What a grid cell is made of
///
/// - **Safe**: flat ground
/// - **Lethal**: the floor falls away, stepping here costs a life
/// - **Raised**: a moving platform bobbing with the shared tile offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hazard {
    #[default]
    Safe,
    Lethal,
    Raised,
}

impl Hazard {
    pub fn is_safe(self) -> bool {
        self == Hazard::Safe
    }
}

/// Compass directions on the grid
///
/// - **East**: `i + 1` (world +z)
/// - **West**: `i - 1` (world -z)
/// - **North**: `j + 1` (world +x)
/// - **South**: `j - 1` (world -x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Cell delta `(di, dj)` of one step in this direction
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Unit vector `(dx, dz)` in world space
    pub fn world_axis(self) -> (f32, f32) {
        let (di, dj) = self.delta();
        (dj as f32, di as f32)
    }

    /// Rotate 90° counter-clockwise (N → W → S → E)
    ///
    /// ```
    /// use tilehop_types::Direction;
    ///
    /// assert_eq!(Direction::North.rotate_ccw(), Direction::West);
    /// assert_eq!(Direction::West.rotate_ccw(), Direction::South);
    /// assert_eq!(Direction::South.rotate_ccw(), Direction::East);
    /// assert_eq!(Direction::East.rotate_ccw(), Direction::North);
    /// ```
    pub fn rotate_ccw(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn opposite(self) -> Self {
        self.rotate_ccw().rotate_ccw()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

/// A cell coordinate
///
/// Signed so that movement can transiently step outside the grid; the boundary
/// check turns that into a respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub i: i8,
    pub j: i8,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { i: 0, j: 0 };
    pub const GOAL: GridPos = GridPos {
        i: (GRID_SIZE - 1) as i8,
        j: (GRID_SIZE - 1) as i8,
    };

    pub const fn new(i: i8, j: i8) -> Self {
        Self { i, j }
    }

    /// Move `cells` steps in `dir`
    pub fn step(self, dir: Direction, cells: i8) -> Self {
        let (di, dj) = dir.delta();
        Self {
            i: self.i.saturating_add(di.saturating_mul(cells)),
            j: self.j.saturating_add(dj.saturating_mul(cells)),
        }
    }

    /// Inside the playable 10x10 area
    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE as i8).contains(&self.i) && (0..GRID_SIZE as i8).contains(&self.j)
    }

    /// World-space `(x, z)` of this cell's anchor point
    pub fn world_xz(self) -> (f32, f32) {
        (
            TILE_ORIGIN + TILE_SIZE * self.j as f32,
            TILE_ORIGIN + TILE_SIZE * self.i as f32,
        )
    }
}

/// A queued movement command in grid terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Walk(Direction),
    Jump(Direction),
}

impl Intent {
    pub fn direction(self) -> Direction {
        match self {
            Intent::Walk(d) | Intent::Jump(d) => d,
        }
    }

    pub fn is_jump(self) -> bool {
        matches!(self, Intent::Jump(_))
    }
}

/// Arrow keys as the player sees them on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

impl Arrow {
    /// Grid direction this arrow means under a given camera facing
    ///
    /// At `Deg0` the mapping is the identity (up = north). Every further
    /// quarter turn rotates each mapping one step counter-clockwise.
    pub fn to_direction(self, facing: Facing) -> Direction {
        let base = match self {
            Arrow::Up => Direction::North,
            Arrow::Down => Direction::South,
            Arrow::Left => Direction::West,
            Arrow::Right => Direction::East,
        };
        (0..facing.quarter_turns()).fold(base, |d, _| d.rotate_ccw())
    }
}

/// Camera rotation snapped to quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Facing {
    /// Advance by 90° modulo 360
    ///
    /// ```
    /// use tilehop_types::Facing;
    ///
    /// assert_eq!(Facing::Deg0.next(), Facing::Deg90);
    /// assert_eq!(Facing::Deg270.next(), Facing::Deg0);
    /// ```
    pub fn next(self) -> Self {
        match self {
            Facing::Deg0 => Facing::Deg90,
            Facing::Deg90 => Facing::Deg180,
            Facing::Deg180 => Facing::Deg270,
            Facing::Deg270 => Facing::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    pub fn quarter_turns(self) -> u8 {
        match self {
            Facing::Deg0 => 0,
            Facing::Deg90 => 1,
            Facing::Deg180 => 2,
            Facing::Deg270 => 3,
        }
    }
}

/// Camera presets
///
/// - **TopDown**: fixed, straight above the board centre
/// - **Tower**: fixed, oblique view from beyond the start corner
/// - **Adventure**: first-person-ish, just above the player
/// - **Follow**: third-person, behind and above the player
/// - **Free**: positioned by dragging the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    TopDown,
    #[default]
    Tower,
    Adventure,
    Follow,
    Free,
}

impl CameraMode {
    /// Player-relative modes are recomputed from the player position each frame
    pub fn follows_player(self) -> bool {
        matches!(self, CameraMode::Adventure | CameraMode::Follow)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CameraMode::TopDown => "top",
            CameraMode::Tower => "tower",
            CameraMode::Adventure => "adventure",
            CameraMode::Follow => "follow",
            CameraMode::Free => "free",
        }
    }
}

/// Discrete input events the game understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    Move(Arrow),
    ArmJump,
    Camera(CameraMode),
    /// Pointer pressed at `(x, y)`; switches to the free camera.
    DragStart { x: f32, y: f32 },
    Drag { x: f32, y: f32 },
    DragEnd,
    /// Scroll wheel, positive = towards the scene.
    Zoom(f32),
    SpeedUp,
    SpeedDown,
    Restart,
}

/// Why the player lost a life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    Hazard,
    Obstacle,
    OutOfBounds,
    /// Committed onto a raised tile that was too low.
    Fell,
}

impl DeathCause {
    pub fn as_str(self) -> &'static str {
        match self {
            DeathCause::Hazard => "hazard",
            DeathCause::Obstacle => "obstacle",
            DeathCause::OutOfBounds => "out_of_bounds",
            DeathCause::Fell => "fell",
        }
    }
}

/// Something noteworthy that happened during a tick (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    LevelGenerated { level: u32 },
    ObstaclesRefreshed,
    Died { cause: DeathCause, at: GridPos, lives_lost: u32 },
    LevelCleared { level: u32, score: u32 },
    GameWon { score: u32 },
    GameLost { score: u32 },
    Restarted,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::LevelGenerated { .. } => "level_generated",
            GameEvent::ObstaclesRefreshed => "obstacles_refreshed",
            GameEvent::Died { .. } => "died",
            GameEvent::LevelCleared { .. } => "level_cleared",
            GameEvent::GameWon { .. } => "game_won",
            GameEvent::GameLost { .. } => "game_lost",
            GameEvent::Restarted => "restarted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_constants_agree() {
        assert_eq!(GRID_STRIDE, 11);
        assert_eq!(TILE_SIZE, 30.0);
        assert_eq!(TILE_ORIGIN, 7.5);
        assert_eq!(REST_HEIGHT, 105.0);
        // 30 arc steps of 2 units cover exactly two tiles.
        assert_eq!(JUMP_STEPS as f32 * JUMP_LATERAL_STEP, 2.0 * TILE_SIZE);
        assert!(MIN_SPEED <= DEFAULT_SPEED && DEFAULT_SPEED <= MAX_SPEED);
    }
}
