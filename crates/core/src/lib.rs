//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens in a run lives here: level layout,
//! player motion, deaths and level clears, and the camera. There is no I/O;
//! time comes in as a parameter to [`GameState::tick`] and randomness through
//! a seeded [`SimpleRng`], so the same seed and inputs replay identically.
//!
//! # Module Structure
//!
//! - [`grid`]: 11x11 hazard and obstacle maps with invariant checks
//! - [`level`]: per-level layout and the timed obstacle shuffle
//! - [`tiles`]: the shared raised-tile offset
//! - [`motion`]: walk/jump state machine
//! - [`outcome`]: per-tick cell checks and run counters
//! - [`camera`]: view presets and player-relative views
//! - [`command`]: arrow keys to compass intents
//! - [`game_state`]: the aggregate tying it together
//! - [`snapshot`]: a copyable view of everything a renderer needs
//!
//! # Rules
//!
//! - Each row has one hazard (raised on even rows, lethal on odd rows) and one
//!   obstacle. Obstacles re-shuffle every 5 seconds.
//! - Lethal cells, obstacles and leaving the grid cost a life; so does
//!   stepping onto a raised tile that has sunk to -30 or lower.
//! - Reaching (9,9) clears the level (+100). Six levels win, ten deaths in one
//!   level lose.
//!
//! # Example
//!
//! ```
//! use tilehop_core::GameState;
//! use tilehop_types::{Arrow, GameAction, GameEvent};
//!
//! let mut game = GameState::new(12345);
//! game.tick(0.0);
//! assert_eq!(game.take_events().as_slice(), &[GameEvent::LevelGenerated { level: 1 }]);
//!
//! game.apply_action(GameAction::ArmJump);
//! game.apply_action(GameAction::Move(Arrow::Up));
//! assert!(game.commands().pending().is_some_and(|i| i.is_jump()));
//!
//! // The next tick consumes it.
//! game.tick(0.016);
//! assert_eq!(game.commands().pending(), None);
//! assert_eq!(game.level(), 1);
//! ```

pub mod camera;
pub mod command;
pub mod game_state;
pub mod grid;
pub mod level;
pub mod motion;
pub mod outcome;
pub mod rng;
pub mod snapshot;
pub mod tiles;

pub use glam::Vec3;
pub use tilehop_types as types;

pub use camera::{View, ViewDirector};
pub use command::CommandInterpreter;
pub use game_state::{EventBuffer, GameState};
pub use grid::{GridState, GridViolation};
pub use level::LevelGenerator;
pub use motion::{advance, JumpPhase, Motion, PlayerState, Speed, Terrain};
pub use outcome::{evaluate, Outcome, RunState};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{CellSnapshot, GameSnapshot, MotionKind};
pub use tiles::MovingTileOffset;
