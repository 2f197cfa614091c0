//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a [`GameView`] turns a core
//! snapshot into a framebuffer of styled cells, and a [`TerminalRenderer`]
//! diffs that against the previous frame and writes only what changed.
//! No widget toolkit is involved.
//!
//! The 3D scene is shown top-down; camera state appears in the side panel.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tilehop_core as core;
pub use tilehop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{changed_runs, encode_full_into, encode_runs_into, Run, TerminalRenderer};
