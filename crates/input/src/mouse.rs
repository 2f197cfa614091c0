//! Mouse mapping: left-button drag steers the free camera, the wheel zooms.
//!
//! Terminal cells are scaled to pseudo-pixels so drags cover roughly the same
//! range a windowed pointer would.

use crate::types::GameAction;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Pseudo-pixels per terminal column
pub const CELL_WIDTH_PX: f32 = 8.0;
/// Pseudo-pixels per terminal row
pub const CELL_HEIGHT_PX: f32 = 16.0;

fn pointer(mouse: &MouseEvent) -> (f32, f32) {
    (
        mouse.column as f32 * CELL_WIDTH_PX,
        mouse.row as f32 * CELL_HEIGHT_PX,
    )
}

pub fn handle_mouse_event(mouse: MouseEvent) -> Option<GameAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (x, y) = pointer(&mouse);
            Some(GameAction::DragStart { x, y })
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let (x, y) = pointer(&mouse);
            Some(GameAction::Drag { x, y })
        }
        MouseEventKind::Up(MouseButton::Left) => Some(GameAction::DragEnd),
        MouseEventKind::ScrollUp => Some(GameAction::Zoom(1.0)),
        MouseEventKind::ScrollDown => Some(GameAction::Zoom(-1.0)),
        _ => None,
    }
}
