//! Key mapping from terminal events to game actions.

use crate::types::{Arrow, CameraMode, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Only presses count; auto-repeat and release events map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        // Movement (relative to the camera)
        KeyCode::Up => Some(GameAction::Move(Arrow::Up)),
        KeyCode::Down => Some(GameAction::Move(Arrow::Down)),
        KeyCode::Left => Some(GameAction::Move(Arrow::Left)),
        KeyCode::Right => Some(GameAction::Move(Arrow::Right)),
        KeyCode::Char(' ') => Some(GameAction::ArmJump),

        // Camera
        KeyCode::Char('u') | KeyCode::Char('U') => Some(GameAction::Camera(CameraMode::TopDown)),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::Camera(CameraMode::Tower)),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::Camera(CameraMode::Adventure)),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(GameAction::Camera(CameraMode::Follow)),

        // Speed
        KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::SpeedUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SpeedDown),

        // Restart
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'));
    }
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Esc
    )
}
