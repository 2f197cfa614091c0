//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`].
//! Input is edge-triggered: one press is one action, auto-repeat and key
//! release events are dropped.

pub mod map;
pub mod mouse;

pub use tilehop_types as types;

pub use map::{handle_key_event, should_quit};
pub use mouse::handle_mouse_event;

use crossterm::event::Event;
use types::GameAction;

/// What a raw terminal event means to the game loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    Action(GameAction),
    Quit,
    Ignored,
}

/// Classify any terminal event
pub fn translate(event: &Event) -> InputCommand {
    let action = match event {
        Event::Key(key) if should_quit(*key) => return InputCommand::Quit,
        Event::Key(key) => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => None,
    };
    action.map_or(InputCommand::Ignored, InputCommand::Action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use types::Arrow;

    #[test]
    fn test_translate_routes_keys() {
        assert_eq!(
            translate(&Event::Key(KeyEvent::from(KeyCode::Esc))),
            InputCommand::Quit
        );
        assert_eq!(
            translate(&Event::Key(KeyEvent::from(KeyCode::Left))),
            InputCommand::Action(GameAction::Move(Arrow::Left))
        );
        assert_eq!(translate(&Event::FocusGained), InputCommand::Ignored);
        assert_eq!(translate(&Event::Resize(80, 24)), InputCommand::Ignored);
    }
}
