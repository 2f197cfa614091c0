//! Command interpreter - arrow keys to compass intents
//!
//! Arrows are relative to the camera, so the same key means a different grid
//! direction after the view has been rotated (see [`Arrow::to_direction`]).
//! The jump key arms a one-shot flag that turns the next arrow into a jump.
//! Only the latest intent is kept until the next tick takes it.

use crate::types::{Arrow, Facing, Intent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInterpreter {
    jump_armed: bool,
    pending: Option<Intent>,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm_jump(&mut self) {
        self.jump_armed = true;
    }

    pub fn is_jump_armed(&self) -> bool {
        self.jump_armed
    }

    /// Translate an arrow press under the current camera facing.
    /// Replaces any intent not yet taken.
    pub fn press(&mut self, arrow: Arrow, facing: Facing) -> Intent {
        let direction = arrow.to_direction(facing);
        let intent = if std::mem::take(&mut self.jump_armed) {
            Intent::Jump(direction)
        } else {
            Intent::Walk(direction)
        };
        self.pending = Some(intent);
        intent
    }

    pub fn pending(&self) -> Option<Intent> {
        self.pending
    }

    /// Hand the queued intent to the tick; at most once
    pub fn take(&mut self) -> Option<Intent> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
