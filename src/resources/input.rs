//! Per-frame keyboard input resource.
//!
//! Captures the keys the game cares about: space to jump and F11 to toggle
//! the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key went down this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn new(key_binding: KeyboardKey) -> Self {
        Self {
            just_pressed: false,
            key_binding,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub jump: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            jump: BoolState::new(KeyboardKey::KEY_SPACE),
            mode_debug: BoolState::new(KeyboardKey::KEY_F11),
        }
    }
}
