//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from raylib each frame and
//!   writes the results into [`InputState`].
//! - Pressing the debug key triggers a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(world: &mut World, rl: &RaylibHandle) {
    let poll = |state: &mut BoolState| {
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    };

    let debug_pressed = {
        let mut input = world.resource_mut::<InputState>();
        poll(&mut input.jump);
        poll(&mut input.mode_debug);
        input.mode_debug.just_pressed
    };

    if debug_pressed {
        world.trigger(SwitchDebugEvent {});
    }
}
