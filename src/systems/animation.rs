//! Animation systems.
//!
//! - [`player_animation`] cycles the run cycle while grounded and holds the
//!   airborne frame during a jump.
//! - [`obstacle_animation`] cycles every obstacle's sheet.
//!
//! Both go through [`AnimationState::advance`], which moves at most one frame
//! per call.

use bevy_ecs::prelude::*;

use crate::components::animationstate::AnimationState;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

pub fn player_animation(
    mut query: Query<(&Player, &mut AnimationState)>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    for (player, mut state) in query.iter_mut() {
        if player.grounded {
            state.advance(time.delta);
        } else {
            state.set_frame(config.airborne_frame);
        }
    }
}

pub fn obstacle_animation(
    mut query: Query<&mut AnimationState, With<Obstacle>>,
    time: Res<WorldTime>,
) {
    for mut state in query.iter_mut() {
        state.advance(time.delta);
    }
}
