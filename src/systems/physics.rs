//! Ground contact and vertical motion of the player.
//!
//! The player only moves vertically. While grounded the velocity is pinned to
//! zero unless a jump is requested; in the air gravity accumulates into the
//! velocity, and the updated velocity is then integrated into the position
//! (semi-implicit Euler).

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animationstate::AnimationState;
use crate::components::player::Player;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Constant inputs of a physics step.
#[derive(Debug, Clone, Copy)]
pub struct JumpPhysics {
    /// Downward acceleration, positive.
    pub gravity: f32,
    /// Velocity set on jump, negative (up).
    pub jump_velocity: f32,
    /// Y coordinate of the floor.
    pub floor_y: f32,
}

/// A sprite of `height` at `position` is grounded when its bottom edge is at
/// or below `floor_y`.
pub fn is_on_ground(position: Vector2, height: f32, floor_y: f32) -> bool {
    position.y >= floor_y - height
}

/// Advance the player's vertical state by `delta` seconds.
///
/// Returns whether the player was grounded at the start of the step.
pub fn step(
    player: &mut Player,
    state: &mut AnimationState,
    delta: f32,
    physics: JumpPhysics,
    jump_requested: bool,
) -> bool {
    let grounded = is_on_ground(state.position, state.frame_rect.height, physics.floor_y);
    if grounded {
        player.velocity = 0.0;
        if jump_requested {
            player.velocity = physics.jump_velocity;
        }
    } else {
        player.velocity += physics.gravity * delta;
    }
    state.position.y += player.velocity * delta;
    grounded
}

/// Apply gravity, jumps and integration to the player entity.
pub fn player_physics(
    mut query: Query<(&mut Player, &mut AnimationState)>,
    config: Res<GameConfig>,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
) {
    let physics = JumpPhysics {
        gravity: config.gravity,
        jump_velocity: config.jump_velocity,
        floor_y: screen.floor_y(),
    };
    for (mut player, mut state) in query.iter_mut() {
        let grounded = step(
            &mut player,
            &mut state,
            time.delta,
            physics,
            input.jump.just_pressed,
        );
        if grounded && input.jump.just_pressed {
            log::debug!("Jump at y={:.1}", state.position.y);
        }
        player.grounded = grounded;
    }
}
