use bevy_ecs::prelude::*;

use crate::components::animationstate::AnimationState;
use crate::components::obstacle::Obstacle;
use crate::resources::finishline::FinishLine;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Move every obstacle, and the finish line behind them, by the uniform
/// obstacle velocity.
pub fn obstacle_movement(
    mut query: Query<&mut AnimationState, With<Obstacle>>,
    mut finish_line: ResMut<FinishLine>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let dx = config.obstacle_velocity * time.delta;
    for mut state in query.iter_mut() {
        state.position.x += dx;
    }
    finish_line.x += dx;
}
