use bevy_ecs::prelude::*;

use crate::components::scrolllayer::ScrollLayer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Scroll every background layer at the base speed times its own factor.
///
/// Runs in every frame, including after the session ended, so the backdrop
/// keeps moving behind the final message.
pub fn parallax_scroll(
    mut layers: Query<&mut ScrollLayer>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    for mut layer in layers.iter_mut() {
        layer.advance(time.delta, config.background_base_speed);
    }
}
