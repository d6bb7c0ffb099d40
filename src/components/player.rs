use bevy_ecs::prelude::Component;

/// Marks the player entity.
///
/// `velocity` is the vertical speed in pixels per second, negative when
/// moving up. `grounded` records whether the last physics step started on
/// the floor.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player {
    pub velocity: f32,
    pub grounded: bool,
}
