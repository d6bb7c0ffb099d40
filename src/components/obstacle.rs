use bevy_ecs::prelude::Component;

/// Marks an obstacle entity. `index` is its slot in the fixed obstacle set,
/// which also determines its initial horizontal offset.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub index: usize,
}
