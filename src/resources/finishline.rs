use bevy_ecs::prelude::Resource;

/// Screen-space x coordinate of the finish line.
///
/// It starts `finish_margin` past the last obstacle and travels left with the
/// obstacles; the player wins once its x is greater than this value.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FinishLine {
    pub x: f32,
}
