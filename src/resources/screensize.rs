//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The bottom edge doubles as
//! the floor line for ground checks.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Y coordinate the player stands on.
    pub fn floor_y(&self) -> f32 {
        self.h as f32
    }
}
