//! Parallax background layer.
//!
//! A [`ScrollLayer`] is a texture tiled horizontally and drawn twice, at
//! `offset` and `offset + scaled_width()`. The offset wraps back to zero as
//! soon as a whole tile has scrolled past, so the two copies never leave a
//! visible seam.

use bevy_ecs::prelude::Component;

/// Move `offset` left by `speed * delta` and wrap it to zero once it reaches
/// `-layer_width_scaled`.
///
/// The result always lies in `(-layer_width_scaled, 0]` for a non-negative
/// speed, provided the per-call displacement is smaller than one tile.
pub fn scroll(offset: f32, delta: f32, speed: f32, layer_width_scaled: f32) -> f32 {
    let offset = offset - speed * delta;
    if offset <= -layer_width_scaled {
        0.0
    } else {
        offset
    }
}

/// Horizontally repeating background layer.
#[derive(Component, Clone, Debug)]
pub struct ScrollLayer {
    /// Key of the texture in the [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub tex_key: String,
    /// Current horizontal offset in pixels.
    pub offset: f32,
    /// Draw scale applied to the texture.
    pub scale: f32,
    /// Multiplier over the base scroll speed; larger values look closer.
    pub speed_factor: f32,
    /// Unscaled texture width in pixels.
    pub width: f32,
}

impl ScrollLayer {
    pub fn new(tex_key: impl Into<String>, width: f32, scale: f32, speed_factor: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            offset: 0.0,
            scale,
            speed_factor,
            width,
        }
    }

    /// Width of one tile on screen.
    pub fn scaled_width(&self) -> f32 {
        self.width * self.scale
    }

    /// Advance the layer by `delta` seconds at `base_speed * speed_factor`.
    pub fn advance(&mut self, delta: f32, base_speed: f32) {
        self.offset = scroll(
            self.offset,
            delta,
            base_speed * self.speed_factor,
            self.scaled_width(),
        );
    }

    /// The two x positions the layer is drawn at.
    pub fn draw_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.scaled_width()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_moves_left() {
        let offset = scroll(0.0, 0.5, 22.0, 1024.0);
        assert_eq!(offset, -11.0);
    }

    #[test]
    fn test_scroll_wraps_to_exactly_zero() {
        let mut offset = 0.0;
        let mut wrapped = false;
        for _ in 0..4000 {
            offset = scroll(offset, 1.0 / 60.0, 22.0, 1024.0);
            assert!(offset > -1024.0);
            assert!(offset <= 0.0);
            if offset == 0.0 {
                wrapped = true;
                break;
            }
        }
        assert!(wrapped);
    }

    #[test]
    fn test_scroll_threshold_is_inclusive() {
        assert_eq!(scroll(-1002.0, 1.0, 22.0, 1024.0), 0.0);
        assert_eq!(scroll(-1001.0, 1.0, 22.0, 1024.0), -1023.0);
    }

    #[test]
    fn test_layer_uses_scaled_width_and_factor() {
        let mut layer = ScrollLayer::new("far", 256.0, 2.0, 1.1);
        assert_eq!(layer.scaled_width(), 512.0);
        layer.advance(1.0, 20.0);
        assert!((layer.offset + 22.0).abs() < 1e-4);
        let [a, b] = layer.draw_positions();
        assert!((b - a - 512.0).abs() < 1e-4);
    }
}
