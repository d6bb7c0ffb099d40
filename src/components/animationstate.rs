//! Sprite-sheet animation state.
//!
//! [`AnimationState`] holds everything needed to pick the visible frame out of
//! a horizontal sprite sheet and to place it on screen. Frames are advanced by
//! [`AnimationState::advance`] on a fixed cadence that does not depend on the
//! rendering rate.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Per-sprite animation data.
///
/// `frame_rect` selects the current frame inside the sprite sheet. Its `x`
/// is always `frame * frame_rect.width` after an update, and `frame` stays in
/// `[0, max_frame]`.
#[derive(Component, Debug, Clone, Copy)]
pub struct AnimationState {
    /// Source rectangle of the current frame within the sprite sheet.
    pub frame_rect: Rectangle,
    /// Top-left corner of the sprite in screen space.
    pub position: Vector2,
    /// Current frame index.
    pub frame: usize,
    /// Highest valid frame index; frames wrap modulo `max_frame + 1`.
    pub max_frame: usize,
    /// Seconds a frame is held before advancing.
    pub frame_duration: f32,
    /// Seconds accumulated since the last frame change.
    pub elapsed_since_frame: f32,
}

impl AnimationState {
    /// Create a state showing frame 0 of a sheet whose frames are
    /// `frame_width` x `frame_height` pixels.
    pub fn new(
        frame_width: f32,
        frame_height: f32,
        position: Vector2,
        max_frame: usize,
        frame_duration: f32,
    ) -> Self {
        Self {
            frame_rect: Rectangle::new(0.0, 0.0, frame_width, frame_height),
            position,
            frame: 0,
            max_frame,
            frame_duration,
            elapsed_since_frame: 0.0,
        }
    }

    /// Accumulate `delta` seconds and advance at most one frame.
    ///
    /// A delta spanning several frame durations still moves a single frame
    /// forward; there is no catch-up. Returns `true` when the frame changed.
    pub fn advance(&mut self, delta: f32) -> bool {
        self.elapsed_since_frame += delta;
        if self.elapsed_since_frame < self.frame_duration {
            return false;
        }
        self.elapsed_since_frame = 0.0;
        self.set_frame(self.frame + 1);
        true
    }

    /// Jump straight to `frame` (wrapped into range) and update the source rectangle.
    pub fn set_frame(&mut self, frame: usize) {
        self.frame = frame % (self.max_frame + 1);
        self.frame_rect.x = self.frame as f32 * self.frame_rect.width;
    }

    /// On-screen bounding rectangle of the sprite.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.position.x,
            self.position.y,
            self.frame_rect.width,
            self.frame_rect.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(max_frame: usize) -> AnimationState {
        AnimationState::new(32.0, 64.0, Vector2::new(10.0, 20.0), max_frame, 0.1)
    }

    #[test]
    fn test_new_starts_on_first_frame() {
        let s = sheet(5);
        assert_eq!(s.frame, 0);
        assert_eq!(s.frame_rect.x, 0.0);
        assert_eq!(s.frame_rect.width, 32.0);
        assert_eq!(s.frame_rect.height, 64.0);
    }

    #[test]
    fn test_advance_holds_until_duration_reached() {
        let mut s = sheet(5);
        assert!(!s.advance(0.05));
        assert_eq!(s.frame, 0);
        assert!(s.advance(0.05));
        assert_eq!(s.frame, 1);
        assert_eq!(s.frame_rect.x, 32.0);
        assert_eq!(s.elapsed_since_frame, 0.0);
    }

    #[test]
    fn test_advance_wraps_after_max_frame() {
        let mut s = sheet(3);
        for _ in 0..4 {
            s.advance(0.1);
        }
        assert_eq!(s.frame, 0);
        assert_eq!(s.frame_rect.x, 0.0);
    }

    #[test]
    fn test_large_delta_advances_a_single_frame() {
        let mut s = sheet(7);
        assert!(s.advance(10.0));
        assert_eq!(s.frame, 1);
        assert_eq!(s.elapsed_since_frame, 0.0);
    }

    #[test]
    fn test_frame_rect_tracks_frame_for_every_frame() {
        for max_frame in 0..8 {
            let mut s = sheet(max_frame);
            for _ in 0..(2 * (max_frame + 1)) {
                s.advance(0.1);
                assert!(s.frame <= max_frame);
                assert_eq!(s.frame_rect.x, s.frame as f32 * s.frame_rect.width);
            }
        }
    }

    #[test]
    fn test_single_frame_sheet_stays_on_zero() {
        let mut s = sheet(0);
        assert!(s.advance(0.2));
        assert_eq!(s.frame, 0);
        assert_eq!(s.frame_rect.x, 0.0);
    }

    #[test]
    fn test_set_frame_wraps_out_of_range_index() {
        let mut s = sheet(5);
        s.set_frame(7);
        assert_eq!(s.frame, 1);
        assert_eq!(s.frame_rect.x, 32.0);
    }

    #[test]
    fn test_bounds_uses_position_and_frame_size() {
        let s = sheet(5);
        let b = s.bounds();
        assert_eq!((b.x, b.y, b.width, b.height), (10.0, 20.0, 32.0, 64.0));
    }
}
