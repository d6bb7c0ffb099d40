//! Player versus obstacle collision.
//!
//! Obstacle sprites carry transparent padding, so each obstacle rectangle is
//! shrunk by an inset on every side before the AABB test. The player's
//! rectangle is used as is.

use bevy_ecs::prelude::*;
use raylib::prelude::Rectangle;

use crate::components::animationstate::AnimationState;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::events::outcome::OutcomeChangedEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::outcome::GameOutcome;

/// Shrink `rect` by `inset` on each side.
pub fn inset_rect(rect: Rectangle, inset: f32) -> Rectangle {
    Rectangle::new(
        rect.x + inset,
        rect.y + inset,
        rect.width - 2.0 * inset,
        rect.height - 2.0 * inset,
    )
}

/// Strict AABB overlap; touching edges do not overlap.
pub fn rects_overlap(a: Rectangle, b: Rectangle) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

/// Whether the player overlaps the obstacle once the obstacle is inset.
pub fn collides(player: Rectangle, obstacle: Rectangle, inset: f32) -> bool {
    rects_overlap(player, inset_rect(obstacle, inset))
}

/// Test the player against every obstacle and end the session on any hit.
pub fn collision_detector(
    players: Query<&AnimationState, With<Player>>,
    obstacles: Query<(&Obstacle, &AnimationState)>,
    config: Res<GameConfig>,
    mut outcome: ResMut<GameOutcome>,
    mut commands: Commands,
) {
    for player in players.iter() {
        let player_rect = player.bounds();
        for (obstacle, state) in obstacles.iter() {
            if !collides(player_rect, state.bounds(), config.obstacle_inset) {
                continue;
            }
            log::debug!(
                "Player hit obstacle {} at x={:.1}",
                obstacle.index,
                state.position.x
            );
            if outcome.lose() {
                commands.trigger(OutcomeChangedEvent {
                    outcome: outcome.get(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle::new(x, y, w, h)
    }

    #[test]
    fn test_inset_shrinks_every_side() {
        let r = inset_rect(rect(100.0, 100.0, 200.0, 200.0), 50.0);
        assert_eq!((r.x, r.y, r.width, r.height), (150.0, 150.0, 100.0, 100.0));
    }

    #[test]
    fn test_player_inside_inset_collides() {
        let obstacle = rect(100.0, 100.0, 200.0, 200.0);
        assert!(collides(rect(180.0, 180.0, 50.0, 50.0), obstacle, 50.0));
    }

    #[test]
    fn test_player_far_away_misses() {
        let obstacle = rect(100.0, 100.0, 200.0, 200.0);
        assert!(!collides(rect(0.0, 0.0, 10.0, 10.0), obstacle, 50.0));
    }

    #[test]
    fn test_padding_is_not_solid() {
        let obstacle = rect(100.0, 100.0, 200.0, 200.0);
        // Inside the sprite but only over the trimmed margin.
        let player = rect(105.0, 105.0, 40.0, 40.0);
        assert!(rects_overlap(player, obstacle));
        assert!(!collides(player, obstacle, 50.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(a, rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!rects_overlap(a, rect(0.0, 10.0, 10.0, 10.0)));
        assert!(rects_overlap(a, rect(9.5, 9.5, 10.0, 10.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(180.0, 180.0, 50.0, 50.0);
        let b = rect(150.0, 150.0, 100.0, 100.0);
        assert_eq!(rects_overlap(a, b), rects_overlap(b, a));
    }

    #[test]
    fn test_fully_inset_obstacle_still_hits_at_its_centre() {
        // A 100x100 frame with a 50 inset collapses to a point.
        let obstacle = rect(0.0, 0.0, 100.0, 100.0);
        assert!(collides(rect(40.0, 40.0, 20.0, 20.0), obstacle, 50.0));
        assert!(!collides(rect(60.0, 60.0, 20.0, 20.0), obstacle, 50.0));
    }
}
