//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance player and obstacle sprite frames
//! - [`collision`] – inset AABB test between the player and each obstacle
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – slide obstacles and the finish line left
//! - [`outcome`] – finish-line check and the in-progress run condition
//! - [`parallax`] – scroll the background layers
//! - [`physics`] – ground contact, jumps and gravity for the player
//! - [`render`] – draw the frame using raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod collision;
pub mod input;
pub mod movement;
pub mod outcome;
pub mod parallax;
pub mod physics;
pub mod render;
pub mod time;

use bevy_ecs::prelude::*;

use animation::{obstacle_animation, player_animation};
use collision::collision_detector;
use movement::obstacle_movement;
use outcome::{check_finish_line, outcome_in_progress};
use parallax::parallax_scroll;
use physics::player_physics;

/// Build the per-frame update schedule.
///
/// Order: parallax, player physics, player animation, obstacle movement,
/// obstacle animation, collision, finish line. Everything after the parallax
/// stops once the session is won or lost.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            parallax_scroll,
            (
                player_physics,
                player_animation,
                obstacle_movement,
                obstacle_animation,
                collision_detector,
                check_finish_line,
            )
                .chain()
                .run_if(outcome_in_progress),
        )
            .chain(),
    );
    update
}
