//! Rendering.
//!
//! Draws one frame with raylib: the parallax layers first, then either the
//! obstacles and the player or the end-of-session message. With
//! [`DebugMode`] present, collision rectangles, the finish line and a few
//! counters are drawn on top.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animationstate::AnimationState;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::scrolllayer::ScrollLayer;
use crate::components::zindex::ZIndex;
use crate::game::{OBSTACLE_TEX, PLAYER_TEX};
use crate::resources::debugmode::DebugMode;
use crate::resources::finishline::FinishLine;
use crate::resources::gameconfig::GameConfig;
use crate::resources::outcome::{GameOutcome, Outcome};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::systems::collision::inset_rect;

const MESSAGE_FONT_SIZE: i32 = 50;

pub fn render_frame(world: &mut World, rl: &mut RaylibHandle, thread: &RaylibThread) {
    let mut layers: Vec<(ScrollLayer, ZIndex)> = {
        let mut q = world.query::<(&ScrollLayer, &ZIndex)>();
        q.iter(world).map(|(l, z)| (l.clone(), *z)).collect()
    };
    layers.sort_by_key(|(_, z)| *z);

    let obstacles: Vec<AnimationState> = {
        let mut q = world.query_filtered::<&AnimationState, With<Obstacle>>();
        q.iter(world).copied().collect()
    };
    let player: Option<AnimationState> = {
        let mut q = world.query_filtered::<&AnimationState, With<Player>>();
        q.iter(world).next().copied()
    };

    let screen = *world.resource::<ScreenSize>();
    let outcome = world.resource::<GameOutcome>().get();
    let finish_line = *world.resource::<FinishLine>();
    let inset = world.resource::<GameConfig>().obstacle_inset;
    let debug = world.contains_resource::<DebugMode>();
    let textures = world.non_send_resource::<TextureStore>();

    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::WHITE);

    for (layer, _) in layers.iter() {
        if let Some(tex) = textures.get(&layer.tex_key) {
            for x in layer.draw_positions() {
                d.draw_texture_ex(tex, Vector2::new(x, 0.0), 0.0, layer.scale, Color::WHITE);
            }
        }
    }

    match outcome {
        Outcome::Lost => d.draw_text(
            "GAME OVER",
            screen.w / 2 - 150,
            screen.h / 2,
            MESSAGE_FONT_SIZE,
            Color::RED,
        ),
        Outcome::Won => d.draw_text(
            "YOU WIN!",
            screen.w / 2 - 125,
            screen.h / 2,
            MESSAGE_FONT_SIZE,
            Color::GREEN,
        ),
        Outcome::InProgress => {
            if let Some(tex) = textures.get(OBSTACLE_TEX) {
                for state in obstacles.iter() {
                    d.draw_texture_rec(tex, state.frame_rect, state.position, Color::WHITE);
                }
            }
            if let (Some(tex), Some(state)) = (textures.get(PLAYER_TEX), player.as_ref()) {
                d.draw_texture_rec(tex, state.frame_rect, state.position, Color::WHITE);
            }
        }
    }

    if debug {
        if let Some(state) = player.as_ref() {
            let b = state.bounds();
            d.draw_rectangle_lines(
                b.x as i32,
                b.y as i32,
                b.width as i32,
                b.height as i32,
                Color::BLUE,
            );
        }
        for state in obstacles.iter() {
            let r = inset_rect(state.bounds(), inset);
            d.draw_rectangle_lines(
                r.x as i32,
                r.y as i32,
                r.width.max(1.0) as i32,
                r.height.max(1.0) as i32,
                Color::RED,
            );
        }
        let fx = finish_line.x as i32;
        d.draw_line(fx, 0, fx, screen.h, Color::GREEN);

        let fps = d.get_fps();
        let text = format!(
            "DEBUG (F11) | FPS: {} | {:?} | finish x: {:.0}",
            fps, outcome, finish_line.x
        );
        d.draw_text(&text, 10, 10, 10, Color::BLACK);
    }
}
