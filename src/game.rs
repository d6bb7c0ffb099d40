//! Session setup.
//!
//! Loads the textures, builds the ECS world with its resources and observers,
//! and spawns the player, the fixed obstacle set and the three parallax
//! layers. Sprite placement is derived from the sprite-sheet sizes, so the
//! world can be built without a window when the sizes are known.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animationstate::AnimationState;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::scrolllayer::ScrollLayer;
use crate::components::zindex::ZIndex;
use crate::events::outcome::log_outcome_change;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::finishline::FinishLine;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::outcome::GameOutcome;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

pub const FAR_TEX: &str = "far";
pub const MID_TEX: &str = "mid";
pub const FORE_TEX: &str = "fore";
pub const PLAYER_TEX: &str = "player";
pub const OBSTACLE_TEX: &str = "obstacle";

/// Texture keys and the files they are loaded from, relative to the assets dir.
pub const TEXTURE_FILES: [(&str, &str); 5] = [
    (FAR_TEX, "far-buildings.png"),
    (MID_TEX, "back-buildings.png"),
    (FORE_TEX, "foreground.png"),
    (PLAYER_TEX, "scarfy.png"),
    (OBSTACLE_TEX, "12_nebula_spritesheet.png"),
];

/// Pixel sizes of the loaded sheets and layer textures.
#[derive(Debug, Clone, Copy)]
pub struct SheetSizes {
    /// Whole player sprite sheet (width, height).
    pub player: (f32, f32),
    /// Whole obstacle sprite sheet (width, height).
    pub obstacle: (f32, f32),
    /// Widths of the far, mid and fore background textures.
    pub layers: [f32; 3],
}

impl SheetSizes {
    pub fn from_store(textures: &TextureStore) -> Result<Self, String> {
        let size = |key: &str| {
            textures
                .size(key)
                .ok_or_else(|| format!("Texture '{}' was not loaded", key))
        };
        Ok(Self {
            player: size(PLAYER_TEX)?,
            obstacle: size(OBSTACLE_TEX)?,
            layers: [size(FAR_TEX)?.0, size(MID_TEX)?.0, size(FORE_TEX)?.0],
        })
    }
}

/// Load every texture the game draws. Fails on the first missing file.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &GameConfig,
) -> Result<TextureStore, String> {
    let mut textures = TextureStore::new();
    for (key, file) in TEXTURE_FILES {
        textures.load(rl, thread, key, &config.asset_path(file))?;
    }
    Ok(textures)
}

/// Create the world with every resource and observer the schedule needs.
pub fn new_world(config: GameConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(GameOutcome::new());
    world.insert_resource(FinishLine {
        x: config.finish_line_x(),
    });
    world.insert_resource(config);

    world.spawn(Observer::new(log_outcome_change));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
    world
}

/// Spawn the player, the obstacle set and the background layers.
///
/// The obstacle storage is reserved up front; if that allocation fails
/// nothing is spawned and the error is returned.
pub fn spawn_actors(world: &mut World, sheets: &SheetSizes) -> Result<(), String> {
    let config = world.resource::<GameConfig>().clone();
    let screen = *world.resource::<ScreenSize>();
    let (screen_w, floor_y) = (screen.w as f32, screen.floor_y());

    let count = config.obstacle_count;
    let mut obstacles: Vec<(Obstacle, AnimationState)> = Vec::new();
    obstacles
        .try_reserve_exact(count)
        .map_err(|e| format!("Failed to allocate {} obstacles: {}", count, e))?;

    let frame_w = sheets.obstacle.0 / config.obstacle_columns as f32;
    let frame_h = sheets.obstacle.1 / config.obstacle_rows as f32;
    for index in 0..count {
        let position = Vector2::new(config.obstacle_start_x(index), floor_y - frame_h);
        obstacles.push((
            Obstacle { index },
            AnimationState::new(
                frame_w,
                frame_h,
                position,
                config.obstacle_columns as usize - 1,
                config.obstacle_frame_duration,
            ),
        ));
    }

    let player_w = sheets.player.0 / config.player_columns as f32;
    let player_h = sheets.player.1;
    let player = AnimationState::new(
        player_w,
        player_h,
        Vector2::new(screen_w / 2.0 - player_w / 2.0, floor_y - player_h),
        config.player_columns as usize - 1,
        config.player_frame_duration,
    );

    let factors = [config.far_factor, config.mid_factor, config.fore_factor];
    for (depth, (key, (width, factor))) in [FAR_TEX, MID_TEX, FORE_TEX]
        .into_iter()
        .zip(sheets.layers.into_iter().zip(factors))
        .enumerate()
    {
        world.spawn((
            ScrollLayer::new(key, width, config.background_scale, factor),
            ZIndex(depth as i32),
        ));
    }

    world.spawn_batch(obstacles);
    world.spawn((Player::default(), player));

    log::info!(
        "Spawned player ({}x{}) and {} obstacles; finish line at x={}",
        player_w,
        player_h,
        count,
        config.finish_line_x()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheets() -> SheetSizes {
        SheetSizes {
            player: (768.0, 128.0),
            obstacle: (800.0, 800.0),
            layers: [256.0, 256.0, 352.0],
        }
    }

    #[test]
    fn test_spawn_places_player_on_floor_centred() {
        let mut world = new_world(GameConfig::new());
        spawn_actors(&mut world, &sheets()).unwrap();

        let mut q = world.query_filtered::<&AnimationState, With<Player>>();
        let player = q.single(&world).unwrap();
        assert_eq!(player.frame_rect.width, 128.0);
        assert_eq!(player.frame_rect.height, 128.0);
        assert_eq!(player.position.x, 256.0 - 64.0);
        assert_eq!(player.position.y, 380.0 - 128.0);
        assert_eq!(player.max_frame, 5);
    }

    #[test]
    fn test_spawn_staggers_obstacles() {
        let mut world = new_world(GameConfig::new());
        spawn_actors(&mut world, &sheets()).unwrap();

        let mut q = world.query::<(&Obstacle, &AnimationState)>();
        let mut obstacles: Vec<_> = q.iter(&world).map(|(o, s)| (o.index, *s)).collect();
        obstacles.sort_by_key(|(i, _)| *i);
        assert_eq!(obstacles.len(), 20);
        for (index, state) in obstacles {
            assert_eq!(state.position.x, 512.0 + index as f32 * 500.0);
            assert_eq!(state.position.y, 380.0 - 100.0);
            assert_eq!(state.frame_rect.width, 100.0);
            assert_eq!(state.max_frame, 7);
        }
    }

    #[test]
    fn test_spawn_creates_layers_in_depth_order() {
        let mut world = new_world(GameConfig::new());
        spawn_actors(&mut world, &sheets()).unwrap();

        let mut q = world.query::<(&ScrollLayer, &ZIndex)>();
        let mut layers: Vec<_> = q.iter(&world).map(|(l, z)| (z.0, l.clone())).collect();
        layers.sort_by_key(|(z, _)| *z);
        let keys: Vec<_> = layers.iter().map(|(_, l)| l.tex_key.as_str()).collect();
        assert_eq!(keys, [FAR_TEX, MID_TEX, FORE_TEX]);
        assert_eq!(layers[2].1.scaled_width(), 704.0);
    }

    #[test]
    fn test_finish_line_resource_matches_config() {
        let world = new_world(GameConfig::new());
        assert_eq!(world.resource::<FinishLine>().x, 512.0 + 19.0 * 500.0 + 50.0);
    }
}
