//! Game configuration resource.
//!
//! Holds every tuning value of the game with safe defaults, optionally
//! overridden from an INI configuration file. Missing keys keep their
//! defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 512
//! height = 380
//! target_fps = 60
//! title = Dapper Dasher
//!
//! [assets]
//! dir = textures
//!
//! [physics]
//! gravity = 1000
//! jump_velocity = -600
//!
//! [player]
//! columns = 6
//! frame_duration = 0.0833333
//! airborne_frame = 1
//!
//! [obstacles]
//! count = 20
//! spacing = 500
//! velocity = -200
//! inset = 50
//! columns = 8
//! rows = 8
//! frame_duration = 0.0625
//! finish_margin = 50
//!
//! [background]
//! scale = 2.0
//! base_speed = 20
//! far_factor = 1.1
//! mid_factor = 1.5
//! fore_factor = 1.9
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

const DEFAULT_WINDOW_WIDTH: u32 = 512;
const DEFAULT_WINDOW_HEIGHT: u32 = 380;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Dapper Dasher";
const DEFAULT_ASSETS_DIR: &str = "textures";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

const DEFAULT_GRAVITY: f32 = 1_000.0;
const DEFAULT_JUMP_VELOCITY: f32 = -600.0;

const DEFAULT_PLAYER_COLUMNS: u32 = 6;
const DEFAULT_PLAYER_FRAME_DURATION: f32 = 1.0 / 12.0;
const DEFAULT_AIRBORNE_FRAME: usize = 1;

const DEFAULT_OBSTACLE_COUNT: usize = 20;
const DEFAULT_OBSTACLE_SPACING: f32 = 500.0;
const DEFAULT_OBSTACLE_VELOCITY: f32 = -200.0;
const DEFAULT_OBSTACLE_INSET: f32 = 50.0;
const DEFAULT_OBSTACLE_COLUMNS: u32 = 8;
const DEFAULT_OBSTACLE_ROWS: u32 = 8;
const DEFAULT_OBSTACLE_FRAME_DURATION: f32 = 1.0 / 16.0;
const DEFAULT_FINISH_MARGIN: f32 = 50.0;

const DEFAULT_BACKGROUND_SCALE: f32 = 2.0;
const DEFAULT_BACKGROUND_BASE_SPEED: f32 = 20.0;
const DEFAULT_FAR_FACTOR: f32 = 1.1;
const DEFAULT_MID_FACTOR: f32 = 1.5;
const DEFAULT_FORE_FACTOR: f32 = 1.9;

/// Game configuration resource.
///
/// Window settings, physics constants, sprite-sheet layouts, obstacle tuning
/// and parallax speeds. Systems read it through `Res<GameConfig>`.
#[derive(Resource, Debug, Clone, Serialize)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels. The floor line sits at the bottom edge.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Directory holding the texture files.
    pub assets_dir: PathBuf,

    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
    /// Velocity applied on jump; negative is up.
    pub jump_velocity: f32,

    /// Number of frames in the player sprite sheet row.
    pub player_columns: u32,
    /// Seconds each player frame is held.
    pub player_frame_duration: f32,
    /// Frame shown while the player is in the air.
    pub airborne_frame: usize,

    /// Number of obstacles in the session.
    pub obstacle_count: usize,
    /// Horizontal distance between consecutive obstacles.
    pub obstacle_spacing: f32,
    /// Horizontal obstacle velocity in pixels per second.
    pub obstacle_velocity: f32,
    /// Margin trimmed from every side of an obstacle before collision tests.
    pub obstacle_inset: f32,
    /// Columns in the obstacle sprite sheet.
    pub obstacle_columns: u32,
    /// Rows in the obstacle sprite sheet.
    pub obstacle_rows: u32,
    /// Seconds each obstacle frame is held.
    pub obstacle_frame_duration: f32,
    /// Distance between the last obstacle and the finish line.
    pub finish_margin: f32,

    /// Draw scale for background layers.
    pub background_scale: f32,
    /// Base scroll speed of the background in pixels per second.
    pub background_base_speed: f32,
    pub far_factor: f32,
    pub mid_factor: f32,
    pub fore_factor: f32,

    /// Path to the configuration file.
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the default tuning.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            gravity: DEFAULT_GRAVITY,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            player_columns: DEFAULT_PLAYER_COLUMNS,
            player_frame_duration: DEFAULT_PLAYER_FRAME_DURATION,
            airborne_frame: DEFAULT_AIRBORNE_FRAME,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            obstacle_spacing: DEFAULT_OBSTACLE_SPACING,
            obstacle_velocity: DEFAULT_OBSTACLE_VELOCITY,
            obstacle_inset: DEFAULT_OBSTACLE_INSET,
            obstacle_columns: DEFAULT_OBSTACLE_COLUMNS,
            obstacle_rows: DEFAULT_OBSTACLE_ROWS,
            obstacle_frame_duration: DEFAULT_OBSTACLE_FRAME_DURATION,
            finish_margin: DEFAULT_FINISH_MARGIN,
            background_scale: DEFAULT_BACKGROUND_SCALE,
            background_base_speed: DEFAULT_BACKGROUND_BASE_SPEED,
            far_factor: DEFAULT_FAR_FACTOR,
            mid_factor: DEFAULT_MID_FACTOR,
            fore_factor: DEFAULT_FORE_FACTOR,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Returns an error if the file cannot be read or a value fails to parse.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&ini)?;

        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, {} obstacles",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.obstacle_count
        );
        Ok(())
    }

    /// Override fields from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&ini)
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<(), String> {
        let uint = |section: &str, key: &str| -> Result<Option<u64>, String> {
            ini.getuint(section, key)
                .map_err(|e| format!("[{}] {}: {}", section, key, e))
        };
        let uint32 = |section: &str, key: &str| -> Result<Option<u32>, String> {
            uint(section, key)?
                .map(|v| {
                    u32::try_from(v)
                        .map_err(|_| format!("[{}] {}: {} is out of range", section, key, v))
                })
                .transpose()
        };
        let float = |section: &str, key: &str| -> Result<Option<f32>, String> {
            ini.getfloat(section, key)
                .map(|v| v.map(|v| v as f32))
                .map_err(|e| format!("[{}] {}: {}", section, key, e))
        };

        // [window]
        if let Some(v) = uint32("window", "width")? {
            self.window_width = v;
        }
        if let Some(v) = uint32("window", "height")? {
            self.window_height = v;
        }
        if let Some(v) = uint32("window", "target_fps")? {
            self.target_fps = v;
        }
        if let Some(v) = ini.get("window", "title") {
            self.title = v;
        }

        // [assets]
        if let Some(v) = ini.get("assets", "dir") {
            self.assets_dir = PathBuf::from(v);
        }

        // [physics]
        if let Some(v) = float("physics", "gravity")? {
            self.gravity = v;
        }
        if let Some(v) = float("physics", "jump_velocity")? {
            self.jump_velocity = v;
        }

        // [player]
        if let Some(v) = uint32("player", "columns")? {
            self.player_columns = v;
        }
        if let Some(v) = float("player", "frame_duration")? {
            self.player_frame_duration = v;
        }
        if let Some(v) = uint("player", "airborne_frame")? {
            self.airborne_frame = v as usize;
        }

        // [obstacles]
        if let Some(v) = uint("obstacles", "count")? {
            self.obstacle_count = v as usize;
        }
        if let Some(v) = float("obstacles", "spacing")? {
            self.obstacle_spacing = v;
        }
        if let Some(v) = float("obstacles", "velocity")? {
            self.obstacle_velocity = v;
        }
        if let Some(v) = float("obstacles", "inset")? {
            self.obstacle_inset = v;
        }
        if let Some(v) = uint32("obstacles", "columns")? {
            self.obstacle_columns = v;
        }
        if let Some(v) = uint32("obstacles", "rows")? {
            self.obstacle_rows = v;
        }
        if let Some(v) = float("obstacles", "frame_duration")? {
            self.obstacle_frame_duration = v;
        }
        if let Some(v) = float("obstacles", "finish_margin")? {
            self.finish_margin = v;
        }

        // [background]
        if let Some(v) = float("background", "scale")? {
            self.background_scale = v;
        }
        if let Some(v) = float("background", "base_speed")? {
            self.background_base_speed = v;
        }
        if let Some(v) = float("background", "far_factor")? {
            self.far_factor = v;
        }
        if let Some(v) = float("background", "mid_factor")? {
            self.mid_factor = v;
        }
        if let Some(v) = float("background", "fore_factor")? {
            self.fore_factor = v;
        }

        Ok(())
    }

    /// Save configuration to the INI file at `config_path`.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            ini.set(section, key, Some(value));
        };

        set("window", "width", self.window_width.to_string());
        set("window", "height", self.window_height.to_string());
        set("window", "target_fps", self.target_fps.to_string());
        set("window", "title", self.title.clone());
        set("assets", "dir", self.assets_dir.display().to_string());

        set("physics", "gravity", self.gravity.to_string());
        set("physics", "jump_velocity", self.jump_velocity.to_string());

        set("player", "columns", self.player_columns.to_string());
        set("player", "frame_duration", self.player_frame_duration.to_string());
        set("player", "airborne_frame", self.airborne_frame.to_string());

        set("obstacles", "count", self.obstacle_count.to_string());
        set("obstacles", "spacing", self.obstacle_spacing.to_string());
        set("obstacles", "velocity", self.obstacle_velocity.to_string());
        set("obstacles", "inset", self.obstacle_inset.to_string());
        set("obstacles", "columns", self.obstacle_columns.to_string());
        set("obstacles", "rows", self.obstacle_rows.to_string());
        set(
            "obstacles",
            "frame_duration",
            self.obstacle_frame_duration.to_string(),
        );
        set("obstacles", "finish_margin", self.finish_margin.to_string());

        set("background", "scale", self.background_scale.to_string());
        set("background", "base_speed", self.background_base_speed.to_string());
        set("background", "far_factor", self.far_factor.to_string());
        set("background", "mid_factor", self.mid_factor.to_string());
        set("background", "fore_factor", self.fore_factor.to_string());

        ini
    }

    /// Reject values the game loop cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err("window size must be non-zero".to_string());
        }
        if i32::try_from(self.window_width).is_err()
            || i32::try_from(self.window_height).is_err()
        {
            return Err(format!(
                "window size {}x{} exceeds {}",
                self.window_width,
                self.window_height,
                i32::MAX
            ));
        }
        if self.player_columns == 0 {
            return Err("[player] columns must be at least 1".to_string());
        }
        if self.airborne_frame >= self.player_columns as usize {
            return Err(format!(
                "[player] airborne_frame {} is outside the {} column sheet",
                self.airborne_frame, self.player_columns
            ));
        }
        if self.obstacle_columns == 0 || self.obstacle_rows == 0 {
            return Err("[obstacles] columns and rows must be at least 1".to_string());
        }
        if self.player_frame_duration <= 0.0 || self.obstacle_frame_duration <= 0.0 {
            return Err("frame durations must be positive".to_string());
        }
        if self.background_scale <= 0.0 {
            return Err("[background] scale must be positive".to_string());
        }
        let speeds = [
            ("base_speed", self.background_base_speed),
            ("far_factor", self.far_factor),
            ("mid_factor", self.mid_factor),
            ("fore_factor", self.fore_factor),
        ];
        if let Some((key, value)) = speeds.iter().find(|(_, v)| *v < 0.0) {
            return Err(format!(
                "[background] {} must not be negative, got {}",
                key, value
            ));
        }
        Ok(())
    }

    /// Path of a texture file inside the assets directory.
    pub fn asset_path(&self, file: impl AsRef<Path>) -> PathBuf {
        self.assets_dir.join(file)
    }

    /// Initial x of obstacle `index`: just past the right edge, staggered by spacing.
    pub fn obstacle_start_x(&self, index: usize) -> f32 {
        self.window_width as f32 + index as f32 * self.obstacle_spacing
    }

    /// Initial x of the finish line, `finish_margin` past the last obstacle.
    ///
    /// With no obstacles the line sits where the first one would have been.
    pub fn finish_line_x(&self) -> f32 {
        self.obstacle_start_x(self.obstacle_count.saturating_sub(1)) + self.finish_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuning() {
        let c = GameConfig::new();
        assert_eq!(c.window_width, 512);
        assert_eq!(c.window_height, 380);
        assert_eq!(c.obstacle_count, 20);
        assert_eq!(c.gravity, 1000.0);
        assert_eq!(c.jump_velocity, -600.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_finish_line_is_past_last_obstacle() {
        let c = GameConfig::new();
        assert_eq!(c.obstacle_start_x(0), 512.0);
        assert_eq!(c.obstacle_start_x(19), 512.0 + 19.0 * 500.0);
        assert_eq!(c.finish_line_x(), 512.0 + 19.0 * 500.0 + 50.0);
    }

    #[test]
    fn test_finish_line_without_obstacles() {
        let mut c = GameConfig::new();
        c.obstacle_count = 0;
        assert_eq!(c.finish_line_x(), 562.0);
    }

    #[test]
    fn test_load_from_str_overrides_only_present_keys() {
        let mut c = GameConfig::new();
        c.load_from_str(
            "[obstacles]\ncount = 3\nvelocity = -150\n[physics]\ngravity = 900\n[assets]\ndir = art\n",
        )
        .unwrap();
        assert_eq!(c.obstacle_count, 3);
        assert_eq!(c.obstacle_velocity, -150.0);
        assert_eq!(c.gravity, 900.0);
        assert_eq!(c.assets_dir, PathBuf::from("art"));
        assert_eq!(c.jump_velocity, -600.0);
        assert_eq!(c.window_width, 512);
    }

    #[test]
    fn test_load_from_str_rejects_bad_number() {
        let mut c = GameConfig::new();
        let err = c.load_from_str("[obstacles]\ncount = many\n").unwrap_err();
        assert!(err.contains("obstacles"));
    }

    #[test]
    fn test_validate_rejects_airborne_frame_out_of_sheet() {
        let mut c = GameConfig::new();
        c.airborne_frame = 6;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_scroll_speed() {
        let mut c = GameConfig::new();
        c.load_from_str("[background]\nbase_speed = -20\n").unwrap();
        let err = c.validate().unwrap_err();
        assert!(err.contains("base_speed"));

        for factor in ["far_factor", "mid_factor", "fore_factor"] {
            let mut c = GameConfig::new();
            c.load_from_str(&format!("[background]\n{} = -1.5\n", factor))
                .unwrap();
            assert!(c.validate().unwrap_err().contains(factor));
        }

        let mut c = GameConfig::new();
        c.background_base_speed = 0.0;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_window_beyond_i32() {
        let mut c = GameConfig::new();
        c.window_width = 3_000_000_000;
        assert!(c.validate().is_err());

        let mut c = GameConfig::new();
        c.window_height = i32::MAX as u32;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_window_beyond_u32() {
        let mut c = GameConfig::new();
        let err = c
            .load_from_str("[window]\nwidth = 5000000000\n")
            .unwrap_err();
        assert!(err.contains("out of range"));
        assert_eq!(c.window_width, 512);
    }

    #[test]
    fn test_ini_written_values_load_back() {
        let mut c = GameConfig::new();
        c.obstacle_count = 7;
        c.title = "Dash".to_string();
        let text = c.to_ini().writes();

        let mut loaded = GameConfig::new();
        loaded.load_from_str(&text).unwrap();
        assert_eq!(loaded.obstacle_count, 7);
        assert_eq!(loaded.title, "Dash");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut c = GameConfig::with_path("./does/not/exist.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.obstacle_count, 20);
    }
}
