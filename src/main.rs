//! Dapper Dasher main entry point.
//!
//! A small side-scrolling jumper written in Rust using:
//! - **raylib** for windowing, textures, input and drawing
//! - **bevy_ecs** for the world and the per-frame schedule
//!
//! The player stands at the centre of the screen and jumps over a row of
//! nebulae drifting in from the right. Touching one ends the session; passing
//! the finish line behind the last one wins it.
//!
//! # Main Loop
//!
//! 1. Load configuration, open the window, load textures
//! 2. Build the ECS world and spawn the actors
//! 3. Every frame: update time and input, run the update schedule, render
//! 4. Textures and the window are released when they go out of scope
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use dapperdasher::game;
use dapperdasher::resources::debugmode::DebugMode;
use dapperdasher::resources::gameconfig::GameConfig;
use dapperdasher::resources::outcome::GameOutcome;
use dapperdasher::systems::build_update_schedule;
use dapperdasher::systems::input::update_input_state;
use dapperdasher::systems::render::render_frame;
use dapperdasher::systems::time::update_world_time;

/// Dapper Dasher: jump the nebulae, reach the finish line.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Directory holding the textures. Overrides `[assets] dir`.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Write the resolved configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(dir) = cli.assets {
        config.assets_dir = dir;
    }
    config.validate()?;

    if cli.print_config {
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        println!("{}", json);
        return Ok(());
    }
    if cli.write_config {
        return config.save_to_file();
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);

    // An early return from here on drops the textures, then the window.
    let textures = game::load_textures(&mut rl, &thread, &config)?;
    let sheets = game::SheetSizes::from_store(&textures)?;

    // --------------- ECS world + resources ---------------
    let mut world = game::new_world(config);
    game::spawn_actors(&mut world, &sheets)?;
    world.insert_non_send_resource(textures);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    let mut update = build_update_schedule();
    update
        .initialize(&mut world)
        .map_err(|e| format!("Failed to initialize schedule: {}", e))?;

    // --------------- Main loop ---------------
    info!("Dapper Dasher started");
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);
        update_input_state(&mut world, &rl);

        update.run(&mut world);
        world.clear_trackers();

        render_frame(&mut world, &mut rl, &thread);
    }

    info!(
        "Window closed, outcome: {:?}",
        world.resource::<GameOutcome>().get()
    );
    Ok(())
}
