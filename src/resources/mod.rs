//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `finishline` – x coordinate the player must pass to win
//! - `gameconfig` – tuning values loaded from the INI file
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `outcome` – in-progress, lost or won
//! - `screensize` – framebuffer dimensions and floor line
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod finishline;
pub mod gameconfig;
pub mod input;
pub mod outcome;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
