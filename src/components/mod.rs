//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animationstate`] – sprite-sheet frame selection, position and timing
//! - [`obstacle`] – marker for the fixed set of scrolling obstacles
//! - [`player`] – marker plus vertical velocity for the jumping player
//! - [`scrolllayer`] – repeating parallax background layer
//! - [`zindex`] – rendering order hint for background layers

pub mod animationstate;
pub mod obstacle;
pub mod player;
pub mod scrolllayer;
pub mod zindex;
