//! Z-index component for render ordering.
//!
//! Background layers carry a [`ZIndex`] so the renderer can draw the far
//! layer first and the foreground last.

use bevy_ecs::prelude::Component;

/// Rendering order hint. Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
