//! Outcome transition event.
//!
//! [`OutcomeChangedEvent`] is triggered exactly once per session, on the
//! frame the outcome leaves [`Outcome::InProgress`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::outcome::Outcome;
use crate::resources::worldtime::WorldTime;

#[derive(Event, Debug, Clone, Copy)]
pub struct OutcomeChangedEvent {
    pub outcome: Outcome,
}

/// Observer that logs how and when the session ended.
pub fn log_outcome_change(trigger: On<OutcomeChangedEvent>, time: Res<WorldTime>) {
    match trigger.event().outcome {
        Outcome::Lost => log::info!(
            "Game over after {:.2}s ({} frames)",
            time.elapsed,
            time.frame_count
        ),
        Outcome::Won => log::info!(
            "Finish line crossed after {:.2}s ({} frames)",
            time.elapsed,
            time.frame_count
        ),
        Outcome::InProgress => {}
    }
}
