use bevy_ecs::prelude::*;

use crate::components::animationstate::AnimationState;
use crate::components::player::Player;
use crate::events::outcome::OutcomeChangedEvent;
use crate::resources::finishline::FinishLine;
use crate::resources::outcome::GameOutcome;

/// Win the session once the player is past the finish line.
///
/// Runs after collision detection, so a hit on the same frame takes
/// precedence.
pub fn check_finish_line(
    players: Query<&AnimationState, With<Player>>,
    finish_line: Res<FinishLine>,
    mut outcome: ResMut<GameOutcome>,
    mut commands: Commands,
) {
    let crossed = players
        .iter()
        .any(|state| state.position.x > finish_line.x);
    if crossed && outcome.win() {
        commands.trigger(OutcomeChangedEvent {
            outcome: outcome.get(),
        });
    }
}

/// Run condition for gameplay systems.
pub fn outcome_in_progress(outcome: Res<GameOutcome>) -> bool {
    outcome.is_in_progress()
}
