//! Session outcome resource.
//!
//! A session starts [`Outcome::InProgress`] and ends in exactly one of
//! [`Outcome::Lost`] or [`Outcome::Won`]. Both terminal states are absorbing:
//! once reached, neither [`GameOutcome::lose`] nor [`GameOutcome::win`] can
//! change the outcome again.

use bevy_ecs::prelude::Resource;

/// Discrete outcome of the running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Lost,
    Won,
}

/// Authoritative outcome of the session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOutcome {
    current: Outcome,
}

impl GameOutcome {
    /// Create a new outcome initialized to [`Outcome::InProgress`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Outcome {
        self.current
    }

    pub fn is_in_progress(&self) -> bool {
        self.current == Outcome::InProgress
    }

    /// Mark the session lost. Returns `true` only on the transition itself.
    pub fn lose(&mut self) -> bool {
        self.finish(Outcome::Lost)
    }

    /// Mark the session won. Returns `true` only on the transition itself.
    pub fn win(&mut self) -> bool {
        self.finish(Outcome::Won)
    }

    fn finish(&mut self, outcome: Outcome) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        self.current = outcome;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_progress() {
        assert_eq!(GameOutcome::new().get(), Outcome::InProgress);
    }

    #[test]
    fn test_lost_is_absorbing() {
        let mut o = GameOutcome::new();
        assert!(o.lose());
        assert!(!o.win());
        assert!(!o.lose());
        assert_eq!(o.get(), Outcome::Lost);
    }

    #[test]
    fn test_won_is_absorbing() {
        let mut o = GameOutcome::new();
        assert!(o.win());
        assert!(!o.lose());
        assert_eq!(o.get(), Outcome::Won);
    }
}
