//! Event types and observers.
//!
//! Submodules:
//! - [`outcome`] – the session ended in a win or a loss
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod outcome;
pub mod switchdebug;
