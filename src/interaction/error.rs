//! Errors raised while assembling or starting an interaction.

use thiserror::Error;

/// Misuse of the interaction graph API.
///
/// All of these are configuration errors. Once an interaction has started,
/// notifications cannot fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error("State '{name}' already exists")]
    DuplicateState { name: String },

    #[error("State name must not be empty")]
    InvalidName,

    #[error("Unknown state '{name}'")]
    UnknownState { name: String },

    #[error("Initial state not specified. Call .set_initial_state(name) before .start()")]
    NoInitialState,
}
