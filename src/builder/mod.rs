//! Builder API for validated transitions and interaction graphs.
//!
//! `TransitionBuilder` is the only way to obtain a `Transition`, so every
//! transition in a running interaction has passed validation.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::{BuildError, ValidationError};
pub use machine::InteractionBuilder;
pub use transition::{TransitionBuilder, TransitionSpec, DEFAULT_RADIUS};
