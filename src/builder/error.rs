//! Build errors for transitions and interactions.

use crate::interaction::InteractionError;
use thiserror::Error;

/// A transition parameter constraint that `TransitionBuilder::build` rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Static time ({static_time}s) cannot be combined with a point of interest")]
    StaticTimeWithPointOfInterest { static_time: f32 },

    #[error("Nothing to trigger on. Set a gesture, a point of interest or a static time")]
    NothingToTrigger,

    #[error("Static time must be >= 0 (got {0})")]
    NegativeStaticTime(f32),

    #[error("Focus time must be >= 0 (got {0})")]
    NegativeFocusTime(f32),

    #[error("Minimum distance must be >= 0 (got {0})")]
    NegativeMinimumDistance(f32),

    #[error("Radius must be >= 0 (got {0})")]
    NegativeRadius(f32),

    #[error("Non-focus time must be >= 0 (got {0})")]
    NegativeNonFocusTime(f32),

    #[error("Focus time ({focus_time}s) and non-focus time ({non_focus_time}s) are mutually exclusive")]
    ConflictingDwellModes { focus_time: f32, non_focus_time: f32 },

    #[error("Maximum distance ({max}) must be >= minimum distance ({min})")]
    MaximumBelowMinimum { min: f32, max: f32 },
}

/// Errors that can occur when building an interaction from an `InteractionBuilder`.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Invalid transition from '{from}' to '{to}': {source}")]
    InvalidTransition {
        from: String,
        to: String,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Interaction(#[from] InteractionError),
}
