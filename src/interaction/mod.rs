//! Stateful layer: transition timers, states and the interaction driver.
//!
//! # Key Concepts
//!
//! - **Transitions**: validated guards that accumulate dwell, focus and
//!   non-focus time across notifications
//! - **States**: named nodes holding an entry action and prioritized
//!   outgoing transitions
//! - **Interaction**: the machine that routes notifications to the current
//!   state and switches states when a transition fires
//!
//! Everything here is driven synchronously by its owner. There is no
//! internal clock; elapsed time arrives with each attention tick.

mod error;
mod machine;
pub(crate) mod state;
mod transition;

pub use error::InteractionError;
pub use machine::Interaction;
pub use state::{EntryContext, State, StateEntryAction, StateId};
pub use transition::{Notification, Transition, TransitionStatus};
