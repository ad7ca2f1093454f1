//! Gazeflow: declarative state machines driven by a user's attention
//!
//! Gazeflow sequences behavior in response to where a user stands, where
//! they look, how long they dwell and which gestures they perform. An
//! [`Interaction`] is a graph of named states; each state runs an entry
//! action and owns transitions guarded by spatial and temporal conditions.
//!
//! # Core Concepts
//!
//! - **Core**: pure vector math, gesture tags and range/focus predicates
//! - **Builders**: validated construction of transitions and graphs
//! - **Interaction**: the machine that accumulates dwell time and moves
//!   between states, one transition per satisfied notification
//!
//! The host owns the loop: it calls `notify_attention` every frame with the
//! elapsed time and `notify_gesture` whenever its recognizer completes a
//! gesture.
//!
//! # Example
//!
//! ```rust
//! use gazeflow::builder::{InteractionBuilder, TransitionBuilder};
//! use gazeflow::core::Vector3;
//!
//! let painting = Vector3::new(0.0, 1.6, 4.0);
//! let mut interaction = InteractionBuilder::new()
//!     .state("Wandering", || {})
//!     .state("Describing", || println!("This is a portrait from 1890."))
//!     .transition(
//!         "Wandering",
//!         "Describing",
//!         TransitionBuilder::new()
//!             .point_of_interest(painting)
//!             .max_distance(6.0)
//!             .focus_time(1.5),
//!     )
//!     .unwrap()
//!     .initial("Wandering")
//!     .build()
//!     .unwrap();
//!
//! interaction.start().unwrap();
//!
//! let eye = Vector3::new(0.0, 1.6, 0.0);
//! let look = Vector3::new(0.0, 0.0, 1.0);
//! assert!(!interaction.notify_attention(eye, look, 1.0));
//! assert!(interaction.notify_attention(eye, look, 1.0));
//! assert_eq!(interaction.current_state(), Some("Describing"));
//! ```

pub mod builder;
pub mod core;
pub mod interaction;

// Re-export commonly used types
pub use builder::{BuildError, InteractionBuilder, TransitionBuilder, ValidationError};
pub use crate::core::{Gesture, Vector3};
pub use interaction::{Interaction, InteractionError, Notification, Transition};
