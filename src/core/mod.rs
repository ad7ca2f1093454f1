//! Pure building blocks for attention-driven state machines.
//!
//! This module contains everything that carries no runtime state:
//! - Vector math via `Vector3`
//! - Gesture tags reported by an external recognizer
//! - Range and focus predicates over a position and look direction
//! - The state change history kept by an interaction
//!
//! Timers and latches live in the `interaction` module, which calls into
//! these functions on every notification.

mod attention;
mod geometry;
mod gesture;
mod history;

pub use attention::{in_range, is_focusing};
pub use geometry::Vector3;
pub use gesture::Gesture;
pub use history::{StateChange, StateHistory, DEFAULT_HISTORY_CAPACITY};
