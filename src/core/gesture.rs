//! Discrete gestures reported by an external recognizer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized gesture.
///
/// Recognition happens outside this crate; transitions only compare tags.
/// `None` means "no gesture required" when configuring a transition and
/// "no gesture observed" when notifying one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    #[default]
    None,
    Wave,
    Circle,
    Swipe,
    Tap,
}

impl Gesture {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Wave => "Wave",
            Self::Circle => "Circle",
            Self::Swipe => "Swipe",
            Self::Tap => "Tap",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
