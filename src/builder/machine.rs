//! Builder for constructing interactions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::interaction::state::{boxed_action, EntryContext, StateEntryAction};
use crate::interaction::{Interaction, InteractionError, Transition};

/// Builder for constructing interactions with a fluent API.
///
/// Graph errors (duplicate or unknown names) surface from `build`; invalid
/// transition parameters surface as soon as the transition is added.
///
/// # Example
///
/// ```rust
/// use gazeflow::builder::{InteractionBuilder, TransitionBuilder};
/// use gazeflow::core::Gesture;
///
/// let interaction = InteractionBuilder::new()
///     .state("Idle", || {})
///     .state("Greeting", || {})
///     .transition("Idle", "Greeting", TransitionBuilder::new().gesture(Gesture::Wave))
///     .unwrap()
///     .initial("Idle")
///     .build()
///     .unwrap();
///
/// assert!(!interaction.is_started());
/// ```
#[derive(Default)]
pub struct InteractionBuilder {
    initial: Option<String>,
    states: Vec<(String, Box<dyn StateEntryAction>)>,
    transitions: Vec<(String, String, Transition)>,
}

impl InteractionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a state with a zero-argument entry action.
    pub fn state<F>(mut self, name: impl Into<String>, mut action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.states.push((name.into(), boxed_action(move |_| action())));
        self
    }

    /// Add a state whose entry action may queue further notifications.
    pub fn state_with_context<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut EntryContext<'_>) + 'static,
    {
        self.states.push((name.into(), boxed_action(action)));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        builder: TransitionBuilder,
    ) -> Result<Self, BuildError> {
        let (from, to) = (from.into(), to.into());
        match builder.build() {
            Ok(transition) => {
                self.transitions.push((from, to, transition));
                Ok(self)
            }
            Err(source) => Err(BuildError::InvalidTransition { from, to, source }),
        }
    }

    /// Add a pre-built transition.
    pub fn add_transition(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        transition: Transition,
    ) -> Self {
        self.transitions.push((from.into(), to.into(), transition));
        self
    }

    /// Build the interaction. It still has to be started.
    pub fn build(self) -> Result<Interaction, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut interaction = Interaction::new();
        for (name, action) in self.states {
            interaction.insert_state(name, action)?;
        }
        for (from, to, transition) in self.transitions {
            interaction.add_transition(&from, &to, transition)?;
        }
        if !interaction.contains_state(&initial) {
            return Err(InteractionError::UnknownState { name: initial }.into());
        }
        interaction.set_initial_state(initial);

        Ok(interaction)
    }
}
