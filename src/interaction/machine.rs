//! The interaction state machine driver.

use crate::core::{Gesture, StateChange, StateHistory, Vector3};
use crate::interaction::error::InteractionError;
use crate::interaction::state::{boxed_action, EntryContext, State, StateEntryAction, StateId};
use crate::interaction::transition::{Notification, Transition};
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

/// A state machine advanced by attention ticks and gesture events.
///
/// States are stored in an arena and addressed by [`StateId`]; names are
/// only used while assembling the graph and for lookups. Each notification
/// is tested against the current state's transitions in insertion order and
/// the first one satisfied moves the machine: the old state's transitions
/// are reset, the target becomes current and its entry action runs.
///
/// # Example
///
/// ```rust
/// use gazeflow::builder::TransitionBuilder;
/// use gazeflow::core::{Gesture, Vector3};
/// use gazeflow::interaction::Interaction;
///
/// let mut interaction = Interaction::new();
/// interaction
///     .add_state("Idle", || {})
///     .unwrap()
///     .add_state("Greeting", || println!("hello!"))
///     .unwrap();
///
/// let wave = TransitionBuilder::new().gesture(Gesture::Wave).build().unwrap();
/// interaction.add_transition("Idle", "Greeting", wave).unwrap();
/// interaction.set_initial_state("Idle");
/// interaction.start().unwrap();
///
/// let forward = Vector3::new(0.0, 0.0, 1.0);
/// assert!(interaction.notify_gesture(Gesture::Wave, Vector3::ZERO, forward));
/// assert_eq!(interaction.current_state(), Some("Greeting"));
/// ```
#[derive(Debug, Default)]
pub struct Interaction {
    states: Vec<State>,
    ids: HashMap<String, StateId>,
    initial: Option<String>,
    current: Option<StateId>,
    pending: VecDeque<Notification>,
    history: StateHistory,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state whose entry action takes no arguments.
    pub fn add_state<F>(
        &mut self,
        name: impl Into<String>,
        mut action: F,
    ) -> Result<&mut Self, InteractionError>
    where
        F: FnMut() + 'static,
    {
        self.insert_state(name.into(), boxed_action(move |_| action()))
    }

    /// Add a state whose entry action may queue further notifications.
    pub fn add_state_with_context<F>(
        &mut self,
        name: impl Into<String>,
        action: F,
    ) -> Result<&mut Self, InteractionError>
    where
        F: FnMut(&mut EntryContext<'_>) + 'static,
    {
        self.insert_state(name.into(), boxed_action(action))
    }

    pub(crate) fn insert_state(
        &mut self,
        name: String,
        action: Box<dyn StateEntryAction>,
    ) -> Result<&mut Self, InteractionError> {
        if name.is_empty() {
            return Err(InteractionError::InvalidName);
        }
        if self.ids.contains_key(&name) {
            return Err(InteractionError::DuplicateState { name });
        }

        let id = StateId(self.states.len());
        self.ids.insert(name.clone(), id);
        self.states.push(State::new(name, action));
        Ok(self)
    }

    /// Attach `transition` to `from`, leading to `to`.
    ///
    /// Transitions added earlier take priority when several are satisfied
    /// by the same notification.
    pub fn add_transition(
        &mut self,
        from: &str,
        to: &str,
        transition: Transition,
    ) -> Result<&mut Self, InteractionError> {
        let from = self.lookup(from)?;
        let to = self.lookup(to)?;
        self.states[from.0].add_transition(transition, to);
        Ok(self)
    }

    /// Record the state `start` enters. Validated by `start`.
    pub fn set_initial_state(&mut self, name: impl Into<String>) -> &mut Self {
        self.initial = Some(name.into());
        self
    }

    /// Enter the initial state and run its entry action.
    ///
    /// Calling this on a running interaction resets the current state's
    /// transitions and re-enters the initial state.
    pub fn start(&mut self) -> Result<(), InteractionError> {
        let name = self
            .initial
            .as_deref()
            .ok_or(InteractionError::NoInitialState)?;
        let id = self.lookup(name)?;

        if let Some(current) = self.current {
            self.states[current.0].reset();
        }
        self.current = Some(id);
        debug!(state = self.states[id.0].name(), "interaction started");

        self.states[id.0].enter(&mut self.pending);
        self.drain_pending();
        Ok(())
    }

    /// Deliver a continuous attention tick.
    ///
    /// Returns whether this tick changed the current state. Notifications
    /// queued by entry actions are processed before returning.
    pub fn notify_attention(&mut self, origin: Vector3, direction: Vector3, elapsed: f32) -> bool {
        self.notify(Notification::Attention {
            origin,
            direction,
            elapsed,
        })
    }

    /// Deliver a completed gesture.
    pub fn notify_gesture(&mut self, gesture: Gesture, origin: Vector3, direction: Vector3) -> bool {
        self.notify(Notification::Gesture {
            gesture,
            origin,
            direction,
        })
    }

    pub fn notify(&mut self, notification: Notification) -> bool {
        if self.current.is_none() {
            debug!("notification ignored, interaction not started");
            return false;
        }

        let changed = self.step(&notification);
        self.drain_pending();
        changed
    }

    fn step(&mut self, notification: &Notification) -> bool {
        let Some(from) = self.current else {
            return false;
        };
        let Some(to) = self.states[from.0].notify(notification) else {
            return false;
        };

        self.states[from.0].reset();
        self.current = Some(to);

        let change = StateChange {
            from: self.states[from.0].name().to_string(),
            to: self.states[to.0].name().to_string(),
            timestamp: Utc::now(),
        };
        debug!(from = %change.from, to = %change.to, "state changed");
        self.history.record(change);

        self.states[to.0].enter(&mut self.pending);
        true
    }

    fn drain_pending(&mut self) {
        while let Some(notification) = self.pending.pop_front() {
            trace!(?notification, "processing queued notification");
            self.step(&notification);
        }
    }

    fn lookup(&self, name: &str) -> Result<StateId, InteractionError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| InteractionError::UnknownState {
                name: name.to_string(),
            })
    }

    /// Name of the current state, `None` before `start`.
    pub fn current_state(&self) -> Option<&str> {
        self.current.map(|id| self.states[id.0].name())
    }

    pub fn initial_state(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// State names in insertion order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(State::name)
    }

    pub fn state(&self, name: &str) -> Option<&State> {
        self.ids.get(name).map(|id| &self.states[id.0])
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }
}
