//! Named states with entry actions and prioritized outgoing transitions.

use crate::core::{Gesture, Vector3};
use crate::interaction::transition::{Notification, Transition};
use std::collections::VecDeque;
use std::fmt;

/// Index of a state inside its interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle given to entry actions while they run.
///
/// Notifications queued here are processed after the action returns, in
/// the order they were queued, each one resolving fully before the next.
pub struct EntryContext<'a> {
    state: &'a str,
    queue: &'a mut VecDeque<Notification>,
}

impl<'a> EntryContext<'a> {
    pub(crate) fn new(state: &'a str, queue: &'a mut VecDeque<Notification>) -> Self {
        Self { state, queue }
    }

    /// Name of the state being entered.
    pub fn state_name(&self) -> &str {
        self.state
    }

    pub fn notify_attention(&mut self, origin: Vector3, direction: Vector3, elapsed: f32) {
        self.queue.push_back(Notification::Attention {
            origin,
            direction,
            elapsed,
        });
    }

    pub fn notify_gesture(&mut self, gesture: Gesture, origin: Vector3, direction: Vector3) {
        self.queue.push_back(Notification::Gesture {
            gesture,
            origin,
            direction,
        });
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Side effect run whenever a state is entered.
pub trait StateEntryAction {
    fn on_enter(&mut self, ctx: &mut EntryContext<'_>);
}

impl<F> StateEntryAction for F
where
    F: FnMut(&mut EntryContext<'_>),
{
    fn on_enter(&mut self, ctx: &mut EntryContext<'_>) {
        self(ctx)
    }
}

pub(crate) fn boxed_action<F>(action: F) -> Box<dyn StateEntryAction>
where
    F: FnMut(&mut EntryContext<'_>) + 'static,
{
    Box::new(action)
}

/// A node of the interaction graph.
pub struct State {
    name: String,
    action: Box<dyn StateEntryAction>,
    transitions: Vec<(Transition, StateId)>,
}

impl State {
    pub(crate) fn new(name: String, action: Box<dyn StateEntryAction>) -> Self {
        Self {
            name,
            action,
            transitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing transitions in priority order.
    pub fn transitions(&self) -> impl Iterator<Item = (&Transition, StateId)> {
        self.transitions.iter().map(|(t, target)| (t, *target))
    }

    pub(crate) fn add_transition(&mut self, transition: Transition, target: StateId) {
        self.transitions.push((transition, target));
    }

    /// Target of the first transition satisfied by `notification`.
    ///
    /// Transitions after the first match are not evaluated.
    pub(crate) fn notify(&mut self, notification: &Notification) -> Option<StateId> {
        self.transitions
            .iter_mut()
            .find_map(|(transition, target)| transition.notify(notification).then_some(*target))
    }

    pub(crate) fn reset(&mut self) {
        for (transition, _) in &mut self.transitions {
            transition.reset();
        }
    }

    pub(crate) fn enter(&mut self, queue: &mut VecDeque<Notification>) {
        let mut ctx = EntryContext::new(&self.name, queue);
        self.action.on_enter(&mut ctx);
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}
