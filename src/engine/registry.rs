//! Permit registry and per-state lifecycle hook tables.

use crate::core::{Guard, Origin, Permit, State, Trigger};
use std::collections::HashMap;
use tracing::trace;

/// Type alias for enter/exit hook actions.
pub type Action = Box<dyn FnMut() + Send>;

/// Everything registered during configuration: the ordered permit list and
/// the enter/exit hook tables.
pub struct Registry<S: State, T: Trigger> {
    permits: Vec<Permit<S, T>>,
    on_enter: HashMap<S, Action>,
    on_exit: HashMap<S, Action>,
}

impl<S: State, T: Trigger> Registry<S, T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            permits: Vec::new(),
            on_enter: HashMap::new(),
            on_exit: HashMap::new(),
        }
    }

    /// Append a permit. Duplicates and conflicts are accepted; the first
    /// registered match wins at fire time.
    pub fn add_permit(&mut self, origin: Origin<S>, trigger: T, destination: S, guard: Guard) {
        trace!(?origin, ?trigger, ?destination, "permit registered");
        self.permits
            .push(Permit::new(origin, trigger, destination, guard));
    }

    /// Set the enter hook for `state`, replacing any previous one.
    pub fn set_on_enter(&mut self, state: S, action: Action) {
        self.on_enter.insert(state, action);
    }

    /// Set the exit hook for `state`, replacing any previous one.
    pub fn set_on_exit(&mut self, state: S, action: Action) {
        self.on_exit.insert(state, action);
    }

    /// Registered permits, in registration order.
    pub fn permits(&self) -> &[Permit<S, T>] {
        &self.permits
    }

    /// Index of the first permit matching `trigger` from `state`.
    pub fn find(&self, state: &S, trigger: &T) -> Option<usize> {
        self.permits.iter().position(|p| p.matches(state, trigger))
    }

    pub(crate) fn permit_mut(&mut self, index: usize) -> &mut Permit<S, T> {
        &mut self.permits[index]
    }

    /// Run the enter hook for `state`, if one is registered.
    pub fn run_on_enter(&mut self, state: &S) {
        if let Some(action) = self.on_enter.get_mut(state) {
            action();
        }
    }

    /// Run the exit hook for `state`, if one is registered.
    pub fn run_on_exit(&mut self, state: &S) {
        if let Some(action) = self.on_exit.get_mut(state) {
            action();
        }
    }
}

impl<S: State, T: Trigger> Default for Registry<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
