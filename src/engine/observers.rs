//! Multi-subscriber notification lists for entered/exited events.

use std::fmt;

/// Handle returned on subscription, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

/// Type alias for observer callbacks.
pub type Observer<S> = Box<dyn FnMut(&S) + Send>;

/// Ordered list of observers, notified in subscription order.
pub struct Observers<S> {
    handlers: Vec<(SubscriptionId, Observer<S>)>,
}

impl<S> Observers<S> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append `observer` under `id`.
    pub fn subscribe(&mut self, id: SubscriptionId, observer: Observer<S>) {
        self.handlers.push((id, observer));
    }

    /// Remove the observer registered under `id`. Returns whether one was
    /// found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    /// Call every observer with `state`, in subscription order.
    pub fn notify(&mut self, state: &S) {
        for (_, observer) in &mut self.handlers {
            observer(state);
        }
    }
}

impl<S> Default for Observers<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands out unique subscription ids for one machine.
#[derive(Debug, Default)]
pub(crate) struct IdSource {
    next: u64,
}

impl IdSource {
    pub(crate) fn next_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        id
    }
}
