//! Permits: the transition rules held by the registry.

use super::guard::Guard;
use super::state::{State, Trigger};

/// Where a permit may be fired from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Origin<S> {
    /// Matches whatever the current state is.
    Any,
    /// Matches only when the current state equals this value.
    Specific(S),
}

impl<S: State> Origin<S> {
    /// Check if a machine sitting in `state` satisfies this origin.
    pub fn admits(&self, state: &S) -> bool {
        match self {
            Origin::Any => true,
            Origin::Specific(origin) => origin == state,
        }
    }

    /// Check if this is the any-origin tag.
    pub fn is_any(&self) -> bool {
        matches!(self, Origin::Any)
    }
}

impl<S> From<S> for Origin<S> {
    fn from(state: S) -> Self {
        Origin::Specific(state)
    }
}

/// A registered transition rule.
///
/// Permits are immutable once added; only the guard's captured state may
/// change as it runs.
#[derive(Debug)]
pub struct Permit<S, T> {
    origin: Origin<S>,
    trigger: T,
    destination: S,
    guard: Guard,
}

impl<S: State, T: Trigger> Permit<S, T> {
    /// Create a permit from its parts.
    pub fn new(origin: Origin<S>, trigger: T, destination: S, guard: Guard) -> Self {
        Self {
            origin,
            trigger,
            destination,
            guard,
        }
    }

    /// Check if this permit applies to `trigger` fired from `state`.
    /// The guard is not consulted.
    pub fn matches(&self, state: &S, trigger: &T) -> bool {
        self.trigger == *trigger && self.origin.admits(state)
    }

    /// State(s) the permit may be fired from.
    pub fn origin(&self) -> &Origin<S> {
        &self.origin
    }

    /// Trigger the permit responds to.
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// State entered when the permit is applied.
    pub fn destination(&self) -> &S {
        &self.destination
    }

    pub(crate) fn guard_mut(&mut self) -> &mut Guard {
        &mut self.guard
    }
}

/// Read-only view of a registered permit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PermitInfo<'a, S, T> {
    pub origin: &'a Origin<S>,
    pub trigger: &'a T,
    pub destination: &'a S,
}

impl<'a, S: State, T: Trigger> From<&'a Permit<S, T>> for PermitInfo<'a, S, T> {
    fn from(permit: &'a Permit<S, T>) -> Self {
        PermitInfo {
            origin: &permit.origin,
            trigger: &permit.trigger,
            destination: &permit.destination,
        }
    }
}
