//! Builder for constructing state machines.

use crate::builder::configurer::Configurer;
use crate::builder::error::BuildError;
use crate::core::{Guard, Origin, State, Trigger};
use crate::engine::{IdSource, Observers, Registry, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// Permits and hooks are collected before the machine exists, so the
/// initial state's enter hook runs once when [`build`](Self::build) is
/// called. Observers subscribed here are never told about the initial
/// state; they see the first successful fire.
pub struct StateMachineBuilder<S: State, T: Trigger> {
    initial: Option<S>,
    registry: Registry<S, T>,
    entered: Observers<S>,
    exited: Observers<S>,
    ids: IdSource,
}

impl<S: State, T: Trigger> StateMachineBuilder<S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            registry: Registry::new(),
            entered: Observers::new(),
            exited: Observers::new(),
            ids: IdSource::default(),
        }
    }

    /// Set the initial state (required unless using `build_or_default`).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register permits and hooks for `state`.
    pub fn configure<F>(mut self, state: S, configure: F) -> Self
    where
        F: FnOnce(Configurer<'_, S, T>) -> Configurer<'_, S, T>,
    {
        configure(Configurer::new(state, &mut self.registry));
        self
    }

    /// Permit `trigger` to move to `destination` from any state.
    pub fn permit_from_any(self, trigger: T, destination: S) -> Self {
        self.permit_from_any_guarded(trigger, destination, Guard::always())
    }

    /// Any-origin permit vetoed when `condition` returns false.
    pub fn permit_from_any_if<F>(self, trigger: T, destination: S, condition: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.permit_from_any_guarded(trigger, destination, Guard::new(condition))
    }

    /// Any-origin permit running `effect` before the transition.
    pub fn permit_from_any_with<F>(self, trigger: T, destination: S, effect: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.permit_from_any_guarded(trigger, destination, Guard::effect(effect))
    }

    fn permit_from_any_guarded(mut self, trigger: T, destination: S, guard: Guard) -> Self {
        self.registry
            .add_permit(Origin::Any, trigger, destination, guard);
        self
    }

    /// Subscribe to states entered by a successful fire.
    pub fn on_entered<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = self.ids.next_id();
        self.entered.subscribe(id, Box::new(observer));
        self
    }

    /// Subscribe to states exited by a successful fire.
    pub fn on_exited<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = self.ids.next_id();
        self.exited.subscribe(id, Box::new(observer));
        self
    }

    /// Build the state machine, running the initial state's enter hook.
    /// Returns an error if no initial state was set.
    pub fn build(mut self) -> Result<StateMachine<S, T>, BuildError> {
        let initial = self.initial.take().ok_or(BuildError::MissingInitialState)?;
        Ok(self.assemble(initial))
    }

    fn assemble(self, initial: S) -> StateMachine<S, T> {
        let mut machine =
            StateMachine::from_parts(initial, self.registry, self.entered, self.exited, self.ids);
        machine.run_initial_enter_hook();
        machine
    }
}

impl<S: State + Default, T: Trigger> StateMachineBuilder<S, T> {
    /// Build the state machine, starting in `S::default()` when no initial
    /// state was set.
    pub fn build_or_default(mut self) -> StateMachine<S, T> {
        let initial = self.initial.take().unwrap_or_default();
        self.assemble(initial)
    }
}

impl<S: State, T: Trigger> Default for StateMachineBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
