//! Fluent handle for registering permits and hooks against one state.

use crate::core::{Guard, Origin, State, Trigger};
use crate::engine::Registry;

/// Configuration handle bound to one origin state.
///
/// Borrowed from a [`StateMachine`](crate::StateMachine) or a
/// [`StateMachineBuilder`](crate::builder::StateMachineBuilder); every method
/// writes straight into the owner's registry and hands the configurer back
/// for chaining.
///
/// # Example
///
/// ```rust
/// use switchyard::StateMachine;
///
/// let mut machine = StateMachine::new("locked");
/// machine
///     .configure("locked")
///     .permit("coin", "unlocked")
///     .permit_if("kick", "broken", || false)
///     .on_exit(|| println!("unlocking"));
///
/// machine.fire("coin");
/// assert_eq!(*machine.current_state(), "unlocked");
/// ```
pub struct Configurer<'a, S: State, T: Trigger> {
    state: S,
    registry: &'a mut Registry<S, T>,
}

impl<'a, S: State, T: Trigger> Configurer<'a, S, T> {
    pub(crate) fn new(state: S, registry: &'a mut Registry<S, T>) -> Self {
        Self { state, registry }
    }

    /// The state this configurer registers against.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Permit `trigger` to move from the bound state to `destination`.
    pub fn permit(self, trigger: T, destination: S) -> Self {
        self.permit_guarded(trigger, destination, Guard::always())
    }

    /// Permit a transition that only happens when `condition` returns true.
    pub fn permit_if<F>(self, trigger: T, destination: S, condition: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.permit_guarded(trigger, destination, Guard::new(condition))
    }

    /// Permit a transition that runs `effect` before leaving the bound state.
    pub fn permit_with<F>(self, trigger: T, destination: S, effect: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.permit_guarded(trigger, destination, Guard::effect(effect))
    }

    /// Permit a transition with a prebuilt [`Guard`].
    pub fn permit_guarded(self, trigger: T, destination: S, guard: Guard) -> Self {
        self.registry.add_permit(
            Origin::Specific(self.state.clone()),
            trigger,
            destination,
            guard,
        );
        self
    }

    /// Set the action run whenever the bound state is entered.
    /// Replaces any earlier enter action for this state.
    pub fn on_enter<F>(self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.registry
            .set_on_enter(self.state.clone(), Box::new(action));
        self
    }

    /// Set the action run whenever the bound state is exited.
    /// Replaces any earlier exit action for this state.
    pub fn on_exit<F>(self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.registry
            .set_on_exit(self.state.clone(), Box::new(action));
        self
    }
}
