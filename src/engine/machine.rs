//! State machine that fires triggers against the permit registry.

use crate::builder::Configurer;
use crate::core::{Guard, Origin, PermitInfo, State, Trigger};
use crate::engine::error::FireError;
use crate::engine::{IdSource, Observers, Registry, SubscriptionId};
use tracing::{debug, trace};

/// A state change applied by a successful fire.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Transition<S> {
    pub from: S,
    pub to: S,
}

/// What a single fire did.
enum Outcome<S> {
    NoPermit,
    /// Index of the permit whose guard vetoed.
    Vetoed(usize),
    Transitioned { from: S },
}

/// Trigger-driven state machine.
///
/// Holds exactly one current state, the permit registry, the enter/exit
/// hook tables and the entered/exited observer lists.
///
/// # Example
///
/// ```rust
/// use switchyard::StateMachine;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Phase { Idle, Running, Done }
///
/// #[derive(PartialEq, Debug)]
/// enum Input { Start, Finish }
///
/// let mut machine = StateMachine::new(Phase::Idle);
/// machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);
/// machine.configure(Phase::Running).permit(Input::Finish, Phase::Done);
///
/// machine.fire(Input::Start);
/// assert_eq!(machine.current_state(), &Phase::Running);
/// machine.fire(Input::Finish);
/// machine.fire(Input::Start);
/// assert_eq!(machine.current_state(), &Phase::Done);
/// ```
pub struct StateMachine<S: State, T: Trigger> {
    current: S,
    registry: Registry<S, T>,
    entered: Observers<S>,
    exited: Observers<S>,
    ids: IdSource,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Create a machine in `initial` with nothing registered.
    ///
    /// No hooks exist yet, so nothing runs here. Use
    /// [`StateMachineBuilder`](crate::builder::StateMachineBuilder) to have
    /// the initial state's enter hook run on construction.
    pub fn new(initial: S) -> Self {
        Self::from_parts(
            initial,
            Registry::new(),
            Observers::new(),
            Observers::new(),
            IdSource::default(),
        )
    }

    pub(crate) fn from_parts(
        initial: S,
        registry: Registry<S, T>,
        entered: Observers<S>,
        exited: Observers<S>,
        ids: IdSource,
    ) -> Self {
        Self {
            current: initial,
            registry,
            entered,
            exited,
            ids,
        }
    }

    /// Get current state
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Start configuring permits and hooks whose origin is `state`.
    pub fn configure(&mut self, state: S) -> Configurer<'_, S, T> {
        Configurer::new(state, &mut self.registry)
    }

    /// Permit `trigger` to move to `destination` from any state.
    pub fn permit_from_any(&mut self, trigger: T, destination: S) {
        self.registry
            .add_permit(Origin::Any, trigger, destination, Guard::always());
    }

    /// Like [`permit_from_any`](Self::permit_from_any), vetoed when
    /// `condition` returns false.
    pub fn permit_from_any_if<F>(&mut self, trigger: T, destination: S, condition: F)
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.registry
            .add_permit(Origin::Any, trigger, destination, Guard::new(condition));
    }

    /// Like [`permit_from_any`](Self::permit_from_any), running `effect`
    /// before the transition.
    pub fn permit_from_any_with<F>(&mut self, trigger: T, destination: S, effect: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.registry
            .add_permit(Origin::Any, trigger, destination, Guard::effect(effect));
    }

    /// Subscribe to states entered by a successful fire.
    pub fn on_entered<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = self.ids.next_id();
        self.entered.subscribe(id, Box::new(observer));
        id
    }

    /// Subscribe to states exited by a successful fire.
    pub fn on_exited<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = self.ids.next_id();
        self.exited.subscribe(id, Box::new(observer));
        id
    }

    /// Remove an entered or exited observer. Returns whether it was found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.entered.unsubscribe(id) || self.exited.unsubscribe(id)
    }

    /// Fire `trigger`.
    ///
    /// The first permit matching the trigger and current state is selected.
    /// If its guard allows, the exit hook and exited observers run for the
    /// current state, the state changes, then the enter hook and entered
    /// observers run for the new one. No match or a vetoing guard leaves
    /// everything untouched.
    pub fn fire(&mut self, trigger: T) {
        self.step(&trigger);
    }

    /// Fire `trigger`, reporting whether the state changed.
    pub fn try_fire(&mut self, trigger: T) -> Result<Transition<S>, FireError> {
        match self.step(&trigger) {
            Outcome::Transitioned { from } => Ok(Transition {
                from,
                to: self.current.clone(),
            }),
            Outcome::NoPermit => Err(FireError::NoPermit {
                state: format!("{:?}", self.current),
                trigger: format!("{trigger:?}"),
            }),
            Outcome::Vetoed(index) => Err(FireError::GuardRejected {
                state: format!("{:?}", self.current),
                trigger: format!("{trigger:?}"),
                destination: format!("{:?}", self.registry.permits()[index].destination()),
            }),
        }
    }

    fn step(&mut self, trigger: &T) -> Outcome<S> {
        let Some(index) = self.registry.find(&self.current, trigger) else {
            trace!(state = ?self.current, ?trigger, "no permit matched");
            return Outcome::NoPermit;
        };

        let permit = self.registry.permit_mut(index);
        if !permit.guard_mut().check() {
            let destination = permit.destination();
            debug!(state = ?self.current, ?trigger, ?destination, "guard rejected transition");
            return Outcome::Vetoed(index);
        }
        let destination = permit.destination().clone();

        self.registry.run_on_exit(&self.current);
        self.exited.notify(&self.current);

        let from = std::mem::replace(&mut self.current, destination);

        self.registry.run_on_enter(&self.current);
        self.entered.notify(&self.current);

        debug!(?from, to = ?self.current, ?trigger, "transitioned");
        Outcome::Transitioned { from }
    }

    /// Check if some permit matches `trigger` from the current state.
    /// Guards are not evaluated.
    pub fn can_fire(&self, trigger: &T) -> bool {
        self.registry.find(&self.current, trigger).is_some()
    }

    /// Triggers with a permit from the current state, in registration order.
    pub fn permitted_triggers(&self) -> Vec<&T> {
        let mut triggers: Vec<&T> = Vec::new();
        for permit in self.registry.permits() {
            if permit.origin().admits(&self.current) && !triggers.contains(&permit.trigger()) {
                triggers.push(permit.trigger());
            }
        }
        triggers
    }

    /// Read-only view of every registered permit, in registration order.
    pub fn permits(&self) -> impl Iterator<Item = PermitInfo<'_, S, T>> + '_ {
        self.registry.permits().iter().map(PermitInfo::from)
    }

    pub(crate) fn run_initial_enter_hook(&mut self) {
        self.registry.run_on_enter(&self.current);
    }
}

impl<S: State + Default, T: Trigger> Default for StateMachine<S, T> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
