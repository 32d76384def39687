//! Marker traits for state and trigger values.
//!
//! The engine never looks inside a state or trigger. States must be
//! hashable so they can key the hook tables; both must be debuggable so
//! transitions can be logged and reported.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Implemented automatically for every `Clone + Eq + Hash + Debug` type,
/// so plain enums, integers and strings all work.
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<TaskState>();
/// assert_state::<u32>();
/// ```
pub trait State: Clone + Eq + Hash + Debug + 'static {}

impl<S> State for S where S: Clone + Eq + Hash + Debug + 'static {}

/// Trait for triggers, the inputs that may cause a transition.
///
/// Only equality is needed to match a trigger against a permit.
pub trait Trigger: PartialEq + Debug + 'static {}

impl<T> Trigger for T where T: PartialEq + Debug + 'static {}
