//! Switchyard: a trigger-driven finite state machine.
//!
//! Callers register which triggers may move the machine from one state to
//! another (permits), optionally guarded by a condition or carrying a side
//! effect, plus enter/exit hooks per state. Firing a trigger applies the
//! first matching permit.
//!
//! # Core Concepts
//!
//! - **Permits**: ordered transition rules; the first match wins
//! - **Guards**: fire-time conditions that may veto a transition
//! - **Hooks**: one enter and one exit action per state
//! - **Observers**: subscribers told about every entered/exited state
//!
//! # Example
//!
//! ```rust
//! use switchyard::StateMachine;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Phase { Idle, Running, Done }
//!
//! #[derive(PartialEq, Debug)]
//! enum Input { Start, Finish, Reset }
//!
//! let mut machine = StateMachine::new(Phase::Idle);
//! machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);
//! machine.configure(Phase::Running).permit(Input::Finish, Phase::Done);
//! machine.permit_from_any(Input::Reset, Phase::Idle);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&seen);
//! machine.on_entered(move |state: &Phase| log.lock().unwrap().push(state.clone()));
//!
//! machine.fire(Input::Start);
//! machine.fire(Input::Finish);
//! machine.fire(Input::Reset);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![Phase::Running, Phase::Done, Phase::Idle]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, Configurer, StateMachineBuilder};
pub use crate::core::{Guard, Origin, State, Trigger};
pub use crate::engine::{FireError, StateMachine, SubscriptionId, Transition};
