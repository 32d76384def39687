//! The transition engine.
//!
//! # Key Concepts
//!
//! - **Registry**: ordered permits plus per-state enter/exit hooks
//! - **State Machine**: holds the current state and fires triggers
//! - **Observers**: entered/exited subscribers notified after the hooks
//!
//! For one transition from `S1` to `S2` the call order is always:
//! exit hook of `S1`, exited observers with `S1`, state change, enter hook
//! of `S2`, entered observers with `S2`.

mod error;
mod machine;
mod observers;
mod registry;

pub use error::FireError;
pub use machine::{StateMachine, Transition};
pub(crate) use observers::{IdSource, Observers};
pub use observers::{Observer, SubscriptionId};
pub(crate) use registry::Registry;
pub use registry::Action;
