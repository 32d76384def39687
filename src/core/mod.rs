//! Core state machine types.
//!
//! This module contains the value types the engine is built from:
//! - State and trigger bounds via the `State` and `Trigger` traits
//! - Guards evaluated when a permit is fired
//! - Permits and their origins

mod guard;
mod permit;
mod state;

pub use guard::Guard;
pub use permit::{Origin, Permit, PermitInfo};
pub use state::{State, Trigger};
