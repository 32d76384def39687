//! Builder API for ergonomic state machine construction.
//!
//! [`Configurer`] registers permits and hooks against one state of an
//! existing machine; [`StateMachineBuilder`] collects the same
//! configuration before the machine exists.

pub mod configurer;
pub mod error;
pub mod machine;
pub mod macros;

pub use configurer::Configurer;
pub use error::BuildError;
pub use machine::StateMachineBuilder;
