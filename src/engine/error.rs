//! Outcomes of a fire that did not change state.

use thiserror::Error;

/// Why `try_fire` left the machine where it was.
///
/// `fire` treats both cases as silent no-ops; `try_fire` reports them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FireError {
    #[error("No permit for trigger '{trigger}' from state '{state}'")]
    NoPermit { state: String, trigger: String },

    #[error("Guard rejected trigger '{trigger}' from '{state}' to '{destination}'")]
    GuardRejected {
        state: String,
        trigger: String,
        destination: String,
    },
}
