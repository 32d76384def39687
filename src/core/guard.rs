//! Guards deciding, at fire time, whether a matched permit may proceed.
//!
//! Unlike a pure predicate, a guard may carry side effects: a permit
//! registered with an effect is stored as a guard that runs the effect and
//! always allows the transition.

use std::fmt;

/// Fire-time condition attached to every permit.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Guard;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let mut open = Guard::always();
/// assert!(open.check());
///
/// let mut closed = Guard::new(|| false);
/// assert!(!closed.check());
///
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let mut effect = Guard::effect(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// assert!(effect.check());
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
/// ```
pub struct Guard {
    condition: Box<dyn FnMut() -> bool + Send>,
}

impl Guard {
    /// Create a guard from a condition. Returning `false` vetoes the
    /// transition.
    pub fn new<F>(condition: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        Guard {
            condition: Box::new(condition),
        }
    }

    /// Guard that never vetoes.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Guard that runs `effect` and then allows the transition.
    pub fn effect<F>(mut effect: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::new(move || {
            effect();
            true
        })
    }

    /// Evaluate the guard. Side effects of the condition run every call.
    pub fn check(&mut self) -> bool {
        (self.condition)()
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::always()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
