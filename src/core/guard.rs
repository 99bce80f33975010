//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean queries that decide whether a transition may execute.
//! They take no arguments: whatever they inspect is captured by the closure.

use std::fmt;

/// Predicate gating a transition.
///
/// A guard is evaluated after the edge matches and before any hook fires.
/// When it returns `false` the engine stays in the source state and nothing
/// else happens. Guards must be total and must not block.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickfsm::core::Guard;
///
/// let armed = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&armed);
/// let guard = Guard::new(move || flag.get());
///
/// assert!(!guard.check());
/// armed.set(true);
/// assert!(guard.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool>,
}

impl Guard {
    /// Create a guard from a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn guard_reflects_captured_condition() {
        let level = Rc::new(Cell::new(0));
        let observed = Rc::clone(&level);
        let guard = Guard::new(move || observed.get() > 2);

        assert!(!guard.check());
        level.set(3);
        assert!(guard.check());
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|| true);

        assert_eq!(guard.check(), guard.check());
    }
}
