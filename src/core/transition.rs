//! Edges between states.
//!
//! [`Transition`] is fired by an event identifier, [`TimedTransition`] by the
//! time spent in its source state. Both share the [`Edge`] shape and differ
//! only in their trigger.

use super::guard::Guard;
use super::state::{Hook, StateId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-defined event identifier. Uniqueness is not checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub i32);

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        EventId(id)
    }
}

/// Time a machine must spend in the source state before a timed edge fires.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Interval(pub u64);

impl Interval {
    pub fn as_millis(self) -> u64 {
        self.0
    }
}

impl From<u64> for Interval {
    fn from(ms: u64) -> Self {
        Interval(ms)
    }
}

/// Identity of an edge, assigned when it is added to a machine.
///
/// Event and timed edges draw from one sequence per machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An edge between two states, fired by a trigger of type `T`.
///
/// Endpoints are optional so that a default edge can be created early and
/// filled in later with [`Edge::setup`]. An edge with no destination never
/// fires.
pub struct Edge<T> {
    pub(crate) id: Option<EdgeId>,
    pub(crate) from: Option<StateId>,
    pub(crate) to: Option<StateId>,
    pub(crate) trigger: T,
    pub(crate) name: String,
    pub(crate) guard: Option<Guard>,
    pub(crate) action: Option<Hook>,
}

/// Event-triggered edge.
pub type Transition = Edge<EventId>;

/// Duration-triggered edge.
pub type TimedTransition = Edge<Interval>;

impl<T: Default> Default for Edge<T> {
    fn default() -> Self {
        Self {
            id: None,
            from: None,
            to: None,
            trigger: T::default(),
            name: String::new(),
            guard: None,
            action: None,
        }
    }
}

impl<T> Edge<T> {
    /// Create an unnamed, unguarded edge.
    pub fn new(from: StateId, to: StateId, trigger: impl Into<T>) -> Self {
        Self {
            id: None,
            from: Some(from),
            to: Some(to),
            trigger: trigger.into(),
            name: String::new(),
            guard: None,
            action: None,
        }
    }

    /// Overwrite the whole configuration of this edge.
    ///
    /// Calling it again replaces everything set before, including name,
    /// guard and action. The identity is kept.
    pub fn setup(
        &mut self,
        from: StateId,
        to: StateId,
        trigger: impl Into<T>,
        action: Option<Hook>,
        name: impl Into<String>,
        guard: Option<Guard>,
    ) {
        self.from = Some(from);
        self.to = Some(to);
        self.trigger = trigger.into();
        self.action = action;
        self.name = name.into();
        self.guard = guard;
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a hook fired between the source's exit and the destination's
    /// entry.
    pub fn with_action<F: FnMut() + 'static>(mut self, action: F) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn with_guard<F: Fn() -> bool + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Guard::new(guard));
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_action<F: FnMut() + 'static>(&mut self, action: F) {
        self.action = Some(Box::new(action));
    }

    pub fn set_guard(&mut self, guard: Option<Guard>) {
        self.guard = guard;
    }

    /// Identity assigned by the owning machine, `None` until added.
    pub fn id(&self) -> Option<EdgeId> {
        self.id
    }

    pub fn from(&self) -> Option<StateId> {
        self.from
    }

    pub fn to(&self) -> Option<StateId> {
        self.to
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub(crate) fn leaves(&self, state: Option<StateId>) -> bool {
        state.is_some() && self.from == state
    }

    /// Destination, if the edge has a known one and its guard admits the move.
    ///
    /// The guard is not consulted when the destination is missing.
    pub(crate) fn admit(&self, known: impl Fn(StateId) -> bool) -> Option<StateId> {
        let to = self.to.filter(|&to| known(to))?;
        match &self.guard {
            Some(guard) if !guard.check() => None,
            _ => Some(to),
        }
    }

    pub(crate) fn run_action(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action();
        }
    }
}

impl Transition {
    pub fn event_id(&self) -> EventId {
        self.trigger
    }
}

impl TimedTransition {
    pub fn interval(&self) -> Interval {
        self.trigger
    }
}

impl<T: fmt::Debug> fmt::Debug for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("trigger", &self.trigger)
            .field("guard", &self.guard.is_some())
            .field("action", &self.action.is_some())
            .finish()
    }
}
