//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{
    Clock, Edge, Hook, MonotonicClock, State, StateId, TimedTransition, Transition,
};
use crate::engine::Machine;

/// Validated graph-construction session.
///
/// States are registered with [`MachineBuilder::state`], which hands out the
/// [`StateId`]s the edges refer to. [`MachineBuilder::build`] checks the graph
/// before producing a [`Machine`]; the direct `Machine` API performs no such
/// checks and lets bad edges fail at run time instead.
///
/// # Example
///
/// ```rust
/// use tickfsm::builder::MachineBuilder;
/// use tickfsm::core::{State, TimedTransition, Transition};
///
/// let mut builder = MachineBuilder::new();
/// let idle = builder.state(State::new("Idle"));
/// let busy = builder.state(State::new("Busy"));
///
/// let machine = builder
///     .initial(idle)
///     .transition(Transition::new(idle, busy, 1))
///     .timed(TimedTransition::new(busy, idle, 1_000u64))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.initial_state(), Some(idle));
/// ```
pub struct MachineBuilder<C: Clock = MonotonicClock> {
    clock: C,
    states: Vec<State>,
    initial: Option<StateId>,
    transitions: Vec<Transition>,
    timed: Vec<TimedTransition>,
    on_transition: Option<Hook>,
    on_finished: Option<Hook>,
}

impl MachineBuilder<MonotonicClock> {
    /// Create a new builder on the real-time clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for MachineBuilder<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MachineBuilder<C> {
    /// Create a new builder whose machine reads time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            states: Vec::new(),
            initial: None,
            transitions: Vec::new(),
            timed: Vec::new(),
            on_transition: None,
            on_finished: None,
        }
    }

    /// Register a state and return its handle.
    pub fn state(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add an event edge.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple event edges at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Add a timed edge.
    pub fn timed(mut self, transition: TimedTransition) -> Self {
        self.timed.push(transition);
        self
    }

    pub fn on_transition<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.on_transition = Some(Box::new(f));
        self
    }

    pub fn on_finished<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.on_finished = Some(Box::new(f));
        self
    }

    /// Build the machine.
    /// Returns an error if the initial state is missing or any edge points
    /// outside this builder's states.
    pub fn build(self) -> Result<Machine<C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        self.check_known(initial)?;
        for edge in &self.transitions {
            self.check_edge(edge)?;
        }
        for edge in &self.timed {
            self.check_edge(edge)?;
        }

        let mut machine = Machine::with_clock(self.clock);
        for state in self.states {
            machine.add_state(state);
        }
        machine.set_initial_state(initial);
        machine.add_transitions(self.transitions);
        machine.add_timed_transitions(self.timed);
        if let Some(hook) = self.on_transition {
            machine.set_on_transition(hook);
        }
        if let Some(hook) = self.on_finished {
            machine.set_on_finished(hook);
        }

        Ok(machine)
    }

    fn check_known(&self, state: StateId) -> Result<(), BuildError> {
        if state.index() < self.states.len() {
            Ok(())
        } else {
            Err(BuildError::UnknownState { state })
        }
    }

    fn check_edge<T>(&self, edge: &Edge<T>) -> Result<(), BuildError> {
        let (Some(from), Some(to)) = (edge.from(), edge.to()) else {
            return Err(BuildError::MissingEndpoint {
                edge: edge.name().to_string(),
            });
        };
        self.check_known(from)?;
        self.check_known(to)
    }
}
