//! Tickfsm: a polling-driven finite state machine engine
//!
//! Tickfsm targets cooperative control loops: a single execution context
//! that calls into the machine once per cycle. The machine never blocks,
//! never spawns, and fires every hook synchronously before returning.
//!
//! # Core Concepts
//!
//! - **State**: a named node with optional enter/tick/exit hooks
//! - **Transition**: an edge fired by an event identifier
//! - **TimedTransition**: an edge fired after time spent in its source state
//! - **Guard**: a predicate that can veto a transition
//! - **Machine**: owns the graph; moved only by `trigger` and `run`
//! - **Component**: a hosted unit that drives machines from lifecycle hooks
//!
//! # Example
//!
//! ```rust
//! use tickfsm::core::{ManualClock, State, TimedTransition};
//! use tickfsm::engine::Machine;
//!
//! let clock = ManualClock::new();
//! let mut machine = Machine::with_clock(clock.clone());
//! let idle = machine.add_state(State::new("Idle"));
//! let active = machine.add_state(State::new("Active"));
//! machine.add_timed_transition(TimedTransition::new(idle, active, 500u64));
//! machine.set_initial_state(idle);
//!
//! machine.run(0, None); // enters Idle, starts the timer
//! clock.set(499);
//! machine.run(0, None);
//! assert!(machine.is_in_state(idle));
//!
//! clock.set(500);
//! machine.run(0, None);
//! assert!(machine.is_in_state(active));
//! ```

pub mod builder;
pub mod component;
pub mod core;
pub mod engine;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use component::{Component, Hosted};
pub use core::{EventId, Guard, Interval, State, StateId, TimedTransition, Transition};
pub use engine::Machine;
pub use snapshot::Snapshot;
