//! Core building blocks of a state graph.
//!
//! This module contains the data types the engine operates on:
//! - States with optional enter/tick/exit hooks
//! - Guard predicates for transition control
//! - Event-triggered and time-triggered edges
//! - Millisecond clocks
//!
//! Nothing here drives transitions; that is the engine's job.

mod clock;
mod guard;
mod state;
mod transition;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use guard::Guard;
pub use state::{Hook, State, StateId};
pub use transition::{Edge, EdgeId, EventId, Interval, TimedTransition, Transition};
