//! The polling state machine engine.
//!
//! This module is the imperative shell around the core types: it owns the
//! graph, evaluates transitions and fires hooks.
//!
//! # Key Concepts
//!
//! - **Events**: `trigger` attempts the first matching event edge
//! - **Polling**: `run` drives timed edges and per-tick hooks, throttled by
//!   a caller-chosen poll interval
//! - **Lazy start**: the initial state is entered on the first call, and
//!   again after `reset`
//! - **Diagrams**: `to_dot` renders the graph for inspection

mod dot;
mod machine;

pub use machine::Machine;
