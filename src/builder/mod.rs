//! Builder API for ergonomic machine construction.
//!
//! This module provides a validating builder and macros for assembling a
//! machine's graph in one place before it starts running.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
