//! Errors raised while assembling a machine.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building a machine with [`MachineBuilder`].
///
/// [`MachineBuilder`]: crate::builder::MachineBuilder
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State {state} does not belong to this builder")]
    UnknownState { state: StateId },

    #[error("Transition '{edge}' is missing its source or target state")]
    MissingEndpoint { edge: String },
}
