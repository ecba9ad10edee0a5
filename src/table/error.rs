//! Validation errors for declarative machine tables.

use thiserror::Error;

/// Errors found while compiling a declarative table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("A machine table must declare at least one state")]
    NoStates,

    #[error("State '{0}' is declared more than once")]
    DuplicateState(String),

    #[error("Input '{0}' is declared more than once")]
    DuplicateInput(String),

    #[error("Behavior row '{0}' does not name a declared state")]
    UnknownState(String),

    #[error("Row '{state}' routes undeclared input '{input}'")]
    UnknownInput { state: String, input: String },

    #[error("Path for {state}.{input} contains undeclared state '{target}'")]
    UnknownPathState {
        state: String,
        input: String,
        target: String,
    },
}
