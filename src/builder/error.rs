//! Build errors for machine definitions.

use thiserror::Error;

/// Errors that can occur when assembling a machine definition.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Route {state}.{signal} declares an empty path")]
    EmptyPath { state: String, signal: String },

    #[error("Route {state}.{signal} is declared twice")]
    DuplicateRoute { state: String, signal: String },
}
