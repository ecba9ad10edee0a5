//! Error types for the transition engine.

use thiserror::Error;

/// Failure reported by a registered listener.
///
/// The first failing listener of an edge batch becomes the error reported
/// for the whole batch.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    /// Create a listener error carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ListenerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ListenerError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// Errors produced by machine operations.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The current state's behavior has no entry for the signal.
    ///
    /// Raised synchronously by the input router, before any asynchronous
    /// work is scheduled; the machine's state and table are untouched.
    #[error("'{signal}' is not a valid input for state '{state}'")]
    InvalidInput { signal: String, state: String },

    /// A listener failed while its edge executed.
    ///
    /// The transition did not commit; the machine keeps its pre-call state.
    #[error("listener failed on transition '{from}' -> '{to}': {source}")]
    ListenerFailed {
        from: String,
        to: String,
        #[source]
        source: ListenerError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_names_signal_and_state() {
        let err = MachineError::InvalidInput {
            signal: "refresh".to_owned(),
            state: "idle".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "'refresh' is not a valid input for state 'idle'"
        );
    }

    #[test]
    fn listener_failure_names_edge_and_cause() {
        let err = MachineError::ListenerFailed {
            from: "working".to_owned(),
            to: "done".to_owned(),
            source: ListenerError::new("disk full"),
        };

        assert_eq!(
            err.to_string(),
            "listener failed on transition 'working' -> 'done': disk full"
        );
    }

    #[test]
    fn listener_error_converts_from_strings() {
        let from_str = ListenerError::from("boom");
        let from_string = ListenerError::from("boom".to_owned());

        assert_eq!(from_str.message(), "boom");
        assert_eq!(from_string.message(), "boom");
    }
}
