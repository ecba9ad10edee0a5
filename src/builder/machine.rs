//! Builder for constructing machine definitions.

use std::collections::HashMap;

use crate::builder::error::BuildError;
use crate::core::{Signal, State};
use crate::machine::{Behavior, MachineDefinition};

/// Builder assembling a [`MachineDefinition`] with a fluent API.
///
/// Routes declare the machine's behavior: which signal, received in which
/// state, drives the machine through which path of states. A definition with
/// no routes is legal — its instances simply reject every input.
pub struct MachineBuilder<S: State, I: Signal> {
    initial: Option<S>,
    routes: Vec<(S, I, Vec<S>)>,
}

impl<S: State, I: Signal> MachineBuilder<S, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            routes: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare that `signal`, received in `state`, drives the machine through
    /// `path` in order.
    pub fn route(mut self, state: S, signal: I, path: impl IntoIterator<Item = S>) -> Self {
        self.routes
            .push((state, signal, path.into_iter().collect()));
        self
    }

    /// Build the immutable definition.
    ///
    /// Fails if no initial state was set, a route declares an empty path, or
    /// the same `(state, signal)` pair is routed twice.
    pub fn build(self) -> Result<MachineDefinition<S, I>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut routes: HashMap<S, HashMap<I, Vec<S>>> = HashMap::new();
        for (state, signal, path) in self.routes {
            if path.is_empty() {
                return Err(BuildError::EmptyPath {
                    state: state.name().to_owned(),
                    signal: signal.name().to_owned(),
                });
            }
            let row = routes.entry(state.clone()).or_default();
            if row.contains_key(&signal) {
                return Err(BuildError::DuplicateRoute {
                    state: state.name().to_owned(),
                    signal: signal.name().to_owned(),
                });
            }
            row.insert(signal, path);
        }

        Ok(MachineDefinition::new(Behavior::from_routes(routes), initial))
    }
}

impl<S: State, I: Signal> Default for MachineBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}
