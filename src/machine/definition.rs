//! One-time machine definition produced by the factories.

use std::sync::Arc;

use crate::core::{Signal, State};
use crate::machine::behavior::Behavior;
use crate::machine::machine::Machine;

/// Immutable product of a machine factory.
///
/// A definition bundles the shared dispatch behavior with the initial state.
/// It is built once and may then instantiate any number of machines; each
/// instance owns an independent transition table and current-state slot,
/// while the behavior is shared read-only between all of them.
pub struct MachineDefinition<S: State, I: Signal> {
    behavior: Arc<Behavior<S, I>>,
    initial: S,
}

impl<S: State, I: Signal> MachineDefinition<S, I> {
    pub(crate) fn new(behavior: Behavior<S, I>, initial: S) -> Self {
        Self {
            behavior: Arc::new(behavior),
            initial,
        }
    }

    /// The state every instance starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// The shared dispatch behavior.
    pub fn behavior(&self) -> &Behavior<S, I> {
        &self.behavior
    }

    /// Instantiate a machine in the initial state with an empty transition
    /// table.
    pub fn machine(&self) -> Machine<S, I> {
        Machine::with_behavior(Arc::clone(&self.behavior), self.initial.clone())
    }
}

impl<S: State, I: Signal> Clone for MachineDefinition<S, I> {
    fn clone(&self) -> Self {
        Self {
            behavior: Arc::clone(&self.behavior),
            initial: self.initial.clone(),
        }
    }
}
