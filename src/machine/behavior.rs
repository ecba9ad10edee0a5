//! Immutable signal-dispatch behavior shared by machine instances.

use std::collections::HashMap;

use crate::core::{Signal, State};

/// Per-state mapping from input signal to the path of states that signal
/// drives the machine through.
///
/// A behavior is built once — by a [`MachineBuilder`](crate::builder::MachineBuilder)
/// or a compiled [`MachineTable`](crate::table::MachineTable) — and shared
/// read-only by every instance produced from the same definition. It never
/// changes afterwards.
pub struct Behavior<S: State, I: Signal> {
    routes: HashMap<S, HashMap<I, Vec<S>>>,
}

impl<S: State, I: Signal> Behavior<S, I> {
    /// Behavior with no entries; every input is invalid.
    pub(crate) fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub(crate) fn from_routes(routes: HashMap<S, HashMap<I, Vec<S>>>) -> Self {
        Self { routes }
    }

    /// Look up the declared path for `signal` received in `state`.
    ///
    /// Returns `None` when the state has no row or the row has no entry for
    /// the signal — the condition the router reports as an invalid input.
    pub fn path(&self, state: &S, signal: &I) -> Option<&[S]> {
        self.routes.get(state)?.get(signal).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Working,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Working => "Working",
                Self::Done => "Done",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestSignal {
        Start,
        Finish,
    }

    impl Signal for TestSignal {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
            }
        }
    }

    fn sample() -> Behavior<TestState, TestSignal> {
        let mut routes = HashMap::new();
        let mut idle = HashMap::new();
        idle.insert(TestSignal::Start, vec![TestState::Working]);
        routes.insert(TestState::Idle, idle);

        let mut working = HashMap::new();
        working.insert(TestSignal::Finish, vec![TestState::Done, TestState::Idle]);
        routes.insert(TestState::Working, working);

        Behavior::from_routes(routes)
    }

    #[test]
    fn empty_behavior_has_no_paths() {
        let behavior: Behavior<TestState, TestSignal> = Behavior::empty();

        assert!(behavior.path(&TestState::Idle, &TestSignal::Start).is_none());
    }

    #[test]
    fn path_returns_declared_route() {
        let behavior = sample();

        let path = behavior.path(&TestState::Idle, &TestSignal::Start);
        assert_eq!(path, Some(&[TestState::Working][..]));
    }

    #[test]
    fn path_preserves_multi_hop_order() {
        let behavior = sample();

        let path = behavior
            .path(&TestState::Working, &TestSignal::Finish)
            .unwrap();
        assert_eq!(path, &[TestState::Done, TestState::Idle]);
    }

    #[test]
    fn missing_row_or_entry_is_none() {
        let behavior = sample();

        assert!(behavior.path(&TestState::Done, &TestSignal::Start).is_none());
        assert!(behavior
            .path(&TestState::Idle, &TestSignal::Finish)
            .is_none());
    }
}
