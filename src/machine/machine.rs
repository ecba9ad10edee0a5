//! The transition engine: edge executor, input router, and sequencer.

use std::future::Future;
use std::sync::Arc;

use futures::future;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::core::{Message, Signal, State};
use crate::machine::behavior::Behavior;
use crate::machine::error::{ListenerError, MachineError};
use crate::machine::listener::{listener_fn, ListenerRef, TransitionTable};

/// A running state machine instance.
///
/// Each instance owns its current state and its transition table; the
/// signal-dispatch behavior is shared read-only with every instance built
/// from the same [`MachineDefinition`](crate::machine::MachineDefinition).
///
/// # Concurrency
///
/// Listeners within one edge batch run concurrently; everything beyond that
/// is the caller's concern. The machine does not serialize overlapping
/// `input`/`transition` calls against the same instance — they race on which
/// commits first, which in turn decides the edge the later call draws its
/// listeners from. Serialize with [`state_sequence`](Machine::state_sequence)
/// / [`input_sequence`](Machine::input_sequence) or with external ordering.
///
/// The async methods spawn listener tasks and must run inside a tokio
/// runtime.
pub struct Machine<S: State, I: Signal> {
    behavior: Arc<Behavior<S, I>>,
    table: TransitionTable<S>,
    current: RwLock<S>,
}

impl<S: State, I: Signal> Machine<S, I> {
    /// Detached instance with an empty behavior: transitions work, every
    /// input is rejected as invalid.
    pub fn new(initial: S) -> Self {
        Self::with_behavior(Arc::new(Behavior::empty()), initial)
    }

    pub(crate) fn with_behavior(behavior: Arc<Behavior<S, I>>, initial: S) -> Self {
        Self {
            behavior,
            table: TransitionTable::new(),
            current: RwLock::new(initial),
        }
    }

    /// The state the machine is currently in.
    pub fn current(&self) -> S {
        self.current.read().clone()
    }

    /// Register a listener on the `from -> to` edge.
    ///
    /// Appends to the edge's ordered list and returns the handle unchanged,
    /// so the same listener can be attached to further edges. There is no cap
    /// on listeners per edge, and registering a handle twice makes it run
    /// twice. A registration never affects a transition that has already
    /// captured the edge's batch.
    pub fn on(&self, from: S, to: S, listener: ListenerRef<S>) -> ListenerRef<S> {
        trace!(from = from.name(), to = to.name(), "listener registered");
        self.table.register(from, to, Arc::clone(&listener));
        listener
    }

    /// Register a closure on the `from -> to` edge. See [`Machine::on`].
    pub fn on_fn<F, Fut>(&self, from: S, to: S, f: F) -> ListenerRef<S>
    where
        F: Fn(S, S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ListenerError>> + Send + 'static,
    {
        self.on(from, to, listener_fn(f))
    }

    /// Number of listeners registered on the `from -> to` edge.
    pub fn listeners_on(&self, from: &S, to: &S) -> usize {
        self.table.registered(from, to)
    }

    /// Execute the edge from the current state to `to`.
    ///
    /// Every listener registered on the edge is spawned as an independent
    /// task, and the call suspends until all of them have finished — a
    /// wait-for-all barrier, not first-to-finish. Only when the whole batch
    /// succeeds does the machine commit `to` as its current state and resolve
    /// with the payload, unchanged. An edge with no listeners commits
    /// immediately.
    ///
    /// On failure the first error in registration order is reported and the
    /// state keeps its pre-call value; sibling listeners are not cancelled,
    /// their outcomes are discarded. A listener that panics counts as a
    /// failed listener.
    ///
    /// There is no timeout and no way to cancel a scheduled batch: a stalled
    /// listener stalls this future indefinitely.
    pub async fn transition<P: Send>(&self, to: S, payload: P) -> Result<P, MachineError> {
        let from = self.current.read().clone();
        let batch = self.table.snapshot(&from, &to);
        trace!(
            from = from.name(),
            to = to.name(),
            listeners = batch.len(),
            "edge scheduled"
        );

        let mut handles = Vec::with_capacity(batch.len());
        for listener in batch {
            let (was, now) = (from.clone(), to.clone());
            handles.push(tokio::spawn(async move {
                listener.on_transition(&was, &now).await
            }));
        }

        let mut first_failure = None;
        for joined in future::join_all(handles).await {
            let outcome = joined.unwrap_or_else(|_| Err(ListenerError::new("listener panicked")));
            if let Err(err) = outcome {
                first_failure.get_or_insert(err);
            }
        }
        if let Some(source) = first_failure {
            return Err(MachineError::ListenerFailed {
                from: from.name().to_owned(),
                to: to.name().to_owned(),
                source,
            });
        }

        *self.current.write() = to.clone();
        debug!(from = from.name(), to = to.name(), "transition committed");
        Ok(payload)
    }

    /// Dispatch an input signal against the current state.
    ///
    /// The behavior row is resolved before any asynchronous work exists: a
    /// signal with no entry for the current state fails here, synchronously,
    /// with [`MachineError::InvalidInput`] — no state change, no listener
    /// scheduled. A routed signal returns the future that drives the machine
    /// through the declared path, threading the payload.
    pub fn input<'a, P: Send + 'a>(
        &'a self,
        signal: I,
        payload: P,
    ) -> Result<impl Future<Output = Result<P, MachineError>> + Send + 'a, MachineError> {
        let message = Message::new(signal, payload);
        let state = self.current.read().clone();
        let path = match self.behavior.path(&state, &message.signal) {
            Some(path) => path.to_vec(),
            None => {
                debug!(
                    signal = message.signal.name(),
                    state = state.name(),
                    "invalid input"
                );
                return Err(MachineError::InvalidInput {
                    signal: message.signal.name().to_owned(),
                    state: state.name().to_owned(),
                });
            }
        };
        debug!(
            signal = message.signal.name(),
            state = state.name(),
            steps = path.len(),
            "input routed"
        );
        let (_, payload) = message.into_parts();
        Ok(self.state_sequence(path, payload))
    }

    /// Drive the machine through `states` strictly in order.
    ///
    /// An explicit fold over the path: step *n+1* starts only after step
    /// *n*'s future resolves, and the payload threads forward through every
    /// step. The first failing step rejects the whole chain; later steps are
    /// never attempted. An empty path resolves immediately with the seed
    /// payload.
    pub async fn state_sequence<P: Send>(
        &self,
        states: Vec<S>,
        payload: P,
    ) -> Result<P, MachineError> {
        let mut payload = payload;
        for state in states {
            payload = self.transition(state, payload).await?;
        }
        Ok(payload)
    }

    /// Dispatch `signals` strictly in order, chaining like
    /// [`state_sequence`](Machine::state_sequence).
    ///
    /// An invalid signal rejects the chain at its step; steps already
    /// committed stay committed, later steps are never attempted.
    pub async fn input_sequence<P: Send>(
        &self,
        signals: Vec<I>,
        payload: P,
    ) -> Result<P, MachineError> {
        let mut payload = payload;
        for signal in signals {
            payload = self.input(signal, payload)?.await?;
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

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
    }

    impl Signal for TestSignal {
        fn name(&self) -> &str {
            "Start"
        }
    }

    fn machine() -> Machine<TestState, TestSignal> {
        Machine::new(TestState::Idle)
    }

    #[tokio::test]
    async fn transition_with_no_listeners_commits() {
        let machine = machine();

        let payload = machine.transition(TestState::Working, 7).await.unwrap();

        assert_eq!(payload, 7);
        assert_eq!(machine.current(), TestState::Working);
    }

    #[tokio::test]
    async fn transition_runs_every_registered_listener() {
        let machine = machine();
        let calls = Arc::new(Mutex::new(0));
        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            machine.on_fn(TestState::Idle, TestState::Working, move |_, _| {
                let calls = Arc::clone(&calls);
                async move {
                    *calls.lock().unwrap() += 1;
                    Ok(())
                }
            });
        }

        machine.transition(TestState::Working, ()).await.unwrap();

        assert_eq!(*calls.lock().unwrap(), 3);
    }

    #[tokio::test]
    async fn failing_listener_rejects_and_keeps_state() {
        let machine = machine();
        machine.on_fn(TestState::Idle, TestState::Working, |_, _| async {
            Err(ListenerError::new("boom"))
        });

        let err = machine
            .transition(TestState::Working, ())
            .await
            .unwrap_err();

        assert!(matches!(err, MachineError::ListenerFailed { .. }));
        assert_eq!(machine.current(), TestState::Idle);
    }

    #[tokio::test]
    async fn first_failure_in_registration_order_is_reported() {
        let machine = machine();
        machine.on_fn(TestState::Idle, TestState::Working, |_, _| async {
            Err(ListenerError::new("first"))
        });
        machine.on_fn(TestState::Idle, TestState::Working, |_, _| async {
            Err(ListenerError::new("second"))
        });

        let err = machine
            .transition(TestState::Working, ())
            .await
            .unwrap_err();

        match err {
            MachineError::ListenerFailed { source, .. } => {
                assert_eq!(source.message(), "first");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn siblings_of_a_failed_listener_still_run() {
        let machine = machine();
        let sibling_ran = Arc::new(Mutex::new(false));
        machine.on_fn(TestState::Idle, TestState::Working, |_, _| async {
            Err(ListenerError::new("boom"))
        });
        {
            let sibling_ran = Arc::clone(&sibling_ran);
            machine.on_fn(TestState::Idle, TestState::Working, move |_, _| {
                let sibling_ran = Arc::clone(&sibling_ran);
                async move {
                    *sibling_ran.lock().unwrap() = true;
                    Ok(())
                }
            });
        }

        let result = machine.transition(TestState::Working, ()).await;

        assert!(result.is_err());
        assert!(*sibling_ran.lock().unwrap());
    }

    #[tokio::test]
    async fn panicking_listener_counts_as_failure() {
        let machine = machine();
        machine.on_fn(TestState::Idle, TestState::Working, |_, _| async {
            let boom: Result<(), &str> = Err("listener blew up");
            boom.unwrap();
            Ok(())
        });

        let err = machine
            .transition(TestState::Working, ())
            .await
            .unwrap_err();

        assert!(matches!(err, MachineError::ListenerFailed { .. }));
        assert_eq!(machine.current(), TestState::Idle);
    }

    #[tokio::test]
    async fn on_returns_the_registered_handle() {
        let machine = machine();
        let listener = listener_fn(|_: TestState, _: TestState| async { Ok(()) });

        let returned = machine.on(TestState::Idle, TestState::Working, Arc::clone(&listener));

        assert!(Arc::ptr_eq(&returned, &listener));
        assert_eq!(
            machine.listeners_on(&TestState::Idle, &TestState::Working),
            1
        );
    }

    #[tokio::test]
    async fn empty_state_sequence_resolves_with_seed() {
        let machine = machine();

        let payload = machine.state_sequence(vec![], "seed").await.unwrap();

        assert_eq!(payload, "seed");
        assert_eq!(machine.current(), TestState::Idle);
    }

    #[tokio::test]
    async fn state_sequence_visits_states_in_order() {
        let machine = machine();
        let order = Arc::new(Mutex::new(Vec::new()));
        for (from, to) in [
            (TestState::Idle, TestState::Working),
            (TestState::Working, TestState::Done),
        ] {
            let order = Arc::clone(&order);
            machine.on_fn(from, to, move |was: TestState, now: TestState| {
                let order = Arc::clone(&order);
                async move {
                    order
                        .lock()
                        .unwrap()
                        .push((was.name().to_owned(), now.name().to_owned()));
                    Ok(())
                }
            });
        }

        machine
            .state_sequence(vec![TestState::Working, TestState::Done], ())
            .await
            .unwrap();

        assert_eq!(machine.current(), TestState::Done);
        assert_eq!(
            *order.lock().unwrap(),
            vec![
                ("Idle".to_owned(), "Working".to_owned()),
                ("Working".to_owned(), "Done".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn state_sequence_stops_where_a_step_fails() {
        let machine = machine();
        machine.on_fn(TestState::Working, TestState::Done, |_, _| async {
            Err(ListenerError::new("boom"))
        });

        let err = machine
            .state_sequence(vec![TestState::Working, TestState::Done, TestState::Idle], ())
            .await
            .unwrap_err();

        // The second step failed to commit, so the machine rests where the
        // first step left it and the third step was never attempted.
        assert!(matches!(err, MachineError::ListenerFailed { .. }));
        assert_eq!(machine.current(), TestState::Working);
    }

    #[test]
    fn input_on_detached_machine_fails_synchronously() {
        let machine = machine();

        let err = machine.input(TestSignal::Start, ()).err().unwrap();

        match err {
            MachineError::InvalidInput { signal, state } => {
                assert_eq!(signal, "Start");
                assert_eq!(state, "Idle");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(machine.current(), TestState::Idle);
    }
}
