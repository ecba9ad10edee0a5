//! Transition listeners and the per-instance edge table.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::State;
use crate::machine::error::ListenerError;

/// Shared handle to a registered listener.
pub type ListenerRef<S> = Arc<dyn Listener<S>>;

/// Side effect attached to a machine edge.
///
/// A listener observes only the edge metadata — the state being left and the
/// state being entered — never the payload a call chain threads through the
/// machine. Listeners registered on the same edge run concurrently with each
/// other, with no ordering guarantee between them.
#[async_trait]
pub trait Listener<S: State>: Send + Sync {
    /// Invoked while the machine executes the `from -> to` edge.
    ///
    /// Returning an error fails the whole edge batch: the transition is
    /// rejected and the machine keeps its pre-call state.
    async fn on_transition(&self, from: &S, to: &S) -> Result<(), ListenerError>;
}

/// Function-backed listener.
///
/// Wraps a closure that creates a fresh future per invocation, so repeated
/// executions of the same edge never share hidden mutable state. Shared
/// state, when needed, is captured explicitly behind an `Arc` inside the
/// closure.
pub struct ListenerFn<F> {
    f: F,
}

impl<F> ListenerFn<F> {
    /// Create a function-backed listener.
    ///
    /// Prefer [`listener_fn`] when you immediately need a [`ListenerRef`].
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<S, F, Fut> Listener<S> for ListenerFn<F>
where
    S: State,
    F: Fn(S, S) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), ListenerError>> + Send,
{
    async fn on_transition(&self, from: &S, to: &S) -> Result<(), ListenerError> {
        (self.f)(from.clone(), to.clone()).await
    }
}

/// Wrap a closure into a shared listener handle.
pub fn listener_fn<S, F, Fut>(f: F) -> ListenerRef<S>
where
    S: State,
    F: Fn(S, S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ListenerError>> + Send + 'static,
{
    Arc::new(ListenerFn::new(f))
}

/// Per-instance registry of listeners keyed by edge.
///
/// The table starts empty, grows only through registration, and never
/// shrinks. Dispatch works on a snapshot of an edge's ordered list, so a
/// registration racing an in-flight transition never alters the batch that
/// transition already captured.
pub(crate) struct TransitionTable<S: State> {
    edges: RwLock<HashMap<(S, S), Vec<ListenerRef<S>>>>,
}

impl<S: State> TransitionTable<S> {
    pub(crate) fn new() -> Self {
        Self {
            edges: RwLock::new(HashMap::new()),
        }
    }

    /// Append a listener to the `(from, to)` edge.
    pub(crate) fn register(&self, from: S, to: S, listener: ListenerRef<S>) {
        self.edges
            .write()
            .entry((from, to))
            .or_default()
            .push(listener);
    }

    /// Snapshot the ordered listener batch for an edge.
    pub(crate) fn snapshot(&self, from: &S, to: &S) -> Vec<ListenerRef<S>> {
        self.edges
            .read()
            .get(&(from.clone(), to.clone()))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of listeners currently registered on an edge.
    pub(crate) fn registered(&self, from: &S, to: &S) -> usize {
        self.edges
            .read()
            .get(&(from.clone(), to.clone()))
            .map_or(0, Vec::len)
    }
}
