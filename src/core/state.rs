//! Core State trait for machine states.
//!
//! All machine states must implement this trait. A state is an opaque value
//! drawn from a finite set, and a machine instance is in exactly one state at
//! any time.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for machine states.
///
/// States are immutable values that describe the current position of a
/// machine. They double as lookup keys for transition edges and behavior
/// rows, which is where the equality and hashing bounds come from.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into edge keys and listener invocations
/// - `Eq` + `Hash`: states key the transition table and behavior map
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync` + `'static`: listener batches run on independent tasks
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum JobState {
///     Idle,
///     Working,
///     Done,
/// }
///
/// impl State for JobState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Working => "Working",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// assert_eq!(JobState::Working.name(), "Working");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display and logging.
    fn name(&self) -> &str;
}
