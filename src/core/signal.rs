//! Core Signal trait for machine inputs.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for input signals.
///
/// A signal is a pure dispatch key: the current state's behavior row maps it
/// to the path of states the machine should traverse. Signals carry no
/// behavior of their own.
///
/// The bounds mirror [`State`](crate::core::State): signals key behavior
/// rows (`Eq` + `Hash`) and travel into async call chains (`Send + Sync +
/// 'static`).
///
/// # Example
///
/// ```rust
/// use switchyard::core::Signal;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Op {
///     Start,
///     Cancel,
/// }
///
/// impl Signal for Op {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Cancel => "Cancel",
///         }
///     }
/// }
///
/// assert_eq!(Op::Cancel.name(), "Cancel");
/// ```
pub trait Signal: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the signal's name for display and logging.
    fn name(&self) -> &str;
}
