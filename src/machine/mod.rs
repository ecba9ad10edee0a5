//! The transition engine.
//!
//! This module is the effectful half of the crate, built around three
//! cooperating pieces:
//!
//! - **Edge executor** ([`Machine::transition`]): runs the edge's listeners
//!   concurrently, waits for all of them, and commits the new state only
//!   after every listener succeeded
//! - **Input router** ([`Machine::input`]): resolves a signal against the
//!   current state's behavior row and rejects unknown signals synchronously
//! - **Sequencer** ([`Machine::state_sequence`], [`Machine::input_sequence`]):
//!   folds a list of steps into one strictly ordered chain threading a
//!   payload
//!
//! Machine instances come from a [`MachineDefinition`], which factories build
//! once and reuse.

mod behavior;
mod definition;
mod error;
mod listener;
#[allow(clippy::module_inception)]
mod machine;

pub use behavior::Behavior;
pub use definition::MachineDefinition;
pub use error::{ListenerError, MachineError};
pub use listener::{listener_fn, Listener, ListenerFn, ListenerRef};
pub use machine::Machine;
