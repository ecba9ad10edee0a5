//! Switchyard: a declarative asynchronous state machine engine.
//!
//! A machine is described by named states, named input signals, and a
//! per-state table mapping each signal to the path of states it drives the
//! machine through. Side effects attach to individual edges as listeners;
//! when an edge executes, its listeners run concurrently and the new state
//! commits only after every one of them has succeeded.
//!
//! # Core Concepts
//!
//! - **State / Signal**: type-safe vocabulary via the [`State`] and
//!   [`Signal`] traits
//! - **Listeners**: async side effects registered per edge, dispatched
//!   concurrently with commit-after-all-succeed semantics
//! - **Sequences**: multiple transitions or inputs composed into one strictly
//!   ordered asynchronous operation threading a payload
//! - **Definitions**: immutable dispatch behavior built once and shared by
//!   any number of independent machine instances
//!
//! # Example
//!
//! ```rust
//! use switchyard::builder::MachineBuilder;
//! use switchyard::{signal_enum, state_enum};
//!
//! state_enum! {
//!     enum Job {
//!         Idle,
//!         Working,
//!         Done,
//!     }
//! }
//!
//! signal_enum! {
//!     enum Op {
//!         Start,
//!         Complete,
//!         Reset,
//!     }
//! }
//!
//! let definition = MachineBuilder::new()
//!     .initial(Job::Idle)
//!     .route(Job::Idle, Op::Start, [Job::Working])
//!     .route(Job::Working, Op::Complete, [Job::Done])
//!     .route(Job::Done, Op::Reset, [Job::Idle])
//!     .build()
//!     .unwrap();
//!
//! let machine = definition.machine();
//! assert_eq!(machine.current(), Job::Idle);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Message, Signal, State};
pub use builder::MachineBuilder;
pub use machine::{
    listener_fn, Behavior, Listener, ListenerError, ListenerRef, Machine, MachineDefinition,
    MachineError,
};
pub use table::{MachineTable, SignalName, StateName};
