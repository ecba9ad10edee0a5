//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder for assembling a
//! [`MachineDefinition`](crate::machine::MachineDefinition) from typed state
//! and signal enums, plus macros that generate the trait implementations for
//! plain enums. Machines driven by string-name tables are built by
//! [`crate::table`] instead.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
