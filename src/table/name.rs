//! Interned state and signal names for table-driven machines.

use std::fmt;
use std::sync::Arc;

use crate::core::{Signal, State};

/// State of a table-driven machine, identified by its declared name.
///
/// Cheap to clone; equality and hashing follow the name itself, so two
/// values built from the same string are the same state.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct StateName(Arc<str>);

impl State for StateName {
    fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateName {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for StateName {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input signal of a table-driven machine, identified by its declared name.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SignalName(Arc<str>);

impl Signal for SignalName {
    fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SignalName {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for SignalName {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for SignalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
