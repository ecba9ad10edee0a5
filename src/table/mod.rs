//! Declarative, table-driven machine construction.
//!
//! A machine can be described entirely by names: an ordered list of states,
//! an ordered list of inputs, and per-state rows mapping each input to the
//! path of states it drives the machine through. Reading that document from
//! its storage format (YAML, JSON, ...) is a front-end concern; this module
//! consumes the parsed [`MachineTable`] and compiles it into a reusable
//! [`MachineDefinition`].

mod error;
mod name;

pub use error::TableError;
pub use name::{SignalName, StateName};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::machine::{Behavior, MachineDefinition};

/// Parsed declarative machine description.
///
/// The first declared state is the initial state of every instance. Rows may
/// cover any subset of states and inputs; an uncovered `(state, input)` pair
/// is simply an invalid input in that state. Paths may traverse several
/// states for one input.
///
/// # Example
///
/// ```rust
/// use switchyard::table::MachineTable;
///
/// let table: MachineTable = serde_json::from_str(
///     r#"{
///         "states": ["idle", "working"],
///         "inputs": ["start", "cancel"],
///         "table": {
///             "idle": { "start": ["working"] },
///             "working": { "cancel": ["idle"] }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// let definition = table.compile().unwrap();
/// assert_eq!(definition.initial().to_string(), "idle");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineTable {
    /// Declared states, in order; the first is the initial state.
    pub states: Vec<String>,
    /// Declared input signals, in order.
    pub inputs: Vec<String>,
    /// Per-state behavior rows: input name -> path of state names.
    #[serde(default)]
    pub table: HashMap<String, HashMap<String, Vec<String>>>,
}

impl MachineTable {
    /// Validate the table and compile it into an immutable definition.
    ///
    /// Every row must name a declared state, route only declared inputs, and
    /// target only declared states.
    pub fn compile(&self) -> Result<MachineDefinition<StateName, SignalName>, TableError> {
        if self.states.is_empty() {
            return Err(TableError::NoStates);
        }

        let mut states: HashMap<&str, StateName> = HashMap::new();
        for name in &self.states {
            if states
                .insert(name.as_str(), StateName::from(name.as_str()))
                .is_some()
            {
                return Err(TableError::DuplicateState(name.clone()));
            }
        }
        let mut inputs: HashMap<&str, SignalName> = HashMap::new();
        for name in &self.inputs {
            if inputs
                .insert(name.as_str(), SignalName::from(name.as_str()))
                .is_some()
            {
                return Err(TableError::DuplicateInput(name.clone()));
            }
        }

        let mut routes: HashMap<StateName, HashMap<SignalName, Vec<StateName>>> = HashMap::new();
        for (state, row) in &self.table {
            let state_name = states
                .get(state.as_str())
                .cloned()
                .ok_or_else(|| TableError::UnknownState(state.clone()))?;

            let mut compiled_row = HashMap::new();
            for (input, path) in row {
                let signal = inputs.get(input.as_str()).cloned().ok_or_else(|| {
                    TableError::UnknownInput {
                        state: state.clone(),
                        input: input.clone(),
                    }
                })?;

                let mut compiled_path = Vec::with_capacity(path.len());
                for target in path {
                    let target_name = states.get(target.as_str()).cloned().ok_or_else(|| {
                        TableError::UnknownPathState {
                            state: state.clone(),
                            input: input.clone(),
                            target: target.clone(),
                        }
                    })?;
                    compiled_path.push(target_name);
                }
                compiled_row.insert(signal, compiled_path);
            }
            routes.insert(state_name, compiled_row);
        }

        let initial = StateName::from(self.states[0].as_str());
        Ok(MachineDefinition::new(Behavior::from_routes(routes), initial))
    }

    /// Interned state value for `name`, if it is declared.
    pub fn state(&self, name: &str) -> Option<StateName> {
        self.states
            .iter()
            .any(|s| s == name)
            .then(|| StateName::from(name))
    }

    /// Interned signal value for `name`, if it is declared.
    pub fn input(&self, name: &str) -> Option<SignalName> {
        self.inputs
            .iter()
            .any(|i| i == name)
            .then(|| SignalName::from(name))
    }
}
