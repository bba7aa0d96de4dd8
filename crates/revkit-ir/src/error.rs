//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building a netlist.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit has not been allocated in this netlist.
    #[error("Qubit {qubit} not found in netlist{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// The same qubit appears twice among the controls of a gate.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// The target qubit is also listed as a control.
    #[error("Target {qubit} is also a control of gate '{gate_name}'")]
    TargetIsControl {
        /// The offending qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: String,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
