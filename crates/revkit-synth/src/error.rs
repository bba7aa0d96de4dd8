//! Error types for the synth crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the synthesizers and the network compiler.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Netlist builder returned an error.
    #[error("Netlist error: {0}")]
    Ir(#[from] revkit_ir::IrError),

    /// Malformed Boolean function input.
    #[error("Invalid input: {0}")]
    Logic(#[from] revkit_logic::LogicError),

    /// The logic network source could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] revkit_verilog::ParseError),

    /// The logic network source could not be read.
    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Angle vector length is not `2^n - 1` for some `n >= 1`.
    #[error("Expected 2^n - 1 angles for some n >= 1, got {0}")]
    InvalidAngleCount(usize),

    /// An angle is NaN or infinite.
    #[error("Angle at position {index} is not finite")]
    NonFiniteAngle {
        /// Position in the angle vector.
        index: usize,
    },

    /// Unrecognized STG strategy name.
    #[error("Unknown STG kind '{0}' (expected spectrum, pkrm or pprm)")]
    UnknownStgKind(String),

    /// The fixed-polarity search would enumerate too many polarities.
    #[error("pprm supports at most {max} variables, got {num_vars}")]
    PolaritySearchTooLarge {
        /// Arity of the function.
        num_vars: u32,
        /// Largest accepted arity.
        max: u32,
    },

    /// Qubit list does not match the function arity.
    #[error("Expected {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Required number of qubits.
        expected: usize,
        /// Number of qubits passed.
        got: usize,
    },
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
