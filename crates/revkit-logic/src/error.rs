//! Error types for the logic crate.

use thiserror::Error;

/// Errors raised while constructing Boolean function representations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogicError {
    /// A bit-string contained something other than `0` and `1`.
    #[error("Invalid bit-string '{0}': only '0' and '1' are allowed")]
    InvalidBitString(String),

    /// A hexadecimal string contained a non-hex digit.
    #[error("Invalid hexadecimal string '{0}'")]
    InvalidHexString(String),

    /// A parity term uses a different number of variables than the first term.
    #[error("Parity term '{term}' has {got} variables, expected {expected}")]
    InconsistentTermWidth {
        /// The offending term.
        term: String,
        /// Width fixed by the first term.
        expected: u32,
        /// Width of the offending term.
        got: u32,
    },

    /// The function has more variables than supported.
    #[error("{got} variables requested, at most {max} are supported")]
    TooManyVariables {
        /// Requested number of variables.
        got: u32,
        /// Supported maximum.
        max: u32,
    },

    /// A variable index is not below the arity of the function.
    #[error("Variable {var} out of range for a {num_vars}-variable function")]
    VariableOutOfRange {
        /// Requested variable.
        var: u32,
        /// Arity of the function.
        num_vars: u32,
    },

    /// A sequence whose length must be a power of two is not.
    #[error("Length {0} is not a power of two of the form 2^n with n >= 1")]
    NotAPowerOfTwo(usize),

    /// A sequence does not have the length implied by its number of variables.
    #[error("Expected {expected} entries, got {got}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A permutation value lies outside its domain.
    #[error("Value {value} at position {position} is outside the domain 0..{size}")]
    ValueOutOfRange {
        /// Position in the permutation.
        position: usize,
        /// The offending value.
        value: u32,
        /// Domain size.
        size: usize,
    },

    /// A permutation maps two inputs to the same value.
    #[error("Value {value} appears more than once; not a bijection")]
    NotABijection {
        /// The repeated value.
        value: u32,
    },

    /// A signal refers to a node that does not exist in the network.
    #[error("Signal refers to node {node}, but the network has {size} nodes")]
    InvalidSignal {
        /// Referenced node.
        node: u32,
        /// Number of nodes.
        size: usize,
    },
}

/// Result type for logic operations.
pub type LogicResult<T> = Result<T, LogicError>;
