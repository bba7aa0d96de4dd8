//! Error types for the Verilog reader.

use thiserror::Error;

/// Errors that can occur while reading a Verilog module.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at line {line}: {message}")]
    LexerError { line: usize, message: String },

    /// Unexpected token.
    #[error("Unexpected token at line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        expected: String,
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Reference to a signal that was never declared.
    #[error("Undefined identifier: {0}")]
    UndefinedIdentifier(String),

    /// Signal declared or assigned twice.
    #[error("Duplicate declaration: {0}")]
    DuplicateDeclaration(String),

    /// Assignment to a primary input.
    #[error("Cannot assign to input '{0}'")]
    AssignToInput(String),

    /// A wire or output that is used but never assigned.
    #[error("Signal '{0}' is never assigned")]
    UndrivenSignal(String),

    /// Assignments depend on each other cyclically.
    #[error("Combinational loop through '{0}'")]
    CombinationalLoop(String),

    /// Constant literal other than a single-bit 0 or 1.
    #[error("Unsupported constant '{0}': only single-bit 0/1 constants are allowed")]
    UnsupportedConstant(String),

    /// Logic network construction failed.
    #[error("Network error: {0}")]
    Network(#[from] revkit_logic::LogicError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
