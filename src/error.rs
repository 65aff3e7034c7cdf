//! Error types for the Logic Architect circuit engine.
//!
//! This module provides a unified error type [`ArchitectError`] that covers
//! all error conditions that can occur during board parsing, editing and
//! level validation. Simulation and grading themselves never fail: a
//! dangling wire or a too-short pin vector is tolerated, not reported.

use thiserror::Error;

/// Result type alias using [`ArchitectError`].
pub type Result<T> = std::result::Result<T, ArchitectError>;

/// Unified error type for all Logic Architect operations.
#[derive(Error, Debug)]
pub enum ArchitectError {
    // ============ Board DSL Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// A statement keyword that is neither a gate kind nor WIRE/ON
    #[error("Unknown gate kind '{keyword}' at line {line}")]
    UnknownGateKind { keyword: String, line: usize },

    /// Two gates declared with the same name
    #[error("Duplicate gate name '{name}' at line {line}")]
    DuplicateGate { name: String, line: usize },

    /// A wire or preset references a gate name that was never declared
    #[error("Unknown gate '{name}' referenced at line {line}")]
    UnknownGate { name: String, line: usize },

    // ============ Board Editing Errors ============
    /// Node id does not resolve to a placed node
    #[error("Node '{id}' not found on the board")]
    NodeNotFound { id: String },

    /// Wire id does not resolve to an existing connection
    #[error("Wire '{id}' not found on the board")]
    WireNotFound { id: String },

    /// A wire may not start and end on the same node
    #[error("Cannot wire node '{id}' to itself")]
    SelfLoop { id: String },

    /// Source pin index beyond the node's output pins
    #[error("Node '{id}' has no output pin {pin}")]
    NoSuchOutputPin { id: String, pin: usize },

    /// Target pin index beyond the node's input pins
    #[error("Node '{id}' has no input pin {pin}")]
    NoSuchInputPin { id: String, pin: usize },

    /// Toggling is only meaningful for switches
    #[error("Node '{id}' is not a switch")]
    NotASwitch { id: String },

    // ============ Level Errors ============
    /// No built-in level with the requested id
    #[error("No level with id {id}")]
    UnknownLevel { id: u32 },

    /// Level declares a truth table with no rows
    #[error("Level {level} has an empty truth table")]
    EmptyTruthTable { level: u32 },

    /// A truth table row disagrees with the level's declared pin counts
    #[error("Level {level}, row {row}: expected {expected} {column} values, got {found}")]
    TruthTableArity {
        level: u32,
        row: usize,
        column: &'static str,
        expected: usize,
        found: usize,
    },

    /// Board has the wrong number of switches for the level
    #[error("Level needs {expected} switches, board has {found}")]
    SwitchCountMismatch { expected: usize, found: usize },

    /// Board has the wrong number of lights for the level
    #[error("Level needs {expected} lights, board has {found}")]
    LightCountMismatch { expected: usize, found: usize },

    // ============ I/O Errors ============
    /// Error reading a board file
    #[error("Failed to read board file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ArchitectError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }
}
