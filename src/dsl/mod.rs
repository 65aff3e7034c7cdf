//! Text format for describing boards.
//!
//! A line-oriented, human-editable format used by the CLI and tests to
//! describe a circuit without the canvas UI.
//!
//! # Grammar Overview
//!
//! ```text
//! board      = { line }
//! line       = comment | directive | statement | empty
//! comment    = ('#' | ';') { any_char }
//! directive  = ".level" integer
//! statement  = gate | wire | preset
//! gate       = kind name [x y]
//! wire       = "WIRE" name pin name pin
//! preset     = "ON" name
//!
//! kind       = "AND" | "OR" | "NOT" | "XOR" | "NAND"
//!            | "IN" | "INPUT" | "SW" | "SWITCH"
//!            | "OUT" | "OUTPUT" | "LED" | "LIGHT"
//! name       = identifier
//! pin        = integer (zero-based)
//! x, y       = number (canvas coordinates)
//! ```
//!
//! # Example
//!
//! ```text
//! # Safety interlock: light only when both switches are on
//! .level 3
//!
//! IN   a    50 100
//! IN   b    50 200
//! AND  both 400 150
//! OUT  led  800 150
//!
//! WIRE a 0 both 0
//! WIRE b 0 both 1
//! WIRE both 0 led 0
//! ```
//!
//! Coordinates matter: verification binds switches and lights to truth
//! table columns in top-to-bottom order, so stacked switches should be
//! given ascending `y` values.

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a board DSL string into a document.
pub fn parse(input: &str) -> Result<CircuitDoc> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a board DSL file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitDoc> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::ArchitectError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
