//! Circuit graph representation and board validation.
//!
//! This module provides the editable board state: placed nodes (gates,
//! switches, lights), directed wires between pins, and the editing
//! operations the UI performs between engine ticks. The [`Circuit`] struct
//! is a plain cloneable value so the engine can work on snapshots.

mod graph;
mod types;
mod validate;

pub use graph::{Circuit, Connection, Node};
pub use types::*;
pub use validate::validate_board;
