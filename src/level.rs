//! Level definitions: goals, gate palettes and truth tables.
//!
//! A level is pure data handed to the engine by the caller. The engine only
//! reads the truth table; `name`, `description` and `goal` exist for the
//! surrounding UI (and its hint assistant) to display.

use crate::circuit::GateKind;
use crate::error::{ArchitectError, Result};

/// One row of a truth table: the forced switch values and the light values
/// the board must produce for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    pub inputs: Vec<bool>,
    pub outputs: Vec<bool>,
}

impl TruthRow {
    /// Create a row.
    pub fn new(inputs: Vec<bool>, outputs: Vec<bool>) -> Self {
        Self { inputs, outputs }
    }
}

/// A puzzle level.
#[derive(Debug, Clone)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// One-line statement of what the circuit must do.
    pub goal: String,
    /// Gates the palette offers for this level.
    pub available_gates: Vec<GateKind>,
    /// Number of switches the board starts with.
    pub inputs: usize,
    /// Number of lights the board starts with.
    pub outputs: usize,
    pub truth_table: Vec<TruthRow>,
}

impl Level {
    /// Check that the truth table agrees with the declared pin counts.
    pub fn validate(&self) -> Result<()> {
        if self.truth_table.is_empty() {
            return Err(ArchitectError::EmptyTruthTable { level: self.id });
        }
        for (row_index, row) in self.truth_table.iter().enumerate() {
            if row.inputs.len() != self.inputs {
                return Err(ArchitectError::TruthTableArity {
                    level: self.id,
                    row: row_index,
                    column: "input",
                    expected: self.inputs,
                    found: row.inputs.len(),
                });
            }
            if row.outputs.len() != self.outputs {
                return Err(ArchitectError::TruthTableArity {
                    level: self.id,
                    row: row_index,
                    column: "output",
                    expected: self.outputs,
                    found: row.outputs.len(),
                });
            }
        }
        Ok(())
    }
}

/// The built-in campaign, in play order.
pub fn builtin_levels() -> Vec<Level> {
    vec![
        Level {
            id: 1,
            name: "The Beginning".to_string(),
            description: "Connect the Switch to the Output Light to verify the circuit works."
                .to_string(),
            goal: "Make the light turn on when the switch is on.".to_string(),
            available_gates: vec![GateKind::Input, GateKind::Output],
            inputs: 1,
            outputs: 1,
            truth_table: vec![
                TruthRow::new(vec![false], vec![false]),
                TruthRow::new(vec![true], vec![true]),
            ],
        },
        Level {
            id: 2,
            name: "Inverter".to_string(),
            description: "The light should be OFF when the switch is ON, and vice versa."
                .to_string(),
            goal: "Invert the signal.".to_string(),
            available_gates: vec![GateKind::Input, GateKind::Output, GateKind::Not],
            inputs: 1,
            outputs: 1,
            truth_table: vec![
                TruthRow::new(vec![false], vec![true]),
                TruthRow::new(vec![true], vec![false]),
            ],
        },
        Level {
            id: 3,
            name: "Safety Interlock (AND)".to_string(),
            description: "The machine (Light) should only start if both safety switches are ON."
                .to_string(),
            goal: "Implement AND logic.".to_string(),
            available_gates: vec![GateKind::Input, GateKind::Output, GateKind::And],
            inputs: 2,
            outputs: 1,
            truth_table: vec![
                TruthRow::new(vec![false, false], vec![false]),
                TruthRow::new(vec![false, true], vec![false]),
                TruthRow::new(vec![true, false], vec![false]),
                TruthRow::new(vec![true, true], vec![true]),
            ],
        },
        // No XOR gate offered: the point is building it from basics.
        Level {
            id: 4,
            name: "Exclusive Decision (XOR)".to_string(),
            description: "The light should be ON if either switch is ON, but NOT both."
                .to_string(),
            goal: "Build an XOR gate using basic gates.".to_string(),
            available_gates: vec![
                GateKind::Input,
                GateKind::Output,
                GateKind::And,
                GateKind::Or,
                GateKind::Not,
            ],
            inputs: 2,
            outputs: 1,
            truth_table: vec![
                TruthRow::new(vec![false, false], vec![false]),
                TruthRow::new(vec![false, true], vec![true]),
                TruthRow::new(vec![true, false], vec![true]),
                TruthRow::new(vec![true, true], vec![false]),
            ],
        },
    ]
}

/// Find a built-in level by id.
pub fn builtin_level(id: u32) -> Option<Level> {
    builtin_levels().into_iter().find(|l| l.id == id)
}
