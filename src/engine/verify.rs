//! Truth-table grading.

use log::debug;

use crate::circuit::{Circuit, GateKind, NodeId};
use crate::level::TruthRow;

use super::tick::settle;
use super::SETTLE_TICKS;

/// Grade a board against a truth table.
///
/// Switches and lights bind to table columns top to bottom by canvas
/// height. For each row, the switches on a working copy are forced to the
/// row's input values, the copy is settled for [`SETTLE_TICKS`] ticks, and
/// every light is compared to the row's expected value. Grading stops at
/// the first failing row.
///
/// The live board is left as the player had it: switch states are restored
/// before returning, pass or fail. A failed verification is an answer, not
/// an error — the board stays fully editable.
pub fn verify(circuit: &mut Circuit, table: &[TruthRow]) -> bool {
    let switch_states: Vec<(NodeId, bool)> = circuit
        .ordered_by_height(GateKind::Input)
        .iter()
        .map(|n| (n.id.clone(), n.state))
        .collect();
    let light_ids: Vec<NodeId> = circuit
        .ordered_by_height(GateKind::Output)
        .iter()
        .map(|n| n.id.clone())
        .collect();

    let mut passed = true;

    for (row_index, row) in table.iter().enumerate() {
        let mut working = circuit.clone();
        for ((id, _), &value) in switch_states.iter().zip(row.inputs.iter()) {
            if let Some(node) = working.node_mut(id) {
                node.state = value;
            }
        }

        let settled = settle(&working, SETTLE_TICKS);

        let row_passed = row.outputs.iter().enumerate().all(|(pin, &expected)| {
            light_ids
                .get(pin)
                .and_then(|id| settled.node(id))
                .map(|n| n.state == expected)
                .unwrap_or(false)
        });

        if !row_passed {
            debug!("row {} failed for inputs {:?}", row_index, row.inputs);
            passed = false;
            break;
        }
    }

    // Put the live switches back exactly as the player left them.
    for (id, state) in &switch_states {
        if let Some(node) = circuit.node_mut(id) {
            node.state = *state;
        }
    }

    passed
}
