//! Combinational gate evaluation.

use crate::circuit::GateKind;

/// Evaluate one node's output pins from its input pins.
///
/// Total over any input slice: missing pins read as low, extra pins are
/// ignored. `state` is only read for `Input` nodes, where it is the switch
/// position the player set; wires never drive a switch. `Output` nodes have
/// no output pins — their lit indicator is derived from the input pin
/// directly in the tick, not here.
pub fn evaluate(kind: GateKind, inputs: &[bool], state: bool) -> Vec<bool> {
    let a = inputs.first().copied().unwrap_or(false);
    let b = inputs.get(1).copied().unwrap_or(false);

    match kind {
        GateKind::Input => vec![state],
        GateKind::Output => Vec::new(),
        GateKind::And => vec![a && b],
        GateKind::Or => vec![a || b],
        GateKind::Not => vec![!a],
        GateKind::Xor => vec![a != b],
        GateKind::Nand => vec![!(a && b)],
    }
}
