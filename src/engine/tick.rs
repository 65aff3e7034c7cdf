//! Single-pass signal propagation.

use log::trace;

use crate::circuit::{Circuit, GateKind};

use super::evaluate::evaluate;

/// Advance the board by one tick.
///
/// The input snapshot is never mutated; callers get the next state back.
/// Two passes, in order:
///
/// 1. **Wires.** Every connection whose source still resolves copies the
///    source output pin onto itself and into the target input pin (growing
///    the pin vector when needed). A wire whose source end dangles keeps
///    its previous value and drives nothing.
/// 2. **Nodes.** Every node recomputes its outputs from its inputs. Lights
///    take their lit state from input pin 0; switches keep whatever state
///    the player set.
///
/// One pass means one node level of travel per tick. Feedback loops do not
/// converge here — they change value every tick, which is the intended
/// behavior for a board with a cycle wired in.
pub fn simulate(circuit: &Circuit) -> Circuit {
    let mut next = circuit.clone();

    for i in 0..next.connections.len() {
        let (source, source_pin) = {
            let conn = &next.connections[i];
            (conn.source.clone(), conn.source_pin)
        };

        let value = match next
            .node(&source)
            .and_then(|n| n.outputs.get(source_pin).copied())
        {
            Some(v) => v,
            None => continue,
        };

        next.connections[i].state = value;

        let (target, target_pin) = {
            let conn = &next.connections[i];
            (conn.target.clone(), conn.target_pin)
        };
        if let Some(node) = next.node_mut(&target) {
            if node.inputs.len() <= target_pin {
                node.inputs.resize(target_pin + 1, false);
            }
            node.inputs[target_pin] = value;
        }
    }

    for node in &mut next.nodes {
        // Pin vectors may arrive short (fresh node) or long (hand-built
        // board); the tick leaves them at the kind's exact arity.
        node.inputs.resize(node.kind.input_count(), false);

        if node.kind == GateKind::Output {
            node.state = node.inputs.first().copied().unwrap_or(false);
            node.outputs.clear();
        } else {
            node.outputs = evaluate(node.kind, &node.inputs, node.state);
        }
    }

    trace!(
        "tick: {} nodes, {} wires",
        next.nodes.len(),
        next.connections.len()
    );

    next
}

/// Run `ticks` propagation steps and return the settled board.
pub fn settle(circuit: &Circuit, ticks: usize) -> Circuit {
    let mut state = circuit.clone();
    for _ in 0..ticks {
        state = simulate(&state);
    }
    state
}
