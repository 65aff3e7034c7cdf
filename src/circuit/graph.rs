//! Circuit graph structure.

use std::collections::HashMap;

use super::types::{GateKind, NodeId, Position, WireId};
use crate::dsl::CircuitDoc;
use crate::error::{ArchitectError, Result};
use crate::level::Level;

/// Canvas column where a level's switches are placed.
const SWITCH_COLUMN_X: f32 = 50.0;

/// Canvas column where a level's lights are placed.
const LIGHT_COLUMN_X: f32 = 800.0;

/// Vertical spacing between stacked switches or lights.
const ROW_SPACING_Y: f32 = 100.0;

/// One placed node: a gate, a switch or a light.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub kind: GateKind,
    /// Canvas position. Irrelevant to the signal fabric, but switches and
    /// lights bind to truth table columns in top-to-bottom order.
    pub position: Position,
    /// Dual-purpose flag: for `Input` nodes the switch position (owned by
    /// the UI toggle), for `Output` nodes the lit indicator (owned by the
    /// engine). Unused for plain gates.
    pub state: bool,
    /// Current value at each input pin, written by wire propagation.
    pub inputs: Vec<bool>,
    /// Computed value at each output pin.
    pub outputs: Vec<bool>,
    /// Optional display label.
    pub label: Option<String>,
}

impl Node {
    /// Create a node of the given kind with every pin low.
    pub fn new(id: NodeId, kind: GateKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            state: false,
            inputs: vec![false; kind.input_count()],
            outputs: vec![false; kind.output_count()],
            label: None,
        }
    }
}

/// A directed wire from one node's output pin to another node's input pin.
#[derive(Debug, Clone)]
pub struct Connection {
    pub id: WireId,
    pub source: NodeId,
    pub source_pin: usize,
    pub target: NodeId,
    pub target_pin: usize,
    /// Value currently carried. Holds its last value while the source end
    /// dangles.
    pub state: bool,
}

/// The full editable board: every placed node plus every wire.
///
/// The graph is a plain value. The engine never holds on to it between
/// calls; each tick takes the current state and returns the next, which is
/// what lets verification run speculative ticks on a clone without touching
/// the live board.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// All placed nodes, in placement order.
    pub nodes: Vec<Node>,
    /// All wires, in creation order.
    pub connections: Vec<Connection>,

    next_node: u64,
    next_wire: u64,
}

impl Circuit {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting board for a level: its switches stacked down the left edge
    /// and its lights down the right edge, nothing wired.
    pub fn for_level(level: &Level) -> Self {
        let mut circuit = Circuit::new();
        for i in 0..level.inputs {
            let position = Position::new(SWITCH_COLUMN_X, ROW_SPACING_Y + ROW_SPACING_Y * i as f32);
            let id = circuit.add_node(GateKind::Input, position);
            circuit.set_label(&id, format!("IN {}", i));
        }
        for i in 0..level.outputs {
            let position = Position::new(LIGHT_COLUMN_X, ROW_SPACING_Y + ROW_SPACING_Y * i as f32);
            let id = circuit.add_node(GateKind::Output, position);
            circuit.set_label(&id, format!("OUT {}", i));
        }
        circuit
    }

    /// Build a board from a parsed description.
    ///
    /// Gate names in the document become node labels. Wires and presets
    /// resolve against those names.
    pub fn from_doc(doc: &CircuitDoc) -> Result<Self> {
        let mut circuit = Circuit::new();
        let mut names: HashMap<&str, NodeId> = HashMap::new();

        for gate in &doc.gates {
            if names.contains_key(gate.name.as_str()) {
                return Err(ArchitectError::DuplicateGate {
                    name: gate.name.clone(),
                    line: gate.line,
                });
            }
            let id = circuit.add_node(gate.kind, gate.position.unwrap_or_default());
            circuit.set_label(&id, gate.name.clone());
            names.insert(gate.name.as_str(), id);
        }

        for wire in &doc.wires {
            let source = names
                .get(wire.source.as_str())
                .cloned()
                .ok_or_else(|| ArchitectError::UnknownGate {
                    name: wire.source.clone(),
                    line: wire.line,
                })?;
            let target = names
                .get(wire.target.as_str())
                .cloned()
                .ok_or_else(|| ArchitectError::UnknownGate {
                    name: wire.target.clone(),
                    line: wire.line,
                })?;
            circuit.connect(&source, wire.source_pin, &target, wire.target_pin)?;
        }

        for preset in &doc.presets {
            let id = names
                .get(preset.name.as_str())
                .cloned()
                .ok_or_else(|| ArchitectError::UnknownGate {
                    name: preset.name.clone(),
                    line: preset.line,
                })?;
            circuit.toggle_switch(&id)?;
        }

        Ok(circuit)
    }

    /// Place a new node. All pins start low; switches start off.
    pub fn add_node(&mut self, kind: GateKind, position: Position) -> NodeId {
        let id = NodeId(format!("n{}", self.next_node));
        self.next_node += 1;
        self.nodes.push(Node::new(id.clone(), kind, position));
        id
    }

    /// Delete a node. Every wire touching it goes with it.
    pub fn delete_node(&mut self, id: &NodeId) -> Result<()> {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != *id);
        if self.nodes.len() == before {
            return Err(ArchitectError::NodeNotFound { id: id.to_string() });
        }
        self.connections
            .retain(|c| c.source != *id && c.target != *id);
        Ok(())
    }

    /// Move a node on the canvas. Does not affect the signal fabric.
    pub fn move_node(&mut self, id: &NodeId, position: Position) -> Result<()> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| ArchitectError::NodeNotFound { id: id.to_string() })?;
        node.position = position;
        Ok(())
    }

    /// Flip a switch. Returns the new state.
    ///
    /// This is the only way a switch's state changes; the engine never
    /// writes it.
    pub fn toggle_switch(&mut self, id: &NodeId) -> Result<bool> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| ArchitectError::NodeNotFound { id: id.to_string() })?;
        if node.kind != GateKind::Input {
            return Err(ArchitectError::NotASwitch { id: id.to_string() });
        }
        node.state = !node.state;
        Ok(node.state)
    }

    /// Wire an output pin to an input pin.
    ///
    /// Self-loops are rejected. An input pin accepts a single driver, so a
    /// wire already ending on the target pin is evicted first (the newest
    /// wiring gesture wins).
    pub fn connect(
        &mut self,
        source: &NodeId,
        source_pin: usize,
        target: &NodeId,
        target_pin: usize,
    ) -> Result<WireId> {
        if source == target {
            return Err(ArchitectError::SelfLoop {
                id: source.to_string(),
            });
        }

        let source_node = self
            .node(source)
            .ok_or_else(|| ArchitectError::NodeNotFound {
                id: source.to_string(),
            })?;
        if source_pin >= source_node.kind.output_count() {
            return Err(ArchitectError::NoSuchOutputPin {
                id: source.to_string(),
                pin: source_pin,
            });
        }

        let target_node = self
            .node(target)
            .ok_or_else(|| ArchitectError::NodeNotFound {
                id: target.to_string(),
            })?;
        if target_pin >= target_node.kind.input_count() {
            return Err(ArchitectError::NoSuchInputPin {
                id: target.to_string(),
                pin: target_pin,
            });
        }

        self.connections
            .retain(|c| !(c.target == *target && c.target_pin == target_pin));

        let id = WireId(format!("w{}", self.next_wire));
        self.next_wire += 1;
        self.connections.push(Connection {
            id: id.clone(),
            source: source.clone(),
            source_pin,
            target: target.clone(),
            target_pin,
            state: false,
        });
        Ok(id)
    }

    /// Remove a wire.
    pub fn disconnect(&mut self, id: &WireId) -> Result<()> {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != *id);
        if self.connections.len() == before {
            return Err(ArchitectError::WireNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Look up a node by id, mutably.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == *id)
    }

    /// Look up a wire by id.
    pub fn wire(&self, id: &WireId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == *id)
    }

    /// Look up a node by display label.
    pub fn labeled(&self, label: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.label.as_deref() == Some(label))
    }

    /// Set a node's display label.
    pub fn set_label(&mut self, id: &NodeId, label: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.label = Some(label.into());
        }
    }

    /// Nodes of one kind, ordered top to bottom on the canvas.
    ///
    /// Truth table columns bind to switches and lights in this order. Ties
    /// keep placement order (the sort is stable).
    pub fn ordered_by_height(&self, kind: GateKind) -> Vec<&Node> {
        let mut picked: Vec<&Node> = self.nodes.iter().filter(|n| n.kind == kind).collect();
        picked.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_initializes_pins() {
        let mut circuit = Circuit::new();
        let id = circuit.add_node(GateKind::And, Position::new(10.0, 20.0));
        let node = circuit.node(&id).unwrap();
        assert_eq!(node.inputs, vec![false, false]);
        assert_eq!(node.outputs, vec![false]);
        assert!(!node.state);
        assert_eq!(node.position, Position::new(10.0, 20.0));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut circuit = Circuit::new();
        let first = circuit.add_node(GateKind::Not, Position::default());
        circuit.delete_node(&first).unwrap();
        let second = circuit.add_node(GateKind::Not, Position::default());
        assert_ne!(first, second);
    }

    #[test]
    fn test_connect_rejects_self_loop() {
        let mut circuit = Circuit::new();
        let gate = circuit.add_node(GateKind::Not, Position::default());
        let err = circuit.connect(&gate, 0, &gate, 0).unwrap_err();
        assert!(matches!(err, ArchitectError::SelfLoop { .. }));
        assert!(circuit.connections.is_empty());
    }

    #[test]
    fn test_connect_validates_pin_indices() {
        let mut circuit = Circuit::new();
        let switch = circuit.add_node(GateKind::Input, Position::default());
        let light = circuit.add_node(GateKind::Output, Position::default());

        // Lights have no output pins, switches no input pins.
        assert!(matches!(
            circuit.connect(&light, 0, &switch, 0),
            Err(ArchitectError::NoSuchOutputPin { .. })
        ));
        assert!(matches!(
            circuit.connect(&switch, 0, &light, 1),
            Err(ArchitectError::NoSuchInputPin { .. })
        ));
        assert!(circuit.connect(&switch, 0, &light, 0).is_ok());
    }

    #[test]
    fn test_second_driver_evicts_first() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(GateKind::Input, Position::default());
        let b = circuit.add_node(GateKind::Input, Position::default());
        let gate = circuit.add_node(GateKind::And, Position::default());

        circuit.connect(&a, 0, &gate, 0).unwrap();
        circuit.connect(&b, 0, &gate, 0).unwrap();

        let drivers: Vec<_> = circuit
            .connections
            .iter()
            .filter(|c| c.target == gate && c.target_pin == 0)
            .collect();
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].source, b);
    }

    #[test]
    fn test_delete_node_cascades_wires() {
        let mut circuit = Circuit::new();
        let switch = circuit.add_node(GateKind::Input, Position::default());
        let gate = circuit.add_node(GateKind::Not, Position::default());
        let light = circuit.add_node(GateKind::Output, Position::default());
        circuit.connect(&switch, 0, &gate, 0).unwrap();
        circuit.connect(&gate, 0, &light, 0).unwrap();

        circuit.delete_node(&gate).unwrap();

        assert!(circuit.connections.is_empty());
        assert_eq!(circuit.nodes.len(), 2);
    }

    #[test]
    fn test_toggle_switch() {
        let mut circuit = Circuit::new();
        let switch = circuit.add_node(GateKind::Input, Position::default());
        let gate = circuit.add_node(GateKind::Xor, Position::default());

        assert!(circuit.toggle_switch(&switch).unwrap());
        assert!(!circuit.toggle_switch(&switch).unwrap());
        assert!(matches!(
            circuit.toggle_switch(&gate),
            Err(ArchitectError::NotASwitch { .. })
        ));
    }

    #[test]
    fn test_ordered_by_height_is_stable() {
        let mut circuit = Circuit::new();
        let low = circuit.add_node(GateKind::Input, Position::new(0.0, 300.0));
        let high = circuit.add_node(GateKind::Input, Position::new(0.0, 100.0));
        let tied = circuit.add_node(GateKind::Input, Position::new(50.0, 100.0));

        let ordered: Vec<_> = circuit
            .ordered_by_height(GateKind::Input)
            .iter()
            .map(|n| n.id.clone())
            .collect();
        assert_eq!(ordered, vec![high, tied, low]);
    }

    #[test]
    fn test_from_doc_builds_a_board() {
        let doc = crate::dsl::parse(
            "IN a 50 100\nNOT inv 300 100\nOUT led 800 100\n\
             WIRE a 0 inv 0\nWIRE inv 0 led 0\nON a",
        )
        .unwrap();
        let circuit = Circuit::from_doc(&doc).unwrap();

        assert_eq!(circuit.nodes.len(), 3);
        assert_eq!(circuit.connections.len(), 2);
        let switch = circuit.labeled("a").unwrap();
        assert_eq!(switch.kind, GateKind::Input);
        assert!(switch.state, "ON preset should flip the switch");
        assert_eq!(circuit.labeled("inv").unwrap().kind, GateKind::Not);
    }

    #[test]
    fn test_from_doc_rejects_duplicate_names() {
        let doc = crate::dsl::parse("IN a 0 0\nOUT a 0 0").unwrap();
        assert!(matches!(
            Circuit::from_doc(&doc),
            Err(ArchitectError::DuplicateGate { line: 2, .. })
        ));
    }

    #[test]
    fn test_from_doc_rejects_unknown_wire_endpoint() {
        let doc = crate::dsl::parse("IN a 0 0\nWIRE a 0 ghost 0").unwrap();
        assert!(matches!(
            Circuit::from_doc(&doc),
            Err(ArchitectError::UnknownGate { ref name, line: 2 }) if name == "ghost"
        ));
    }

    #[test]
    fn test_from_doc_board_verifies_end_to_end() {
        // Inverter board straight from text to a graded pass.
        let doc = crate::dsl::parse(
            ".level 2\nIN a 50 100\nNOT inv 300 100\nOUT led 800 100\n\
             WIRE a 0 inv 0\nWIRE inv 0 led 0",
        )
        .unwrap();
        let level = crate::level::builtin_level(doc.level.unwrap()).unwrap();
        let mut circuit = Circuit::from_doc(&doc).unwrap();
        assert!(crate::engine::verify(&mut circuit, &level.truth_table));
    }

    #[test]
    fn test_for_level_places_switches_and_lights() {
        let level = crate::level::builtin_level(3).unwrap();
        let circuit = Circuit::for_level(&level);

        let switches = circuit.ordered_by_height(GateKind::Input);
        let lights = circuit.ordered_by_height(GateKind::Output);
        assert_eq!(switches.len(), 2);
        assert_eq!(lights.len(), 1);
        assert_eq!(switches[0].label.as_deref(), Some("IN 0"));
        assert_eq!(lights[0].label.as_deref(), Some("OUT 0"));
        assert!(switches[0].position.y < switches[1].position.y);
    }
}
