//! WASM bindings for Architect Core.
//!
//! This module provides JavaScript-friendly bindings for the browser UI:
//! a [`WasmWorkbench`] owns the live board and exposes the editing
//! gestures, the tick, and verification.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmWorkbench } from 'architect_core';
//!
//! await init();
//!
//! const bench = new WasmWorkbench(3);          // AND interlock level
//! const gate = bench.add_gate('AND', 400, 150);
//! bench.connect(bench.switch_id(0), 0, gate, 0);
//! bench.connect(bench.switch_id(1), 0, gate, 1);
//! bench.connect(gate, 0, bench.light_id(0), 0);
//!
//! setInterval(() => bench.tick(), 100);        // live propagation
//! const solved = bench.verify();
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Circuit, GateKind, NodeId, Position, WireId};
use crate::engine;
use crate::level::{builtin_level, Level};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible workbench: one live board plus the level it is played on.
#[wasm_bindgen]
pub struct WasmWorkbench {
    circuit: Circuit,
    level: Level,
}

#[wasm_bindgen]
impl WasmWorkbench {
    /// Start a built-in level with its switches and lights pre-placed.
    #[wasm_bindgen(constructor)]
    pub fn new(level_id: u32) -> Result<WasmWorkbench, JsValue> {
        let level = builtin_level(level_id)
            .ok_or_else(|| JsValue::from_str(&format!("no level with id {}", level_id)))?;
        let circuit = Circuit::for_level(&level);
        Ok(WasmWorkbench { circuit, level })
    }

    /// Build a workbench from a board description string.
    ///
    /// The board's `.level` directive picks the level (defaults to 1).
    pub fn from_board(source: &str) -> Result<WasmWorkbench, JsValue> {
        let doc = crate::dsl::parse(source).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let level_id = doc.level.unwrap_or(1);
        let level = builtin_level(level_id)
            .ok_or_else(|| JsValue::from_str(&format!("no level with id {}", level_id)))?;
        let circuit = Circuit::from_doc(&doc).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmWorkbench { circuit, level })
    }

    /// Place a gate. Returns the new node's id.
    pub fn add_gate(&mut self, kind: &str, x: f32, y: f32) -> Result<String, JsValue> {
        let kind = GateKind::from_keyword(kind)
            .ok_or_else(|| JsValue::from_str(&format!("unknown gate kind '{}'", kind)))?;
        let id = self.circuit.add_node(kind, Position::new(x, y));
        Ok(id.to_string())
    }

    /// Move a gate on the canvas.
    pub fn move_gate(&mut self, id: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.circuit
            .move_node(&NodeId(id.to_string()), Position::new(x, y))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Delete a gate and every wire touching it.
    pub fn remove_gate(&mut self, id: &str) -> Result<(), JsValue> {
        self.circuit
            .delete_node(&NodeId(id.to_string()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Wire an output pin to an input pin. Returns the wire's id.
    pub fn connect(
        &mut self,
        source: &str,
        source_pin: usize,
        target: &str,
        target_pin: usize,
    ) -> Result<String, JsValue> {
        self.circuit
            .connect(
                &NodeId(source.to_string()),
                source_pin,
                &NodeId(target.to_string()),
                target_pin,
            )
            .map(|id| id.to_string())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Remove a wire.
    pub fn disconnect(&mut self, id: &str) -> Result<(), JsValue> {
        self.circuit
            .disconnect(&WireId(id.to_string()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Flip a switch. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, JsValue> {
        self.circuit
            .toggle_switch(&NodeId(id.to_string()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance the live board by one propagation tick.
    pub fn tick(&mut self) {
        self.circuit = engine::simulate(&self.circuit);
    }

    /// Grade the board against the level's truth table.
    ///
    /// Runs on a private copy; the live board and its switch positions are
    /// untouched afterwards.
    pub fn verify(&mut self) -> bool {
        engine::verify(&mut self.circuit, &self.level.truth_table)
    }

    /// A node's state: switch position for switches, lit for lights.
    pub fn gate_state(&self, id: &str) -> Option<bool> {
        self.circuit.node(&NodeId(id.to_string())).map(|n| n.state)
    }

    /// Whether a wire currently carries a high signal.
    pub fn wire_high(&self, id: &str) -> Option<bool> {
        self.circuit.wire(&WireId(id.to_string())).map(|c| c.state)
    }

    /// Id of the i-th switch, counted top to bottom.
    pub fn switch_id(&self, index: usize) -> Option<String> {
        self.circuit
            .ordered_by_height(GateKind::Input)
            .get(index)
            .map(|n| n.id.to_string())
    }

    /// Id of the i-th light, counted top to bottom.
    pub fn light_id(&self, index: usize) -> Option<String> {
        self.circuit
            .ordered_by_height(GateKind::Output)
            .get(index)
            .map(|n| n.id.to_string())
    }

    /// The level's display name.
    #[wasm_bindgen(getter)]
    pub fn level_name(&self) -> String {
        self.level.name.clone()
    }

    /// The level's goal line, for the HUD and the hint assistant.
    #[wasm_bindgen(getter)]
    pub fn level_goal(&self) -> String {
        self.level.goal.clone()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the live tick period the UI should run, in milliseconds.
#[wasm_bindgen]
pub fn tick_interval_ms() -> u32 {
    crate::TICK_INTERVAL_MS as u32
}
