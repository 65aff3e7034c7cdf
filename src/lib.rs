//! # Architect Core
//!
//! The circuit engine behind the Logic Architect puzzle game.
//!
//! This library provides:
//! - A graph model for boards: gate nodes, switches, lights and the wires
//!   between their pins
//! - A discrete, single-pass signal propagation engine
//! - Truth-table verification for grading a player's circuit
//! - A small text format for describing boards without the canvas UI
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Board graph representation, editing operations, validation
//! - [`engine`] - Propagation ticks and truth-table grading
//! - [`level`] - Puzzle definitions and the built-in campaign
//! - [`dsl`] - Parser for the board description format
//!
//! Rendering, pointer handling and hint text are the embedding UI's job:
//! it owns the [`Circuit`], mutates it between ticks through the editing
//! operations, and draws whatever states the engine hands back.
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! architect board.lgc --level 4
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmWorkbench } from 'architect_core';
//!
//! const bench = new WasmWorkbench(3);
//! const gate = bench.add_gate('AND', 400, 150);
//! bench.tick();
//! ```
//!
//! ## Simulation Model
//!
//! Each call to [`engine::simulate`] performs exactly one propagation pass:
//! wires copy their source pins, then every gate recomputes its outputs
//! from its freshly written inputs. A signal therefore crosses one node per
//! tick, and a chain of N nodes settles after N ticks. The UI drives this
//! on a fixed timer (every [`TICK_INTERVAL_MS`] milliseconds) for live
//! feedback while the player edits.
//!
//! Verification runs [`engine::SETTLE_TICKS`] ticks per truth table row on
//! a private copy of the board, so boards deeper than that many node
//! levels (switch and light included) can grade as failing even when
//! logically correct. Feedback loops are allowed and oscillate instead of
//! settling.

pub mod circuit;
pub mod dsl;
pub mod engine;
pub mod error;
pub mod level;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use engine::{settle, simulate, verify};
pub use error::{ArchitectError, Result};
pub use level::{builtin_level, builtin_levels, Level, TruthRow};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmWorkbench;

/// Period of the live simulation timer the UI is expected to run, in
/// milliseconds (10 Hz).
pub const TICK_INTERVAL_MS: u64 = 100;
