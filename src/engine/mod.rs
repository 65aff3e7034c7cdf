//! Signal propagation and grading engine.
//!
//! The engine is a set of pure functions over [`Circuit`](crate::Circuit)
//! snapshots. One [`simulate`] call is one tick: wires copy their source
//! pins, then every gate recomputes its outputs from the freshly written
//! inputs. There is no fixed-point iteration inside a tick, so a signal
//! crosses exactly one node per tick and a chain of N nodes settles after
//! N ticks. [`verify`] drives a working copy of the board through a truth
//! table, settling [`SETTLE_TICKS`] ticks per row.
//!
//! Feedback loops are legal and simply oscillate from tick to tick; the
//! engine neither detects nor rejects them.

mod evaluate;
mod tick;
mod verify;

pub use evaluate::evaluate;
pub use tick::{settle, simulate};
pub use verify::verify;

/// Ticks run per truth table row before the lights are read.
///
/// Covers boards up to this many node levels deep (switch and light
/// included). Deeper boards can grade as failing even when logically
/// correct; callers wanting a deeper settle can run [`settle`] themselves.
pub const SETTLE_TICKS: usize = 5;
