//! Core position primitives.
//!
//! Pure integer arithmetic over the dispute game tree. Every value here is
//! `Copy` and every operation returns a new value.

pub mod bits;
pub mod position;
pub mod moves;

// Re-export core types
pub use bits::{msb_index, MAX_POSITION_DEPTH};
pub use position::{Position, PositionError, PositionReport};
pub use moves::MoveKind;
