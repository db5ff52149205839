//! # Game Position
//!
//! Positions in a bisection dispute game tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    GAME POSITION                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Tree coordinates                         │
//! │  ├── bits.rs     - Most significant bit helpers             │
//! │  ├── position.rs - Position, gindex and trace index         │
//! │  └── moves.rs    - Attack / defend moves                    │
//! │                                                             │
//! │  config.rs       - Max game depth configuration             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coordinates
//!
//! A node is `(depth, index_at_depth)`, or equivalently its generalized
//! index `2^depth | index_at_depth`. Its trace index is the index of its
//! rightmost descendant at the configured max depth.
//!
//! All operations are deterministic and side-effect free, except the
//! diagnostic [`Position::print`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use crate::core::bits::{msb_index, MAX_POSITION_DEPTH};
pub use crate::core::moves::MoveKind;
pub use crate::core::position::{Position, PositionError, PositionReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
