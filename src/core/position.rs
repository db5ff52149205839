//! Dispute Game Tree Positions
//!
//! A claim in a bisection game sits at a node of a complete binary tree.
//! The same node can be addressed three ways:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  depth 0            1                  gindex = 0b1         │
//! │                   /   \                                     │
//! │  depth 1         2     3               gindex = 0b1x        │
//! │                 / \   / \                                   │
//! │  depth 2       4   5 6   7             gindex = 0b1xx       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  (depth, index_at_depth)  - explicit coordinates            │
//! │  gindex                   - leading 1 then the path bits    │
//! │  trace index              - rightmost leaf at max depth     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All navigation returns a new `Position`. Operations that would leave
//! the tree (parent of the root, an index past the end of its depth, a
//! depth whose gindex no longer fits in a `u64`) return a [`PositionError`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::bits::{low_mask, msb_index, MAX_POSITION_DEPTH};

/// Position errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// Generalized index 0 does not name a node.
    #[error("generalized index 0 has no position")]
    ZeroGIndex,

    /// The root has no parent.
    #[error("root position has no parent")]
    RootHasNoParent,

    /// Index does not fit at its depth.
    #[error("index {index_at_depth} out of range at depth {depth}")]
    IndexOutOfRange {
        /// Depth of the rejected position.
        depth: u32,
        /// Rejected index.
        index_at_depth: u64,
    },

    /// Depth past what a `u64` gindex can encode.
    #[error("depth {depth} exceeds maximum of {}", MAX_POSITION_DEPTH)]
    DepthOverflow {
        /// Rejected depth.
        depth: u32,
    },

    /// Trace index requested for a position deeper than the trace.
    #[error("position at depth {depth} is below max depth {max_depth}")]
    BelowMaxDepth {
        /// Depth of the position.
        depth: u32,
        /// Requested trace depth.
        max_depth: u32,
    },
}

/// A node in the dispute game tree.
///
/// Ordering is breadth-first (depth, then index), which is the same as
/// ordering by generalized index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    depth: u32,
    index_at_depth: u64,
}

/// Unvalidated wire form, checked on deserialize.
#[derive(Deserialize)]
struct RawPosition {
    depth: u32,
    index_at_depth: u64,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::try_new(raw.depth, raw.index_at_depth)
    }
}

impl Position {
    /// Create a position without checking `index_at_depth < 2^depth`.
    #[inline]
    pub const fn new(depth: u32, index_at_depth: u64) -> Self {
        Self {
            depth,
            index_at_depth,
        }
    }

    /// Create a position, rejecting coordinates outside the tree.
    pub fn try_new(depth: u32, index_at_depth: u64) -> Result<Self, PositionError> {
        if depth > MAX_POSITION_DEPTH {
            return Err(PositionError::DepthOverflow { depth });
        }
        if index_at_depth >> depth != 0 {
            return Err(PositionError::IndexOutOfRange {
                depth,
                index_at_depth,
            });
        }
        Ok(Self::new(depth, index_at_depth))
    }

    /// The root position (0, 0).
    #[inline]
    pub const fn root() -> Self {
        Self::new(0, 0)
    }

    /// Decode a generalized index.
    ///
    /// The highest set bit gives the depth; the bits below it are the index.
    pub fn from_gindex(gindex: u64) -> Result<Self, PositionError> {
        if gindex == 0 {
            return Err(PositionError::ZeroGIndex);
        }
        let depth = msb_index(gindex);
        let index_at_depth = gindex & !(1u64 << depth);
        Ok(Self::new(depth, index_at_depth))
    }

    /// Distance from the root.
    #[inline]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Rank among the nodes at this depth, left to right.
    #[inline]
    pub const fn index_at_depth(&self) -> u64 {
        self.index_at_depth
    }

    /// Generalized index: `2^depth | index_at_depth`.
    #[inline]
    pub fn to_gindex(&self) -> u64 {
        debug_assert!(self.depth <= MAX_POSITION_DEPTH);
        (1u64 << self.depth) | self.index_at_depth
    }

    /// True only for (0, 0).
    #[inline]
    pub const fn is_root(&self) -> bool {
        self.depth == 0 && self.index_at_depth == 0
    }

    /// Whether the coordinates lie inside the tree.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.depth <= MAX_POSITION_DEPTH && self.index_at_depth >> self.depth == 0
    }

    /// Index of this claim's value inside a trace of depth `max_depth`.
    ///
    /// Equivalent to going right until `max_depth` is reached: every step
    /// shifts left and sets the low bit, so all shifts happen at once and
    /// the remaining low bits are filled with ones.
    pub fn trace_index(&self, max_depth: u32) -> Result<u64, PositionError> {
        if max_depth > MAX_POSITION_DEPTH {
            return Err(PositionError::DepthOverflow { depth: max_depth });
        }
        if self.depth > max_depth {
            return Err(PositionError::BelowMaxDepth {
                depth: self.depth,
                max_depth,
            });
        }
        let rd = max_depth - self.depth;
        Ok((self.index_at_depth << rd) | low_mask(rd))
    }

    /// Next position to the right at the same depth.
    pub fn move_right(&self) -> Result<Self, PositionError> {
        if self.depth > MAX_POSITION_DEPTH {
            return Err(PositionError::DepthOverflow { depth: self.depth });
        }
        let next = self.index_at_depth.wrapping_add(1);
        if next == 0 || next >> self.depth != 0 {
            return Err(PositionError::IndexOutOfRange {
                depth: self.depth,
                index_at_depth: next,
            });
        }
        Ok(Self::new(self.depth, next))
    }

    /// Left (`right == false`) or right child.
    fn child(&self, right: bool) -> Result<Self, PositionError> {
        let depth = self.depth.saturating_add(1);
        if depth > MAX_POSITION_DEPTH {
            return Err(PositionError::DepthOverflow { depth });
        }
        Ok(Self::new(depth, (self.index_at_depth << 1) | u64::from(right)))
    }

    /// Parent position.
    pub fn parent(&self) -> Result<Self, PositionError> {
        if self.depth == 0 {
            return Err(PositionError::RootHasNoParent);
        }
        Ok(Self::new(self.depth - 1, self.index_at_depth >> 1))
    }

    /// Attack position: the left child.
    #[inline]
    pub fn attack(&self) -> Result<Self, PositionError> {
        self.child(false)
    }

    /// Defend position: left child of the parent's right child.
    ///
    /// For a right child this is its own left child; for a left child it is
    /// the left child of its right sibling.
    pub fn defend(&self) -> Result<Self, PositionError> {
        self.parent()?.child(true)?.child(false)
    }

    /// Diagnostic summary relative to a trace of depth `max_depth`.
    ///
    /// The trace index is computed first: it rejects any depth past
    /// `max_depth`, so `to_gindex` only sees depths that fit.
    pub fn report(&self, max_depth: u32) -> Result<PositionReport, PositionError> {
        let trace_index = self.trace_index(max_depth)?;
        Ok(PositionReport {
            gindex: self.to_gindex(),
            index_at_depth: self.index_at_depth,
            depth: self.depth,
            trace_index,
        })
    }

    /// Log the diagnostic summary.
    pub fn print(&self, max_depth: u32) {
        match self.report(max_depth) {
            Ok(report) => info!("{}", report),
            Err(e) => warn!("cannot report {}: {}", self, e),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.depth, self.index_at_depth)
    }
}

impl TryFrom<u64> for Position {
    type Error = PositionError;

    fn try_from(gindex: u64) -> Result<Self, Self::Error> {
        Self::from_gindex(gindex)
    }
}

impl From<Position> for u64 {
    fn from(position: Position) -> Self {
        position.to_gindex()
    }
}

/// Snapshot of a position's coordinates for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionReport {
    /// Generalized index.
    pub gindex: u64,
    /// Index at depth.
    pub index_at_depth: u64,
    /// Depth.
    pub depth: u32,
    /// Trace index at the requested max depth.
    pub trace_index: u64,
}

impl fmt::Display for PositionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GIN: {:4b}\tTrace Position is {:4b}\tTrace Depth is: {}\tTrace Index is: {}",
            self.gindex, self.index_at_depth, self.depth, self.trace_index
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
