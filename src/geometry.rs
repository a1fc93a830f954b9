//! Board coordinates and moves.
//!
//! Rows count downward from the top slot of a peg (row 0) to its base,
//! columns are pegs numbered from the left.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by row and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell directly above this one, or `None` on the top row.
    #[inline]
    pub fn above(self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self::new(row, self.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Relocation of the piece at `from` to `to`.
///
/// Only meaningful relative to the board it was generated for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Move<P> {
    pub from: P,
    pub to: P,
}

impl<P> Move<P> {
    pub const fn new(from: P, to: P) -> Self {
        Self { from, to }
    }
}

impl<P: fmt::Display> fmt::Display for Move<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
