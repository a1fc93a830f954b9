//! Error types for move application and board layouts.
//!
//! Search exhaustion is not an error; see `solver::SolveOutcome`.

use crate::geometry::Move;

/// A move that is not in the board's legal move set.
///
/// The board is left unchanged when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal move {0}")]
pub struct IllegalMove<P>(pub Move<P>);

/// Errors that can occur when building a board from a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("disk count must be at least 1")]
    NoDisks,

    #[error("board must have a positive, even number of rows (got {0})")]
    RowCount(usize),

    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnCount {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("invalid cell {token:?} at row {row}, column {col}")]
    BadCell {
        token: String,
        row: usize,
        col: usize,
    },

    #[error("floating disk at row {row}, column {col}")]
    FloatingDisk { row: usize, col: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    #[test]
    fn test_illegal_move_display() {
        let err = IllegalMove(Move::new(Position::new(4, 0), Position::new(4, 1)));
        assert_eq!(err.to_string(), "illegal move (4, 0) -> (4, 1)");
    }

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::BadCell {
            token: "X9".to_string(),
            row: 2,
            col: 1,
        };
        assert_eq!(err.to_string(), "invalid cell \"X9\" at row 2, column 1");
        assert_eq!(
            LayoutError::RowCount(3).to_string(),
            "board must have a positive, even number of rows (got 3)"
        );
    }
}
