//! Color-swap Tower Puzzle Solver Library
//!
//! Models a three-peg disk puzzle in which two pegs of alternating blue and
//! red disks must be sorted by color, and finds shortest solutions with a
//! breadth-first search that works on any [`PuzzleState`].

pub mod disks;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod report;
pub mod solver;
pub mod tower;

use std::hash::Hash;

use rustc_hash::FxHashSet;

pub use disks::{Color, Disk};
pub use error::{IllegalMove, LayoutError};
pub use geometry::{Move, Position};
pub use solver::{BreadthFirstSolver, SearchStats, SolveOutcome, SolveResult, SolverConfig};
pub use tower::TowerPuzzle;

/// Capabilities a puzzle needs to be searchable.
///
/// Equality and hashing must cover the whole state: the solver treats two
/// states as the same node exactly when they compare equal.
pub trait PuzzleState: Eq + Hash {
    /// Cell coordinate that moves are expressed in.
    type Position: Copy + Eq + Hash;

    /// Whether `from` holds a piece that can be moved.
    fn is_legal_to_move_from(&self, from: Self::Position) -> bool;

    /// Every move applicable to the current state. `make_move` must accept
    /// each of them.
    fn legal_moves(&self) -> FxHashSet<Move<Self::Position>>;

    fn is_legal_move(&self, mv: &Move<Self::Position>) -> bool {
        self.is_legal_to_move_from(mv.from) && self.legal_moves().contains(mv)
    }

    /// Applies `mv`, or leaves the state untouched and returns an error when
    /// the move is not legal.
    fn make_move(&mut self, mv: &Move<Self::Position>)
        -> Result<(), IllegalMove<Self::Position>>;

    fn is_solved(&self) -> bool;

    /// An independent copy; mutating it never affects `self`.
    fn duplicate(&self) -> Self;
}
