//! The color-swap tower puzzle.
//!
//! The board has `2 * disk_count` rows and three pegs. Pegs 0 and 1 start with
//! `disk_count` disks each in the bottom half, sizes descending from
//! `disk_count` at the base to 1 on top, colors alternating by row so every
//! row holds one blue and one red disk. Peg 2 starts empty.
//!
//! A top disk may move onto an empty peg, or onto a peg whose top disk is at
//! least as large. Color never restricts movement. The puzzle is solved when
//! the bottom half of peg 0 is all red and the bottom half of peg 1 all blue.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::disks::{Color, Disk, DEFAULT_DISK_COUNT, GOAL_COLORS, PEG_COUNT};
use crate::error::{IllegalMove, LayoutError};
use crate::geometry::{Move, Position};
use crate::grid::Grid;
use crate::PuzzleState;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TowerPuzzle {
    grid: Grid,
}

impl TowerPuzzle {
    /// The starting board for `disk_count` disks per color.
    pub fn new(disk_count: usize) -> Result<Self, LayoutError> {
        if disk_count == 0 {
            return Err(LayoutError::NoDisks);
        }

        let rows = disk_count * 2;
        let mut grid = Grid::empty(rows);
        let mut size = disk_count as u32;
        let mut blue_left = true;

        for row in (disk_count..rows).rev() {
            let (left, right) = if blue_left {
                (Color::Blue, Color::Red)
            } else {
                (Color::Red, Color::Blue)
            };
            grid.place(Disk::new(left, Position::new(row, 0), size));
            grid.place(Disk::new(right, Position::new(row, 1), size));

            blue_left = !blue_left;
            size -= 1;
        }

        Ok(Self { grid })
    }

    /// Wraps an existing grid, checking the board shape and that no disk floats
    /// above an empty cell.
    pub fn from_grid(grid: Grid) -> Result<Self, LayoutError> {
        if grid.rows() == 0 || grid.rows() % 2 != 0 {
            return Err(LayoutError::RowCount(grid.rows()));
        }
        if let Some(pos) = grid.find_floating() {
            return Err(LayoutError::FloatingDisk {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(Self { grid })
    }

    pub fn disk_count(&self) -> usize {
        self.grid.rows() / 2
    }

    pub fn row_count(&self) -> usize {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The disk at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn disk(&self, pos: Position) -> Disk {
        *self.grid.disk(pos)
    }

    pub fn get(&self, pos: Position) -> Option<Disk> {
        self.grid.get(pos).copied()
    }

    /// Top position of every peg; the base cell for an empty peg.
    pub fn top_disks(&self) -> [Position; PEG_COUNT] {
        self.grid.tops()
    }

    /// Where a disk moving from `from` would land on the peg topped at `top`,
    /// if the move is allowed.
    fn landing_cell(&self, from: Position, top: Position) -> Option<Position> {
        let target = self.grid.disk(top);
        if target.is_empty() {
            // only the base cell of an empty peg can be its top and empty
            return (top.row == self.grid.base_row()).then_some(top);
        }

        let landing = top.above()?;
        let moving = self.grid.disk(from);
        (moving.size() <= target.size() && self.grid.disk(landing).is_empty()).then_some(landing)
    }
}

impl Default for TowerPuzzle {
    fn default() -> Self {
        Self::new(DEFAULT_DISK_COUNT).expect("default disk count is positive")
    }
}

impl PuzzleState for TowerPuzzle {
    type Position = Position;

    fn is_legal_to_move_from(&self, from: Position) -> bool {
        self.get(from).is_some_and(|disk| !disk.is_empty())
    }

    fn legal_moves(&self) -> FxHashSet<Move<Position>> {
        let tops = self.top_disks();
        let mut moves = FxHashSet::default();

        for &from in &tops {
            if self.grid.disk(from).is_empty() {
                continue;
            }
            for &top in &tops {
                if top == from {
                    continue;
                }
                if let Some(to) = self.landing_cell(from, top) {
                    moves.insert(Move::new(from, to));
                }
            }
        }

        moves
    }

    fn make_move(&mut self, mv: &Move<Position>) -> Result<(), IllegalMove<Position>> {
        if !self.is_legal_move(mv) {
            return Err(IllegalMove(*mv));
        }

        let moving = self.disk(mv.from);
        self.grid.vacate(mv.from);
        self.grid.place(moving.moved_to(mv.to));
        Ok(())
    }

    fn is_solved(&self) -> bool {
        (self.disk_count()..self.row_count()).all(|row| {
            GOAL_COLORS
                .iter()
                .enumerate()
                .all(|(col, &goal)| self.disk(Position::new(row, col)).color() == goal)
        })
    }

    fn duplicate(&self) -> Self {
        Self {
            grid: self.grid.clone(),
        }
    }
}

impl fmt::Display for TowerPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

impl FromStr for TowerPuzzle {
    type Err = LayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_grid(Grid::parse(text)?)
    }
}
