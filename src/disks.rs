//! Disk definitions and puzzle constants.
//!
//! A disk is an immutable occupancy marker for one cell: its color, the cell
//! it sits in, and its size. Empty cells hold an `Empty` disk of size 0.

use std::fmt;

use crate::geometry::Position;

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;

/// Disks per color in the standard puzzle.
pub const DEFAULT_DISK_COUNT: usize = 4;

/// Largest disk count the CLI accepts; the state space grows roughly tenfold
/// per extra disk.
pub const MAX_DISK_COUNT: usize = 8;

/// Colors the two primary pegs must end with, indexed by column.
pub const GOAL_COLORS: [Color; 2] = [Color::Red, Color::Blue];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Blue,
    Red,
    Empty,
}

impl Color {
    /// Single-letter tag used in board text.
    pub fn tag(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Empty => '.',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'B' | 'b' => Some(Color::Blue),
            'R' | 'r' => Some(Color::Red),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disk {
    color: Color,
    position: Position,
    size: u32,
}

impl Disk {
    /// A disk of `color` and `size` at `position`.
    ///
    /// `size` must be positive for a real disk; use [`Disk::empty`] for
    /// vacant cells.
    pub const fn new(color: Color, position: Position, size: u32) -> Self {
        Self {
            color,
            position,
            size,
        }
    }

    /// The marker for a vacant cell.
    pub const fn empty(position: Position) -> Self {
        Self::new(Color::Empty, position, 0)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.color == Color::Empty
    }

    /// Same color and size, relocated to `position`.
    pub fn moved_to(&self, position: Position) -> Self {
        Self::new(self.color, position, self.size)
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("..")
        } else {
            write!(f, "{}{}", self.color.tag(), self.size)
        }
    }
}
