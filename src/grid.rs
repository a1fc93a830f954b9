//! Grid representation and operations for peg boards.
//!
//! The grid is a flat, row-major array of `PEG_COUNT` columns. Each cell holds
//! a [`Disk`], with vacant cells holding an empty marker. Row 0 is the top slot
//! of every peg and the last row is its base.

use std::fmt;

use crate::disks::{Color, Disk, PEG_COUNT};
use crate::error::LayoutError;
use crate::geometry::Position;

/// Converts a position to a linear cell index.
///
/// Index order is row-major: `idx = row * PEG_COUNT + col`.
#[inline(always)]
pub const fn pos_to_idx(pos: Position) -> usize {
    pos.row * PEG_COUNT + pos.col
}

/// Converts a linear cell index to a position.
#[inline(always)]
pub const fn idx_to_pos(cell_index: usize) -> Position {
    Position::new(cell_index / PEG_COUNT, cell_index % PEG_COUNT)
}

/// Cell storage for a board of `rows x PEG_COUNT` disks.
///
/// Equality and hashing cover every cell, so two grids are the same search
/// node exactly when they hold the same disks in the same places.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cells: Vec<Disk>,
}

impl Grid {
    /// An all-empty grid with `rows` rows.
    pub fn empty(rows: usize) -> Self {
        let cells = (0..rows * PEG_COUNT)
            .map(|idx| Disk::empty(idx_to_pos(idx)))
            .collect();
        Self { rows, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row index of every peg's base.
    #[inline]
    pub fn base_row(&self) -> usize {
        self.rows - 1
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < PEG_COUNT
    }

    pub fn get(&self, pos: Position) -> Option<&Disk> {
        if self.contains(pos) {
            Some(&self.cells[pos_to_idx(pos)])
        } else {
            None
        }
    }

    /// The disk at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[inline]
    pub fn disk(&self, pos: Position) -> &Disk {
        assert!(
            self.contains(pos),
            "position {pos} outside {}x{PEG_COUNT} board",
            self.rows
        );
        &self.cells[pos_to_idx(pos)]
    }

    /// Stores `disk` in the cell named by its own position.
    pub fn place(&mut self, disk: Disk) {
        let pos = disk.position();
        assert!(self.contains(pos), "position {pos} outside board");
        self.cells[pos_to_idx(pos)] = disk;
    }

    /// Replaces the disk at `pos` with an empty marker.
    pub fn vacate(&mut self, pos: Position) {
        self.place(Disk::empty(pos));
    }

    /// The top of column `col`: its highest occupied cell, or the base cell
    /// when the column is empty.
    pub fn top_of(&self, col: usize) -> Position {
        (0..self.rows)
            .map(|row| Position::new(row, col))
            .find(|&pos| !self.disk(pos).is_empty())
            .unwrap_or(Position::new(self.base_row(), col))
    }

    /// Top positions of all columns, in column order.
    pub fn tops(&self) -> [Position; PEG_COUNT] {
        std::array::from_fn(|col| self.top_of(col))
    }

    /// Finds the first occupied cell sitting above an empty one.
    ///
    /// Returns `None` when every column is a contiguous stack ending at the base.
    pub fn find_floating(&self) -> Option<Position> {
        (0..PEG_COUNT).find_map(|col| {
            (0..self.base_row())
                .map(|row| Position::new(row, col))
                .find(|&pos| {
                    let below = Position::new(pos.row + 1, col);
                    !self.disk(pos).is_empty() && self.disk(below).is_empty()
                })
        })
    }

    /// Parses the text produced by the `Display` impl.
    ///
    /// Each non-blank line is one row, top row first, holding `PEG_COUNT`
    /// whitespace-separated cells: `..` for empty, or a color tag followed by
    /// a positive size (`B4`, `R1`).
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(LayoutError::RowCount(0));
        }

        let mut grid = Grid::empty(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != PEG_COUNT {
                return Err(LayoutError::ColumnCount {
                    row,
                    found: tokens.len(),
                    expected: PEG_COUNT,
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                let pos = Position::new(row, col);
                let disk = parse_cell(token, pos).ok_or_else(|| LayoutError::BadCell {
                    token: token.to_string(),
                    row,
                    col,
                })?;
                grid.place(disk);
            }
        }

        Ok(grid)
    }
}

/// Parses one cell token into a disk at `pos`.
fn parse_cell(token: &str, pos: Position) -> Option<Disk> {
    if token == ".." || token == "." {
        return Some(Disk::empty(pos));
    }

    let mut chars = token.chars();
    let color = Color::from_tag(chars.next()?)?;
    let size: u32 = chars.as_str().parse().ok()?;
    if size == 0 {
        return None;
    }
    Some(Disk::new(color, pos, size))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(PEG_COUNT) {
            for (col, disk) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{disk}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::parse(
            ".. .. ..
             R1 .. ..
             B2 R2 ..",
        )
        .unwrap()
    }

    #[test]
    fn test_index_conversion_roundtrip() {
        for idx in 0..8 * PEG_COUNT {
            assert_eq!(pos_to_idx(idx_to_pos(idx)), idx);
        }
    }

    #[test]
    fn test_tops() {
        let grid = sample();
        assert_eq!(
            grid.tops(),
            [Position::new(1, 0), Position::new(2, 1), Position::new(2, 2)]
        );
        assert!(grid.disk(grid.top_of(2)).is_empty());
    }

    #[test]
    fn test_parse_reads_disks() {
        let grid = sample();
        let disk = grid.disk(Position::new(1, 0));
        assert_eq!(disk.color(), Color::Red);
        assert_eq!(disk.size(), 1);
        assert_eq!(disk.position(), Position::new(1, 0));
        assert!(grid.disk(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_display_matches_parse_input() {
        insta::assert_snapshot!(sample().to_string(), @r"
        .. .. ..
        R1 .. ..
        B2 R2 ..
        ");
        assert_eq!(Grid::parse(&sample().to_string()).unwrap(), sample());
    }

    #[test]
    fn test_parse_rejects_bad_cells() {
        assert_eq!(
            Grid::parse("B0 .. .."),
            Err(LayoutError::BadCell {
                token: "B0".to_string(),
                row: 0,
                col: 0
            })
        );
        assert!(matches!(
            Grid::parse(".. X1 .."),
            Err(LayoutError::BadCell { col: 1, .. })
        ));
        assert_eq!(
            Grid::parse(".. .."),
            Err(LayoutError::ColumnCount {
                row: 0,
                found: 2,
                expected: PEG_COUNT
            })
        );
        assert_eq!(Grid::parse("  \n"), Err(LayoutError::RowCount(0)));
    }

    #[test]
    fn test_find_floating() {
        assert_eq!(sample().find_floating(), None);

        let floating = Grid::parse(
            "R1 .. ..
             .. .. ..",
        )
        .unwrap();
        assert_eq!(floating.find_floating(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_get_outside_is_none() {
        let grid = sample();
        assert!(grid.get(Position::new(3, 0)).is_none());
        assert!(grid.get(Position::new(0, PEG_COUNT)).is_none());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_disk_outside_panics() {
        sample().disk(Position::new(9, 0));
    }
}
