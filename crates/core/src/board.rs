//! Board module - manages the game grid
//!
//! The board is a fixed `width` x `height` grid of cells, addressed as (x, y)
//! with x growing to the right and y growing downwards (row 0 is the top).
//!
//! Boards are values: every operation takes `&self` and returns a new board.
//! Rows are reference counted and immutable, so rows an operation does not
//! touch are shared between the old and the new board instead of copied.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::minos::Mino;
use crate::types::{Cell, MinoColor, Offset};

type Row = Arc<[Cell]>;

/// Board axis named in bound violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// The bound an offset violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    AtLeast(i64),
    AtMost(i64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::AtLeast(min) => write!(f, "greater than or equal to {min}"),
            Bound::AtMost(max) => write!(f, "less than {max}"),
        }
    }
}

/// Why a mino cannot be stamped at an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{axis} offset must be {bound} (was {value})")]
    OutOfBounds { axis: Axis, bound: Bound, value: i32 },
    #[error("cannot place over existing filled cell at [{x}, {y}]")]
    Collision { x: usize, y: usize },
}

/// Errors from constructing a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("board row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// How [`Board::stamp_with`] treats an invalid placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampMode {
    /// Reject out-of-bounds and overlapping placements
    Strict,
    /// Draw whatever lands inside the board, overwriting existing cells
    Preview,
}

/// The game board - immutable grid of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<Row>,
}

fn extent(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl Board {
    /// Create an empty board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }
        let empty: Row = vec![None; width].into();
        Ok(Self {
            width,
            height,
            rows: vec![empty; height],
        })
    }

    /// Create a board from explicit rows
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(BoardError::Ragged {
                row,
                len: cells.len(),
                expected: width,
            });
        }
        Ok(Self {
            width,
            height,
            rows: rows.into_iter().map(Row::from).collect(),
        })
    }

    /// An empty board with the same dimensions
    pub fn emptied(&self) -> Self {
        let empty: Row = vec![None; self.width].into();
        Self {
            width: self.width,
            height: self.height,
            rows: vec![empty; self.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(|row| &row[..])
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|row| &row[..])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Number of filled cells on the board
    pub fn filled_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Number of all-empty rows above the topmost filled cell
    pub fn empty_rows_from_top(&self) -> usize {
        self.rows
            .iter()
            .take_while(|row| row.iter().all(Option::is_none))
            .count()
    }

    /// Check that `mino` can be stamped at `offset`
    ///
    /// Bounds are checked first (y min, y max, x min, x max), then occupied
    /// mino cells in row-major order; the first failure is reported.
    pub fn validate(&self, mino: &Mino, offset: Offset) -> Result<(), PlacementError> {
        let max_y = extent(self.height) - extent(mino.height());
        let max_x = extent(self.width) - extent(mino.width());

        let checks = [
            (Axis::Y, offset.y, Bound::AtLeast(0)),
            (Axis::Y, offset.y, Bound::AtMost(max_y)),
            (Axis::X, offset.x, Bound::AtLeast(0)),
            (Axis::X, offset.x, Bound::AtMost(max_x)),
        ];
        for (axis, value, bound) in checks {
            let violated = match bound {
                Bound::AtLeast(min) => i64::from(value) < min,
                Bound::AtMost(max) => i64::from(value) > max,
            };
            if violated {
                return Err(PlacementError::OutOfBounds { axis, bound, value });
            }
        }

        // In bounds, so both components are non-negative and fit the board.
        let (ox, oy) = (offset.x as usize, offset.y as usize);
        for (col, row) in mino.filled_cells() {
            let (x, y) = (ox + col, oy + row);
            if self.rows[y][x].is_some() {
                return Err(PlacementError::Collision { x, y });
            }
        }

        Ok(())
    }

    /// Whether [`Board::stamp`] would accept this placement
    pub fn can_place(&self, mino: &Mino, offset: Offset) -> bool {
        self.validate(mino, offset).is_ok()
    }

    /// Lock a mino into a copy of the board
    ///
    /// Fails without producing anything if the mino leaves the board or
    /// overlaps a filled cell.
    pub fn stamp(
        &self,
        mino: &Mino,
        color: MinoColor,
        offset: Offset,
    ) -> Result<Board, PlacementError> {
        self.stamp_with(mino, color, offset, StampMode::Strict)
    }

    /// Draw a mino over a copy of the board without validation
    ///
    /// Used for showing the floating piece. Cells outside the board are
    /// dropped and filled cells underneath are overwritten.
    pub fn stamp_preview(&self, mino: &Mino, color: MinoColor, offset: Offset) -> Board {
        self.merge(mino, color, offset)
    }

    pub fn stamp_with(
        &self,
        mino: &Mino,
        color: MinoColor,
        offset: Offset,
        mode: StampMode,
    ) -> Result<Board, PlacementError> {
        if mode == StampMode::Strict {
            self.validate(mino, offset)?;
        }
        Ok(self.merge(mino, color, offset))
    }

    fn merge(&self, mino: &Mino, color: MinoColor, offset: Offset) -> Board {
        let mut rows = self.rows.clone();

        for (local_row, mino_row) in mino.rows().enumerate() {
            let y = i64::from(offset.y) + extent(local_row);
            let Some(y) = usize::try_from(y).ok().filter(|&y| y < self.height) else {
                continue;
            };

            let mut row = self.rows[y].to_vec();
            for (local_col, &filled) in mino_row.iter().enumerate() {
                if !filled {
                    continue;
                }
                let x = i64::from(offset.x) + extent(local_col);
                if let Some(x) = usize::try_from(x).ok().filter(|&x| x < self.width) {
                    row[x] = Some(color);
                }
            }
            rows[y] = row.into();
        }

        Board {
            width: self.width,
            height: self.height,
            rows,
        }
    }

    /// Indices of all complete rows, top to bottom
    pub fn complete_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove every complete row and return the new board with the count
    ///
    /// Surviving rows keep their order and settle at the bottom; the same
    /// number of empty rows is added at the top.
    pub fn clear_complete_lines(&self) -> (Board, usize) {
        let (cleared, kept): (Vec<&Row>, Vec<&Row>) = self
            .rows
            .iter()
            .partition(|row| row.iter().all(Option::is_some));

        if cleared.is_empty() {
            return (self.clone(), 0);
        }

        let empty: Row = vec![None; self.width].into();
        let mut rows = vec![empty; cleared.len()];
        rows.extend(kept.into_iter().cloned());

        let board = Board {
            width: self.width,
            height: self.height,
            rows,
        };
        (board, cleared.len())
    }
}

/// Text dump: one line per row, `_` for empty cells and the colour symbol
/// for filled ones, separated by spaces
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                let symbol = cell.map_or('_', |color| color.symbol());
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minos::Catalog;

    fn bar(len: usize) -> Mino {
        Mino::from_rows(&[vec![true; len]]).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 4),
            Err(BoardError::ZeroDimension {
                width: 0,
                height: 4
            })
        );
        assert!(Board::new(4, 0).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![None; 3], vec![None; 2]];
        assert_eq!(
            Board::from_rows(rows),
            Err(BoardError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn test_stamp_shares_untouched_rows() {
        let board = Board::new(4, 4).unwrap();
        let stamped = board
            .stamp(&bar(2), MinoColor::Red, Offset::new(1, 2))
            .unwrap();

        for y in [0, 1, 3] {
            assert!(Arc::ptr_eq(&board.rows[y], &stamped.rows[y]));
        }
        assert!(!Arc::ptr_eq(&board.rows[2], &stamped.rows[2]));
    }

    #[test]
    fn test_clear_shares_surviving_rows() {
        let mut rows = vec![vec![None; 3]; 3];
        rows[1] = vec![Some(MinoColor::Blue); 3];
        rows[2][0] = Some(MinoColor::Green);
        let board = Board::from_rows(rows).unwrap();

        let (cleared, count) = board.clear_complete_lines();
        assert_eq!(count, 1);
        assert!(Arc::ptr_eq(&board.rows[0], &cleared.rows[1]));
        assert!(Arc::ptr_eq(&board.rows[2], &cleared.rows[2]));
    }

    #[test]
    fn test_validate_order_reports_y_before_x() {
        let board = Board::new(4, 4).unwrap();
        let err = board.validate(&bar(2), Offset::new(-1, -1)).unwrap_err();
        assert_eq!(
            err,
            PlacementError::OutOfBounds {
                axis: Axis::Y,
                bound: Bound::AtLeast(0),
                value: -1
            }
        );
    }

    #[test]
    fn test_out_of_bounds_messages() {
        let board = Board::new(4, 5).unwrap();
        let tall = Mino::from_rows(&[[true], [true], [true]]).unwrap();

        let below = board.validate(&tall, Offset::new(0, 3)).unwrap_err();
        assert_eq!(below.to_string(), "y offset must be less than 2 (was 3)");
        let right = board.validate(&tall, Offset::new(6, 0)).unwrap_err();
        assert_eq!(right.to_string(), "x offset must be less than 3 (was 6)");
        let above = board.validate(&tall, Offset::new(0, -1)).unwrap_err();
        assert_eq!(
            above.to_string(),
            "y offset must be greater than or equal to 0 (was -1)"
        );

        // The upper bound itself is a valid offset.
        assert!(board.can_place(&tall, Offset::new(3, 2)));
    }

    #[test]
    fn test_mino_larger_than_board() {
        let board = Board::new(3, 3).unwrap();
        let err = board.validate(&bar(4), Offset::new(0, 0)).unwrap_err();
        assert_eq!(err.to_string(), "x offset must be less than -1 (was 0)");
    }

    #[test]
    fn test_preview_clips_outside_cells() {
        let board = Board::new(3, 3).unwrap();
        let catalog = Catalog::tetrominoes();
        let square = catalog.get(2).unwrap();

        let preview = board.stamp_preview(square, MinoColor::Yellow, Offset::new(2, -1));
        assert_eq!(preview.filled_cells(), 1);
        assert_eq!(preview.get(2, 0), Some(Some(MinoColor::Yellow)));
    }

    #[test]
    fn test_display() {
        let board = Board::new(3, 2)
            .unwrap()
            .stamp(&bar(2), MinoColor::Green, Offset::new(0, 1))
            .unwrap();
        assert_eq!(board.to_string(), "_ _ _\ng g _");
    }

    #[test]
    fn test_empty_rows_from_top() {
        let board = Board::new(3, 5).unwrap();
        assert_eq!(board.empty_rows_from_top(), 5);
        let board = board.stamp(&bar(1), MinoColor::Red, Offset::new(2, 3)).unwrap();
        assert_eq!(board.empty_rows_from_top(), 3);
    }
}
