//! Minos module - piece shapes as boolean grids, rotation and the shape catalog
//!
//! A mino is a rectangular occupancy matrix in its own local frame, with
//! `(col, row)` = `(0, 0)` at the top-left. Rotation turns the matrix 90°
//! around its own bounding box; there are no wall kicks.

use std::fmt;

use thiserror::Error;

use crate::types::MinoColor;

/// Errors from building a mino out of raw rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MinoError {
    #[error("a mino needs at least one row and one column")]
    Empty,
    #[error("mino row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A piece shape - rectangular boolean matrix, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mino {
    width: usize,
    height: usize,
    /// Occupancy in row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Mino {
    /// Build a mino from rows of occupancy flags
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, MinoError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(MinoError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, cells_in_row) in rows.iter().enumerate() {
            let cells_in_row = cells_in_row.as_ref();
            if cells_in_row.len() != width {
                return Err(MinoError::Ragged {
                    row,
                    len: cells_in_row.len(),
                    expected: width,
                });
            }
            cells.extend_from_slice(cells_in_row);
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Catalog constructor for shapes known to be rectangular
    fn from_static(rows: &[&[bool]]) -> Self {
        let width = rows[0].len();
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self {
            width,
            height: rows.len(),
            cells: rows.concat(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the local cell is occupied; false outside the matrix
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.cells[row * self.width + col]
    }

    /// Rows of the matrix, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Occupied local cells as `(col, row)`, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// Rotate 90° around the shape's bounding box
    ///
    /// Width and height swap. Clockwise sends local `(row, col)` to
    /// `(col, height - 1 - row)`; counter-clockwise sends it to
    /// `(width - 1 - col, row)`.
    pub fn rotated(&self, clockwise: bool) -> Mino {
        let (width, height) = (self.width, self.height);
        // Output is `height` wide and `width` tall.
        let mut cells = vec![false; self.cells.len()];

        for row in 0..height {
            for col in 0..width {
                let (rot_row, rot_col) = if clockwise {
                    (col, height - 1 - row)
                } else {
                    (width - 1 - col, row)
                };
                cells[rot_row * height + rot_col] = self.cells[row * width + col];
            }
        }

        Mino {
            width: height,
            height: width,
            cells,
        }
    }
}

impl fmt::Display for Mino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &filled in row {
                f.write_str(if filled { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Rotate a mino, leaving the input untouched
pub fn rotate_mino(mino: &Mino, clockwise: bool) -> Mino {
    mino.rotated(clockwise)
}

/// Errors from building or querying a [`Catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no shapes")]
    Empty,
    #[error("catalog has {minos} shapes but {colors} colors")]
    LengthMismatch { minos: usize, colors: usize },
    #[error("no color found for {width}x{height} mino")]
    UnknownMino { width: usize, height: usize },
}

const T: bool = true;
const F: bool = false;

const TETROMINO_ROWS: [&[&[bool]]; 7] = [
    &[&[T, F], &[T, T], &[F, T]],
    &[&[F, T], &[T, T], &[T, F]],
    &[&[T, T], &[T, T]],
    &[&[T], &[T], &[T], &[T]],
    &[&[F, T], &[F, T], &[T, T]],
    &[&[T, F], &[T, F], &[T, T]],
    &[&[T, F], &[T, T], &[T, F]],
];

/// Ordered, immutable set of shapes with a parallel list of colours
///
/// `color_of(minos[i]) == colors[i]`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    minos: Vec<Mino>,
    colors: Vec<MinoColor>,
}

impl Catalog {
    pub fn new(minos: Vec<Mino>, colors: Vec<MinoColor>) -> Result<Self, CatalogError> {
        if minos.is_empty() {
            return Err(CatalogError::Empty);
        }
        if minos.len() != colors.len() {
            return Err(CatalogError::LengthMismatch {
                minos: minos.len(),
                colors: colors.len(),
            });
        }
        Ok(Self { minos, colors })
    }

    /// The seven tetrominoes, coloured in [`MinoColor::ALL`] order
    pub fn tetrominoes() -> Self {
        Self {
            minos: TETROMINO_ROWS.iter().map(|rows| Mino::from_static(rows)).collect(),
            colors: MinoColor::ALL.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.minos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Mino> {
        self.minos.get(index)
    }

    /// Shape and colour at `index`, taken modulo the catalog size
    pub fn pick(&self, index: usize) -> (&Mino, MinoColor) {
        let index = index % self.minos.len();
        (&self.minos[index], self.colors[index])
    }

    /// Position of the first entry equal cell-for-cell to `mino`
    pub fn index_of(&self, mino: &Mino) -> Option<usize> {
        self.minos.iter().position(|entry| entry == mino)
    }

    pub fn color_of(&self, mino: &Mino) -> Result<MinoColor, CatalogError> {
        self.index_of(mino)
            .map(|index| self.colors[index])
            .ok_or(CatalogError::UnknownMino {
                width: mino.width(),
                height: mino.height(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Mino, MinoColor)> + '_ {
        self.minos.iter().zip(self.colors.iter().copied())
    }

    /// Widest extent any entry can take in any rotation
    pub fn max_extent(&self) -> usize {
        self.minos
            .iter()
            .map(|mino| mino.width().max(mino.height()))
            .max()
            .unwrap_or(0)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::tetrominoes()
    }
}
