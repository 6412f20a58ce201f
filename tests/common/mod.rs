//! Shared fixtures for integration tests

#![allow(dead_code)]

use minofall::core::{Board, Mino};
use minofall::types::MinoColor;

/// Parse a board from rows of space-separated symbols
///
/// `_` is an empty cell, a colour symbol (`g`, `r`, `b`, ...) a filled one.
/// Blank lines and indentation are ignored.
pub fn board(text: &str) -> Board {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|sym| sym.chars().next().and_then(MinoColor::from_symbol))
                .collect()
        })
        .collect();
    Board::from_rows(rows).expect("fixture board must be rectangular")
}

/// Parse a mino from rows of `#` (filled) and `.` (empty)
pub fn mino(text: &str) -> Mino {
    let rows: Vec<Vec<bool>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|c| c == '#').collect())
        .collect();
    Mino::from_rows(&rows).expect("fixture mino must be rectangular")
}

/// Same layout as [`board`], for comparing against `Board`'s `Display`
pub fn normalized(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
