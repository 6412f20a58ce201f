//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board/piece state engine and the game controller
//! built on top of it. It has **no dependencies** on terminals, timers or I/O
//! beyond reading a config file on request, which makes it:
//!
//! - **Deterministic**: the same seed and event sequence give the same game
//! - **Value-based**: boards and game states are never modified in place;
//!   every operation returns a new value and leaves its input intact
//! - **Portable**: any front end can drive it by feeding [`types::GameEvent`]s
//!
//! # Module Structure
//!
//! - [`minos`]: piece shapes, rotation and the shape/colour catalog
//! - [`board`]: the grid, placement validation, stamping and line clearing
//! - [`game_state`]: the `(state, event) -> state` controller
//! - [`config`]: game configuration with JSON loading
//! - [`rng`]: deterministic piece selection
//!
//! # Example
//!
//! ```
//! use minofall_core::{Board, Catalog, Mino};
//! use minofall_core::types::{MinoColor, Offset};
//!
//! let catalog = Catalog::tetrominoes();
//! let square = catalog.get(2).unwrap();
//! assert_eq!(catalog.color_of(square).unwrap(), MinoColor::Red);
//!
//! let board = Board::new(4, 4).unwrap();
//! let stamped = board.stamp(square, MinoColor::Red, Offset::new(0, 2)).unwrap();
//! assert_eq!(stamped.filled_cells(), 4);
//! assert_eq!(board.filled_cells(), 0);
//!
//! // The square now blocks its own spot.
//! assert!(!stamped.can_place(square, Offset::new(0, 2)));
//!
//! let bar = Mino::from_rows(&[[true, true]]).unwrap();
//! let full = stamped.stamp(&bar, MinoColor::Blue, Offset::new(2, 3)).unwrap();
//! let (cleared, lines) = full.clear_complete_lines();
//! assert_eq!(lines, 1);
//! assert_eq!(cleared.filled_cells(), 2);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod minos;
pub mod rng;

pub use minofall_types as types;

// Re-export commonly used types for convenience
pub use board::{Axis, Board, BoardError, Bound, PlacementError, StampMode};
pub use config::{ConfigError, GameConfig};
pub use game_state::{ActivePiece, GameState};
pub use minos::{rotate_mino, Catalog, CatalogError, Mino, MinoError};
pub use rng::SimpleRng;
