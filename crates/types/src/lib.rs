//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so the engine, the
//! input mapping and the terminal runner can all share them.
//!
//! # Board Dimensions
//!
//! The playfield is sized at runtime. The defaults:
//!
//! - **Width**: 15 columns (indexed 0-14)
//! - **Height**: 30 rows (indexed 0-29, row 0 at the top)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Runner frame interval (~60 FPS) |
//! | `MOVE_PERIOD_MS` | 1000 | Gravity interval and lock grace window |
//!
//! # Examples
//!
//! ```
//! use minofall_types::{GameAction, GameEvent, MinoColor, Offset};
//!
//! let color = MinoColor::from_str("green").unwrap();
//! assert_eq!(color.as_str(), "green");
//!
//! let action = GameAction::from_str("rotateCw").unwrap();
//! assert_eq!(GameEvent::from(action), GameEvent::Action(GameAction::RotateCw));
//!
//! let offset = Offset::new(3, 0).shifted(-1, 1);
//! assert_eq!(offset, Offset::new(2, 1));
//! ```

/// Default board width in cells (15 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 15;

/// Default board height in cells (30 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 30;

/// Runner frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval in milliseconds (one row per second)
///
/// The same window is used as the lock grace: a landed piece is not locked
/// while the player interacted with it less than one period ago.
pub const MOVE_PERIOD_MS: u32 = 1000;

/// Colour identifiers for the mino catalog
///
/// The order matches the shape catalog, so `colors[i]` is the colour of
/// `minos[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinoColor {
    LightGrey,
    Green,
    Red,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl MinoColor {
    /// All colours in catalog order
    pub const ALL: [MinoColor; 7] = [
        MinoColor::LightGrey,
        MinoColor::Green,
        MinoColor::Red,
        MinoColor::Blue,
        MinoColor::Yellow,
        MinoColor::Orange,
        MinoColor::Purple,
    ];

    /// Parse colour from string (case-insensitive)
    ///
    /// `"grey"` and `"gray"` are accepted as aliases for light grey.
    ///
    /// # Examples
    ///
    /// ```
    /// use minofall_types::MinoColor;
    ///
    /// assert_eq!(MinoColor::from_str("Red"), Some(MinoColor::Red));
    /// assert_eq!(MinoColor::from_str("grey"), Some(MinoColor::LightGrey));
    /// assert_eq!(MinoColor::from_str("teal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lightgrey" | "lightgray" | "grey" | "gray" => Some(MinoColor::LightGrey),
            "green" => Some(MinoColor::Green),
            "red" => Some(MinoColor::Red),
            "blue" => Some(MinoColor::Blue),
            "yellow" => Some(MinoColor::Yellow),
            "orange" => Some(MinoColor::Orange),
            "purple" => Some(MinoColor::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MinoColor::LightGrey => "lightgrey",
            MinoColor::Green => "green",
            MinoColor::Red => "red",
            MinoColor::Blue => "blue",
            MinoColor::Yellow => "yellow",
            MinoColor::Orange => "orange",
            MinoColor::Purple => "purple",
        }
    }

    /// Single-character symbol used in text board dumps
    ///
    /// Symbols are the first letter of each colour name and are unique.
    pub fn symbol(&self) -> char {
        match self {
            MinoColor::LightGrey => 'l',
            MinoColor::Green => 'g',
            MinoColor::Red => 'r',
            MinoColor::Blue => 'b',
            MinoColor::Yellow => 'y',
            MinoColor::Orange => 'o',
            MinoColor::Purple => 'p',
        }
    }

    /// Inverse of [`MinoColor::symbol`]
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.symbol() == c)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(MinoColor)`: Filled cell with the colour of the piece that locked there
///
/// A filled cell always carries a colour and an empty one never does.
pub type Cell = Option<MinoColor>;

/// Position of a mino's top-left local cell in board coordinates
///
/// Signed so that out-of-range candidates (e.g. one column left of the wall)
/// can be expressed and rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset moved by `(dx, dy)`, saturating at the `i32` range
    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Offset {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Player actions that can be applied to the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    TogglePause,
    /// Start over with an empty board
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use minofall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether the action manipulates the active piece
    ///
    /// Piece actions count as player interaction for the lock grace window.
    pub fn moves_piece(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::SoftDrop
                | GameAction::RotateCw
                | GameAction::RotateCcw
        )
    }
}

/// Everything the game controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Time passed since the previous tick
    Tick { elapsed_ms: u32 },
    /// A discrete player action
    Action(GameAction),
}

impl From<GameAction> for GameEvent {
    fn from(action: GameAction) -> Self {
        GameEvent::Action(action)
    }
}

/// Outcome of the most recent lock, for scoring observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
}
