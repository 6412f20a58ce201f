//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Key
//! repeats are left to the terminal: every press is one action.

pub mod map;

pub use minofall_types as types;

pub use map::{handle_key_event, should_quit};
