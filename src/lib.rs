//! Detective Quest
//!
//! A terminal mystery game: explore a mansion laid out as a fixed binary
//! tree, gather the clues left in its rooms, and accuse the culprit.
//!
//! # Game Mechanics
//!
//! - **Exploration**: walk the mansion room by room, left or right
//! - **Clues**: rooms may hide one clue each; a clue is collected once
//! - **Suspects**: clues implicate suspects through the casebook
//! - **Accusation**: the session ends with a verdict on the accused
//!
//! # Architecture
//!
//! - `data` - The structures the game is built on: the mansion tree, the
//!   clue index (a binary search tree), the suspect ledger (a chained hash
//!   table) and the session journal
//! - `game` - Session state and the exploration engine
//! - `console` - Scrolling line console front-end with crossterm styling

pub mod console;
pub mod data;
pub mod game;

pub use data::*;
pub use game::{Exploration, GameLevel};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum QuestError {
    #[error("room name is {len} bytes, the limit is {max}")]
    RoomNameTooLong { len: usize, max: usize },

    #[error("clue text is {len} bytes, the limit is {max}")]
    ClueTooLong { len: usize, max: usize },

    #[error("suspect name is {len} bytes, the limit is {max}")]
    SuspectNameTooLong { len: usize, max: usize },
}
