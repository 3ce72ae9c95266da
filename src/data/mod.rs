//! Data structures for the game world
//!
//! Defines the mansion tree, the clue index, the suspect ledger, the session
//! journal and the bounded string values they store.

pub mod clues;
pub mod journal;
pub mod rooms;
pub mod suspects;

pub use clues::*;
pub use journal::*;
pub use rooms::*;
pub use suspects::*;

use crate::QuestError;
use serde::Serialize;
use std::fmt;

/// Maximum byte length of a room name.
pub const ROOM_NAME_MAX: usize = 50;

/// Maximum byte length of a clue text.
pub const CLUE_TEXT_MAX: usize = 100;

/// Maximum byte length of a suspect name.
pub const SUSPECT_NAME_MAX: usize = 50;

/// The name of a room in the mansion.
///
/// Bounded at [`ROOM_NAME_MAX`] bytes; over-length input is rejected at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(name: impl Into<String>) -> Result<Self, QuestError> {
        let name = name.into();
        if name.len() > ROOM_NAME_MAX {
            return Err(QuestError::RoomNameTooLong {
                len: name.len(),
                max: ROOM_NAME_MAX,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The text of a clue.
///
/// Bounded at [`CLUE_TEXT_MAX`] bytes; over-length input is rejected at
/// construction. Ordering is plain lexicographic byte comparison, which is
/// what the clue index sorts by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClueText(String);

impl ClueText {
    pub fn new(text: impl Into<String>) -> Result<Self, QuestError> {
        let text = text.into();
        if text.len() > CLUE_TEXT_MAX {
            return Err(QuestError::ClueTooLong {
                len: text.len(),
                max: CLUE_TEXT_MAX,
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClueText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The name of a suspect.
///
/// Bounded at [`SUSPECT_NAME_MAX`] bytes; over-length input is rejected at
/// construction. Accusations are looked up as plain `&str` and never need to
/// construct one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SuspectName(String);

impl SuspectName {
    pub fn new(name: impl Into<String>) -> Result<Self, QuestError> {
        let name = name.into();
        if name.len() > SUSPECT_NAME_MAX {
            return Err(QuestError::SuspectNameTooLong {
                len: name.len(),
                max: SUSPECT_NAME_MAX,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuspectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
