//! Core game logic and session state

pub mod casebook;
pub mod exploration;
pub mod mansion;

pub use casebook::Casebook;
pub use exploration::{
    Accusation, Arrival, CaseReport, Choice, ClueNotice, Exploration, RoomView, StepOutcome,
};
pub use mansion::classic_mansion;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How deep the detective work goes for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum GameLevel {
    /// Walk the mansion and learn its layout
    Novice,
    /// Collect every clue into the ordered index
    Adventurer,
    /// Match clues to suspects and close the case with an accusation
    Master,
}

impl GameLevel {
    pub fn description(&self) -> &'static str {
        match self {
            GameLevel::Novice => "Walk the rooms and learn the mansion's layout.",
            GameLevel::Adventurer => "Collect every clue into the ordered index.",
            GameLevel::Master => "Clues point at suspects. Close the case with an accusation.",
        }
    }

    /// Whether clues are picked up and indexed at this level.
    pub fn collects_clues(&self) -> bool {
        !matches!(self, GameLevel::Novice)
    }

    /// Whether clues are filed against suspects and the session ends in an
    /// accusation.
    pub fn tracks_suspects(&self) -> bool {
        matches!(self, GameLevel::Master)
    }
}

impl fmt::Display for GameLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameLevel::Novice => write!(f, "Novice Detective"),
            GameLevel::Adventurer => write!(f, "Adventurer Detective"),
            GameLevel::Master => write!(f, "Master Detective"),
        }
    }
}

/// Session statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub rooms_entered: u32,
    pub steps_taken: u32,
    pub wrong_turns: u32,
    pub clues_collected: u32,
    pub clues_already_known: u32,
    pub suspects_cited: u32,
    pub clues_unattributed: u32,
}
