//! The detective's journal
//!
//! A chronological record of everything that happened during a session,
//! stamped as it happens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: JournalEventKind,
    pub detail: String,
}

/// Kinds of journal entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalEventKind {
    ExplorationStarted,
    RoomEntered,
    ClueFound,            // Room held a clue and it was collected
    NothingFound,         // Room was empty, or its clue was already taken
    SuspectCited,         // Clue filed against a suspect in the ledger
    DeadEnd,              // Tried to walk past a leaf room
    ExplorationEnded,
    AccusationJudged,
}

impl JournalEventKind {
    pub fn label(&self) -> &'static str {
        match self {
            JournalEventKind::ExplorationStarted => "exploration started",
            JournalEventKind::RoomEntered => "room entered",
            JournalEventKind::ClueFound => "clue found",
            JournalEventKind::NothingFound => "nothing found",
            JournalEventKind::SuspectCited => "suspect cited",
            JournalEventKind::DeadEnd => "dead end",
            JournalEventKind::ExplorationEnded => "exploration ended",
            JournalEventKind::AccusationJudged => "accusation judged",
        }
    }
}

/// The complete session journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub entries: Vec<JournalEntry>,
    pub opened: DateTime<Utc>,
}

impl Journal {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            opened: Utc::now(),
        }
    }

    /// Append an entry stamped with the current time.
    pub fn record(&mut self, kind: JournalEventKind, detail: impl Into<String>) {
        self.entries.push(JournalEntry {
            timestamp: Utc::now(),
            kind,
            detail: detail.into(),
        });
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time from opening the journal to its latest entry.
    pub fn elapsed(&self) -> Duration {
        match self.entries.last() {
            Some(entry) => entry.timestamp - self.opened,
            None => Duration::zero(),
        }
    }

    /// One-line digest of the journal for reporting
    pub fn summary(&self) -> String {
        let clues = self
            .entries
            .iter()
            .filter(|e| e.kind == JournalEventKind::ClueFound)
            .count();
        let rooms = self
            .entries
            .iter()
            .filter(|e| e.kind == JournalEventKind::RoomEntered)
            .count();

        format!(
            "Journal: {} entries, {} rooms entered, {} clues found. Elapsed: {}s",
            self.len(),
            rooms,
            clues,
            self.elapsed().num_seconds()
        )
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}
