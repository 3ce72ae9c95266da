//! Walking the mansion, one door at a time
//!
//! The engine owns the mansion, the clue index and the suspect ledger for
//! a single session. The console (or a test) drives it: ask for a
//! [`RoomView`], feed in a [`Choice`], read back what happened.

use super::{Casebook, GameLevel, SessionStats};
use crate::data::{
    Association, ClueIndex, ClueText, Direction, Journal, JournalEventKind, Mansion, RoomId,
    SuspectLedger, Verdict,
};
use serde::Serialize;

/// A door choice at the current room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Left,
    Right,
    Quit,
}

/// What happened on stepping into a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub room: String,
    /// Present when the room held a clue and this level collects them.
    pub clue: Option<ClueNotice>,
    /// The room is a leaf; the walk is over.
    pub path_ends: bool,
}

/// A clue picked up on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueNotice {
    pub text: String,
    /// False when the index already held this exact text.
    pub newly_indexed: bool,
    /// The suspect the casebook names for this clue, at suspect-tracking
    /// levels.
    pub implicates: Option<String>,
}

/// A read-only look at the current room and its doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomView<'a> {
    pub name: &'a str,
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
}

/// Result of feeding a [`Choice`] to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Entered the chosen room.
    Moved(Arrival),
    /// No door that way; position is unchanged.
    Blocked,
    /// The session is over, by quitting or because it already ended.
    Ended,
}

/// A judged accusation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accusation {
    pub accused: String,
    pub verdict: Verdict,
}

/// One clue-to-suspect record in the end-of-session report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedAssociation {
    pub clue: String,
    pub suspect: String,
    pub citations: u32,
}

/// The most-cited suspect in the end-of-session report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostCited {
    pub suspect: String,
    pub citations: u32,
}

/// End-of-session report, shaped for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub level: GameLevel,
    pub clues: Vec<String>,
    pub associations: Vec<ReportedAssociation>,
    pub most_cited: Option<MostCited>,
    pub accusation: Option<Accusation>,
    pub stats: SessionStats,
    pub journal: Journal,
}

/// A single exploration session.
#[derive(Debug, Clone)]
pub struct Exploration {
    mansion: Mansion,
    casebook: Casebook,
    level: GameLevel,
    position: RoomId,
    over: bool,
    clues: ClueIndex,
    ledger: SuspectLedger,
    journal: Journal,
    stats: SessionStats,
    accusation: Option<Accusation>,
}

impl Exploration {
    /// Start a session at the given entry room and process the arrival
    /// there, exactly as stepping into any other room would.
    pub fn begin(
        mansion: Mansion,
        entry: RoomId,
        casebook: Casebook,
        level: GameLevel,
    ) -> (Self, Arrival) {
        let mut exploration = Self {
            mansion,
            casebook,
            level,
            position: entry,
            over: false,
            clues: ClueIndex::new(),
            ledger: SuspectLedger::new(),
            journal: Journal::new(),
            stats: SessionStats::default(),
            accusation: None,
        };

        let entry_name = exploration.mansion.room(entry).name().to_string();
        exploration
            .journal
            .record(JournalEventKind::ExplorationStarted, entry_name);

        let arrival = exploration.arrive(entry);
        (exploration, arrival)
    }

    /// Feed the player's choice to the engine.
    pub fn choose(&mut self, choice: Choice) -> StepOutcome {
        if self.over {
            return StepOutcome::Ended;
        }

        let direction = match choice {
            Choice::Left => Direction::Left,
            Choice::Right => Direction::Right,
            Choice::Quit => {
                self.over = true;
                let here = self.mansion.room(self.position).name().to_string();
                self.journal.record(JournalEventKind::ExplorationEnded, here);
                return StepOutcome::Ended;
            }
        };

        match self.mansion.room(self.position).child(direction) {
            Some(next) => {
                self.stats.steps_taken += 1;
                StepOutcome::Moved(self.arrive(next))
            }
            None => {
                self.stats.wrong_turns += 1;
                let here = self.mansion.room(self.position).name().to_string();
                self.journal.record(JournalEventKind::DeadEnd, here);
                StepOutcome::Blocked
            }
        }
    }

    /// The current room and the doors leading out of it.
    pub fn survey(&self) -> RoomView<'_> {
        let room = self.mansion.room(self.position);
        RoomView {
            name: room.name().as_str(),
            left: room
                .left()
                .map(|id| self.mansion.room(id).name().as_str()),
            right: room
                .right()
                .map(|id| self.mansion.room(id).name().as_str()),
        }
    }

    /// Judge an accusation against the ledger. `None` at levels that do
    /// not track suspects; the last accusation is kept for the report.
    pub fn accuse(&mut self, accused: &str) -> Option<Verdict> {
        if !self.level.tracks_suspects() {
            return None;
        }

        let verdict = self.ledger.verdict(accused);
        self.journal.record(
            JournalEventKind::AccusationJudged,
            format!("{}: {}", accused, verdict),
        );
        self.accusation = Some(Accusation {
            accused: accused.to_string(),
            verdict,
        });
        Some(verdict)
    }

    pub fn level(&self) -> GameLevel {
        self.level
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn ledger(&self) -> &SuspectLedger {
        &self.ledger
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Snapshot the session into a serializable report.
    pub fn case_report(&self) -> CaseReport {
        CaseReport {
            level: self.level,
            clues: self.clues.iter().map(str::to_string).collect(),
            associations: self
                .ledger
                .entries()
                .map(|entry| ReportedAssociation {
                    clue: entry.clue.to_string(),
                    suspect: entry.suspect.to_string(),
                    citations: entry.citations,
                })
                .collect(),
            most_cited: self.ledger.most_cited().map(|(suspect, citations)| MostCited {
                suspect: suspect.to_string(),
                citations,
            }),
            accusation: self.accusation.clone(),
            stats: self.stats.clone(),
            journal: self.journal.clone(),
        }
    }

    /// Step into a room: note it, pick up its clue if this level collects
    /// clues, and end the walk when it is a leaf.
    fn arrive(&mut self, id: RoomId) -> Arrival {
        self.position = id;
        self.stats.rooms_entered += 1;

        let room_name = self.mansion.room(id).name().to_string();
        self.journal
            .record(JournalEventKind::RoomEntered, room_name.clone());

        let clue = if self.level.collects_clues() {
            match self.mansion.take_clue(id) {
                Some(text) => Some(self.file_clue(text)),
                None => {
                    self.journal
                        .record(JournalEventKind::NothingFound, room_name.clone());
                    None
                }
            }
        } else {
            None
        };

        let path_ends = self.mansion.room(id).is_leaf();
        if path_ends {
            self.over = true;
            self.journal
                .record(JournalEventKind::ExplorationEnded, room_name.clone());
        }

        Arrival {
            room: room_name,
            clue,
            path_ends,
        }
    }

    /// Index a collected clue and, at suspect-tracking levels, file it
    /// against whoever the casebook implicates.
    fn file_clue(&mut self, text: ClueText) -> ClueNotice {
        let newly_indexed = self.clues.insert(text.clone());
        if newly_indexed {
            self.stats.clues_collected += 1;
        } else {
            self.stats.clues_already_known += 1;
        }
        self.journal
            .record(JournalEventKind::ClueFound, text.as_str());

        if !self.level.tracks_suspects() {
            return ClueNotice {
                text: text.to_string(),
                newly_indexed,
                implicates: None,
            };
        }

        let implicated = self.casebook.suspect_for(text.as_str()).cloned();
        match &implicated {
            Some(suspect) => {
                let outcome = self.ledger.associate(text.clone(), suspect.clone());
                if outcome != Association::AlreadyRecorded {
                    self.stats.suspects_cited += 1;
                    self.journal.record(
                        JournalEventKind::SuspectCited,
                        format!("{} -> {}", text, suspect),
                    );
                }
            }
            None => {
                self.stats.clues_unattributed += 1;
            }
        }

        ClueNotice {
            text: text.to_string(),
            newly_indexed,
            implicates: implicated.map(|suspect| suspect.to_string()),
        }
    }
}
