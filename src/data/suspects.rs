//! The suspect ledger: which suspect each clue points to
//!
//! A fixed table of ten chained buckets, addressed by hashing the clue
//! text. A clue's first association wins for good, and a suspect's
//! citation count accumulates per bucket rather than across the table, so
//! two clues naming the same suspect only reinforce each other when their
//! texts hash together.

use super::{ClueText, SuspectName};
use serde::Serialize;
use std::fmt;

/// Number of buckets in the ledger. Never resized.
pub const BUCKETS: usize = 10;

/// Citations a suspect needs before an accusation sticks.
pub const GUILT_THRESHOLD: u32 = 2;

/// Bucket index for a clue text: the sum of its Unicode scalar values,
/// reduced modulo [`BUCKETS`]. The empty string lands in bucket 0.
pub fn bucket_of(clue: &str) -> usize {
    let sum = clue.chars().fold(0u32, |acc, c| acc.wrapping_add(c as u32));
    (sum % BUCKETS as u32) as usize
}

#[derive(Debug, Clone)]
struct SuspectRecord {
    clue: ClueText,
    suspect: SuspectName,
    citations: u32,
    next: Option<Box<SuspectRecord>>,
}

/// What [`SuspectLedger::associate`] did with an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    /// New record pushed at the head of its bucket, one citation.
    Recorded,
    /// The suspect already had a record in this bucket; its citation count
    /// went up and the new clue text was dropped.
    Reinforced,
    /// The exact clue was already in its bucket; nothing changed.
    AlreadyRecorded,
}

/// One clue-to-suspect record, as yielded by a walk over the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry<'a> {
    pub clue: &'a str,
    pub suspect: &'a str,
    pub citations: u32,
}

/// Outcome of accusing a suspect against the collected associations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The accused has a record with at least [`GUILT_THRESHOLD`] citations.
    Confirmed,
    /// The accused is on file, but cited too few times.
    Insufficient,
    /// No record names the accused at all.
    NoEvidence,
}

impl Verdict {
    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Confirmed => "CONFIRMED",
            Verdict::Insufficient => "INSUFFICIENT",
            Verdict::NoEvidence => "NO EVIDENCE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The clue-to-suspect table built up during an investigation.
#[derive(Debug, Clone, Default)]
pub struct SuspectLedger {
    buckets: [Option<Box<SuspectRecord>>; BUCKETS],
    len: usize,
}

impl SuspectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a clue against a suspect.
    ///
    /// The bucket is chosen by hashing the clue, then a single walk down
    /// its chain decides: an exact clue match blocks the insert, a record
    /// naming the same suspect bumps its citations and swallows the clue,
    /// and a chain with neither gains a fresh record at its head. Whichever
    /// match is met first in chain order wins, so a same-suspect record
    /// near the head intercepts even when the exact clue sits deeper.
    pub fn associate(&mut self, clue: ClueText, suspect: SuspectName) -> Association {
        let index = bucket_of(clue.as_str());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(record) = cursor {
            if record.clue == clue {
                return Association::AlreadyRecorded;
            }
            if record.suspect == suspect {
                record.citations += 1;
                return Association::Reinforced;
            }
            cursor = record.next.as_deref_mut();
        }

        let rest = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(SuspectRecord {
            clue,
            suspect,
            citations: 1,
            next: rest,
        }));
        self.len += 1;
        Association::Recorded
    }

    /// The suspect a clue was filed against, if that exact text is on record.
    pub fn suspect_for(&self, clue: &str) -> Option<&str> {
        let mut cursor = self.buckets[bucket_of(clue)].as_deref();
        while let Some(record) = cursor {
            if record.clue.as_str() == clue {
                return Some(record.suspect.as_str());
            }
            cursor = record.next.as_deref();
        }
        None
    }

    /// Walk every record: buckets in index order, each chain head to tail.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            ledger: self,
            bucket: 0,
            cursor: None,
        }
    }

    /// The suspect with the single highest-cited record, with that count.
    ///
    /// Only a strictly greater count displaces the running best, so on a
    /// tie the record seen first in walk order keeps the title. A suspect
    /// spread over several buckets competes once per record.
    pub fn most_cited(&self) -> Option<(&str, u32)> {
        let mut best: Option<(&str, u32)> = None;
        for entry in self.entries() {
            match best {
                Some((_, count)) if entry.citations <= count => {}
                _ => best = Some((entry.suspect, entry.citations)),
            }
        }
        best
    }

    /// Judge an accusation. The first record naming the accused decides:
    /// none at all means no evidence, and a citation count below
    /// [`GUILT_THRESHOLD`] leaves the case insufficient.
    pub fn verdict(&self, accused: &str) -> Verdict {
        match self.entries().find(|entry| entry.suspect == accused) {
            None => Verdict::NoEvidence,
            Some(entry) if entry.citations >= GUILT_THRESHOLD => Verdict::Confirmed,
            Some(_) => Verdict::Insufficient,
        }
    }

    /// Number of records across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Unlink and drop every record, bucket by bucket.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            let mut cursor = bucket.take();
            while let Some(mut record) = cursor {
                cursor = record.next.take();
            }
        }
        self.len = 0;
    }
}

/// Iterator over every [`LedgerEntry`] in the ledger.
#[derive(Debug)]
pub struct Entries<'a> {
    ledger: &'a SuspectLedger,
    bucket: usize,
    cursor: Option<&'a SuspectRecord>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = LedgerEntry<'a>;

    fn next(&mut self) -> Option<LedgerEntry<'a>> {
        loop {
            if let Some(record) = self.cursor {
                self.cursor = record.next.as_deref();
                return Some(LedgerEntry {
                    clue: record.clue.as_str(),
                    suspect: record.suspect.as_str(),
                    citations: record.citations,
                });
            }
            if self.bucket == BUCKETS {
                return None;
            }
            self.cursor = self.ledger.buckets[self.bucket].as_deref();
            self.bucket += 1;
        }
    }
}

impl<'a> IntoIterator for &'a SuspectLedger {
    type Item = LedgerEntry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Entries<'a> {
        self.entries()
    }
}
