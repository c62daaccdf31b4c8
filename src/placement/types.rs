//! Core types for placement resolution

use std::fmt;

use super::specifier::Specifier;

/// Signed position produced by anchor resolution and reconciliation.
///
/// Wide enough that `at` extremes plus anchor chains and shifts cannot
/// overflow.
pub type Position = i128;

/// A specifier whose anchor, if any, is known to exist.
///
/// Anchors refer to records by input index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    At(Position),
    After(usize),
    Before(usize),
}

/// Ordered placement candidates for one record.
///
/// Always ends with the record's occurrence index, so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
}

impl CandidateList {
    /// Start a list from explicit candidates; `occurrence` is appended last
    pub fn new(explicit: Vec<Candidate>, occurrence: usize) -> Self {
        let mut candidates = explicit;
        candidates.push(Candidate::At(occurrence as Position));
        Self { candidates }
    }

    /// The candidate that decides the record's position.
    ///
    /// Anchors to unknown records never make it into the list and the
    /// fallback is always decidable, so the first candidate wins.
    pub fn winner(&self) -> Candidate {
        self.candidates[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// A record's identifier with its candidates, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub candidates: CandidateList,
}

impl Entry {
    /// Convert the candidates back to specifiers, naming anchors by identifier
    pub fn specifiers(&self, entries: &[Entry]) -> Vec<Specifier> {
        self.candidates
            .iter()
            .map(|candidate| match *candidate {
                Candidate::At(index) => Specifier::At(index as i64),
                Candidate::After(target) => Specifier::After(entries[target].id.clone()),
                Candidate::Before(target) => Specifier::Before(entries[target].id.clone()),
            })
            .collect()
    }
}

/// Formats a candidate list with anchor targets named
pub(crate) struct DisplayCandidates<'a> {
    pub entry: &'a Entry,
    pub entries: &'a [Entry],
}

impl fmt::Display for DisplayCandidates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, candidate) in self.entry.candidates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match *candidate {
                Candidate::At(index) => write!(f, "at {}", index)?,
                Candidate::After(target) => write!(f, "after {}", self.entries[target].id)?,
                Candidate::Before(target) => write!(f, "before {}", self.entries[target].id)?,
            }
        }
        Ok(())
    }
}
