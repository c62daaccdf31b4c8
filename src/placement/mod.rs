//! Placement resolution
//!
//! Records go through four passes:
//!
//! 1. [`extract`]: candidate lists from declared specifiers, plus the
//!    occurrence index fallback
//! 2. [`resolve`]: one signed position per record, following anchors
//! 3. [`reconcile`]: unique non-negative slots, ties in input order
//! 4. [`compact`]: the records in slot order, without holes
//!
//! The first three passes only read the records and produce a [`Plan`];
//! [`Plan::apply`] runs the last one.

pub mod compact;
pub mod error;
pub mod extract;
pub mod reconcile;
pub mod resolve;
pub mod specifier;
pub mod types;

pub use compact::compact;
pub use error::PlacementError;
pub use extract::{extract, Extracted};
pub use reconcile::reconcile;
pub use resolve::resolve;
pub use specifier::{Declared, OrderSpec, Specifier};
pub use types::{Candidate, CandidateList, Entry, Position};

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::config::PlacementConfig;
use crate::error::SpecifierError;
use crate::record::Record;

use types::DisplayCandidates;

/// Everything decided about a set of records before they are moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    entries: Vec<Entry>,
    resolved: Vec<Position>,
    slots: Vec<Position>,
    errors: Vec<SpecifierError>,
    by_id: HashMap<String, usize>,
}

/// Compute the placement plan for `records`
pub fn plan<R: Record>(config: &PlacementConfig, records: &[R]) -> Result<Plan, PlacementError> {
    let Extracted {
        entries,
        errors,
        by_id,
    } = extract(config, records)?;
    debug!(records = entries.len(), errors = errors.len(), "extracted candidates");

    let resolved = resolve(&entries)?;
    debug!("resolved anchors");

    let slots = reconcile(&resolved);
    debug!(
        highest_slot = %slots.iter().copied().max().unwrap_or(0),
        "reconciled collisions"
    );

    Ok(Plan {
        entries,
        resolved,
        slots,
        errors,
        by_id,
    })
}

impl Plan {
    /// Reorder the records the plan was computed from
    pub fn apply<R>(&self, records: Vec<R>) -> Vec<R> {
        compact(&self.slots, records)
    }

    /// Record identifiers in input order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Identifiers in output order
    pub fn ordered_ids(&self) -> Vec<&str> {
        self.apply(self.ids().collect())
    }

    /// Candidates of a record, anchors named by identifier, fallback last
    pub fn candidates(&self, id: &str) -> Option<Vec<Specifier>> {
        self.position_of(id)
            .map(|i| self.entries[i].specifiers(&self.entries))
    }

    /// Position after anchor resolution, before reconciliation
    pub fn resolved_position(&self, id: &str) -> Option<Position> {
        self.position_of(id).map(|i| self.resolved[i])
    }

    /// Slot after reconciliation
    pub fn final_position(&self, id: &str) -> Option<Position> {
        self.position_of(id).map(|i| self.slots[i])
    }

    /// Malformed specifiers, in encounter order
    pub fn errors(&self) -> &[SpecifierError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SpecifierError> {
        self.errors
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }
}

impl fmt::Display for Plan {
    /// One line per record: `id: candidates -> resolved -> slot`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}: {} -> {} -> {}",
                entry.id,
                DisplayCandidates {
                    entry,
                    entries: &self.entries,
                },
                self.resolved[i],
                self.slots[i]
            )?;
        }
        Ok(())
    }
}
