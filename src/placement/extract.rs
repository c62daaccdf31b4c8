//! Candidate extraction
//!
//! Turns each record's declared specifiers into a [`CandidateList`]:
//! malformed specifiers are reported, anchors to unknown identifiers are
//! dropped without a report, and the occurrence index is appended as the
//! final fallback.

use std::collections::HashMap;

use tracing::trace;

use crate::config::PlacementConfig;
use crate::error::SpecifierError;
use crate::record::Record;

use super::error::PlacementError;
use super::specifier::Specifier;
use super::types::{Candidate, CandidateList, Entry, Position};

/// Output of the extraction pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// One entry per record, in input order
    pub entries: Vec<Entry>,
    /// Malformed specifiers, in record then declaration order
    pub errors: Vec<SpecifierError>,
    /// Input index of every identifier
    pub by_id: HashMap<String, usize>,
}

/// Build candidate lists for every record.
///
/// Fails only when a record has no usable identifier or two records share
/// one.
pub fn extract<R: Record>(
    config: &PlacementConfig,
    records: &[R],
) -> Result<Extracted, PlacementError> {
    let index = index_identifiers(config, records)?;

    let mut entries = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for (occurrence, (record, id)) in records.iter().zip(index.ids).enumerate() {
        let mut explicit = Vec::new();

        for declared in record.order_spec(config).iter() {
            match declared {
                Ok(spec) => {
                    if let Some(candidate) = to_candidate(spec, &index.by_id) {
                        explicit.push(candidate);
                    } else {
                        trace!(id = %id, specifier = %spec, "dropping anchor to unknown record");
                    }
                }
                Err(err) => errors.push(err.clone()),
            }
        }

        entries.push(Entry {
            id,
            candidates: CandidateList::new(explicit, occurrence),
        });
    }

    Ok(Extracted {
        entries,
        errors,
        by_id: index.by_id,
    })
}

struct IdentifierIndex {
    ids: Vec<String>,
    by_id: HashMap<String, usize>,
}

fn index_identifiers<R: Record>(
    config: &PlacementConfig,
    records: &[R],
) -> Result<IdentifierIndex, PlacementError> {
    let mut ids = Vec::with_capacity(records.len());
    let mut by_id = HashMap::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let id = record
            .identifier(config)
            .ok_or_else(|| PlacementError::missing_identifier(index))?;
        if by_id.insert(id.clone(), index).is_some() {
            return Err(PlacementError::duplicate(id));
        }
        ids.push(id);
    }

    Ok(IdentifierIndex { ids, by_id })
}

fn to_candidate(spec: &Specifier, by_id: &HashMap<String, usize>) -> Option<Candidate> {
    match spec {
        Specifier::At(index) => Some(Candidate::At(*index as Position)),
        Specifier::After(target) => by_id.get(target).map(|&i| Candidate::After(i)),
        Specifier::Before(target) => by_id.get(target).map(|&i| Candidate::Before(i)),
    }
}
