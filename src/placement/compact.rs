//! Compaction of reconciled slots into the output sequence

use std::collections::BTreeMap;

use super::types::Position;

/// Place each record at its slot and drop the unfilled slots in between.
///
/// `slots[i]` is the slot of `records[i]`. Slots are sparse: shifting can
/// push them past the input length and leave holes, neither of which costs
/// storage here.
pub fn compact<R>(slots: &[Position], records: Vec<R>) -> Vec<R> {
    let placed: BTreeMap<Position, R> = slots.iter().copied().zip(records).collect();
    placed.into_values().collect()
}
