//! Collision reconciliation
//!
//! Maps resolved positions, which may be negative or shared, onto unique
//! non-negative slots. Records are visited in position order with ties kept
//! in input order. A record landing on a taken slot moves one slot forward
//! and every later record moves with it.

use std::collections::HashSet;

use tracing::trace;

use super::types::Position;

/// Reconcile resolved positions (input order) into unique slots (input order)
pub fn reconcile(resolved: &[Position]) -> Vec<Position> {
    let mut order: Vec<usize> = (0..resolved.len()).collect();
    // Stable: equal positions keep input order
    order.sort_by_key(|&i| resolved[i]);

    let lowest = resolved.iter().copied().min().unwrap_or(0);
    let mut shift = -lowest.min(0);
    let mut taken = HashSet::with_capacity(resolved.len());
    let mut slots = vec![0; resolved.len()];

    for i in order {
        let designated = resolved[i] + shift;
        let slot = if taken.contains(&designated) {
            shift += 1;
            designated + 1
        } else {
            designated
        };
        trace!(index = i, designated = %designated, slot = %slot, "reconciled");
        taken.insert(slot);
        slots[i] = slot;
    }

    slots
}
