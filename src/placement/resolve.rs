//! Anchor resolution
//!
//! Every record resolves to a signed position: `at n` is `n`, `after x` is
//! one past `x`, `before x` is one short of `x`. Chains are followed with an
//! explicit work stack and each record is resolved once.

use tracing::trace;

use super::error::PlacementError;
use super::types::{Candidate, Entry, Position};

#[derive(Debug, Clone, Copy)]
enum Mark {
    Unvisited,
    /// On the work stack; meeting it again means a cycle
    InProgress,
    Done(Position),
}

/// Resolve every entry to a position, in input order
pub fn resolve(entries: &[Entry]) -> Result<Vec<Position>, PlacementError> {
    let mut marks = vec![Mark::Unvisited; entries.len()];
    let mut stack = Vec::new();

    for root in 0..entries.len() {
        if !matches!(marks[root], Mark::Unvisited) {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push(root);

        while let Some(&current) = stack.last() {
            let (target, offset) = match entries[current].candidates.winner() {
                Candidate::At(index) => {
                    finish(&mut marks, &mut stack, entries, current, index);
                    continue;
                }
                Candidate::After(target) => (target, 1),
                Candidate::Before(target) => (target, -1),
            };

            match marks[target] {
                Mark::Done(position) => {
                    finish(&mut marks, &mut stack, entries, current, position + offset);
                }
                Mark::InProgress => {
                    return Err(PlacementError::cyclic(cycle_from(&stack, target, entries)));
                }
                Mark::Unvisited => {
                    marks[target] = Mark::InProgress;
                    stack.push(target);
                }
            }
        }
    }

    Ok(marks
        .into_iter()
        .map(|mark| match mark {
            Mark::Done(position) => position,
            // Every root is driven to completion above
            Mark::Unvisited | Mark::InProgress => unreachable!("unresolved entry"),
        })
        .collect())
}

fn finish(
    marks: &mut [Mark],
    stack: &mut Vec<usize>,
    entries: &[Entry],
    current: usize,
    position: Position,
) {
    trace!(id = %entries[current].id, position = %position, "resolved");
    marks[current] = Mark::Done(position);
    stack.pop();
}

/// The loop closing on `target`, starting and ending with its identifier
fn cycle_from(stack: &[usize], target: usize, entries: &[Entry]) -> Vec<String> {
    let start = stack.iter().position(|&i| i == target).unwrap_or(0);
    stack[start..]
        .iter()
        .chain(std::iter::once(&target))
        .map(|&i| entries[i].id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::types::CandidateList;

    fn entry(id: &str, explicit: Vec<Candidate>, occurrence: usize) -> Entry {
        Entry {
            id: id.to_string(),
            candidates: CandidateList::new(explicit, occurrence),
        }
    }

    #[test]
    fn test_absolute_and_fallback() {
        let entries = vec![entry("a", vec![Candidate::At(4)], 0), entry("b", vec![], 1)];
        assert_eq!(resolve(&entries).unwrap(), vec![4, 1]);
    }

    #[test]
    fn test_after_and_before() {
        let entries = vec![
            entry("a", vec![Candidate::At(3)], 0),
            entry("b", vec![Candidate::After(0)], 1),
            entry("c", vec![Candidate::Before(0)], 2),
        ];
        assert_eq!(resolve(&entries).unwrap(), vec![3, 4, 2]);
    }

    #[test]
    fn test_before_first_goes_negative() {
        let entries = vec![
            entry("a", vec![Candidate::At(0)], 0),
            entry("b", vec![Candidate::Before(0)], 1),
        ];
        assert_eq!(resolve(&entries).unwrap(), vec![0, -1]);
    }

    #[test]
    fn test_chain_resolved_through_later_entries() {
        // a after b after c, c at 10
        let entries = vec![
            entry("a", vec![Candidate::After(1)], 0),
            entry("b", vec![Candidate::After(2)], 1),
            entry("c", vec![Candidate::At(10)], 2),
        ];
        assert_eq!(resolve(&entries).unwrap(), vec![12, 11, 10]);
    }

    #[test]
    fn test_long_chain_does_not_exhaust_stack() {
        // Each entry sits after the next one, so the first root walks the whole chain
        let n = 200_000;
        let entries: Vec<Entry> = (0..n)
            .map(|i| {
                let explicit = if i + 1 < n {
                    vec![Candidate::After(i + 1)]
                } else {
                    vec![]
                };
                entry(&i.to_string(), explicit, i)
            })
            .collect();

        let positions = resolve(&entries).unwrap();
        assert_eq!(positions[n - 1], (n - 1) as Position);
        assert_eq!(positions[0], 2 * (n - 1) as Position);
    }

    #[test]
    fn test_two_cycle() {
        let entries = vec![
            entry("a", vec![Candidate::After(1)], 0),
            entry("b", vec![Candidate::After(0)], 1),
        ];
        let err = resolve(&entries).unwrap_err();
        assert_eq!(
            err.cycle(),
            Some(&["a".to_string(), "b".to_string(), "a".to_string()][..])
        );
    }

    #[test]
    fn test_self_anchor_is_a_cycle() {
        let entries = vec![entry("a", vec![Candidate::Before(0)], 0)];
        let err = resolve(&entries).unwrap_err();
        assert_eq!(err, PlacementError::cyclic(vec!["a".to_string(), "a".to_string()]));
    }

    #[test]
    fn test_cycle_reported_without_lead_in() {
        // x -> a -> b -> a: the loop is a, b
        let entries = vec![
            entry("x", vec![Candidate::After(1)], 0),
            entry("a", vec![Candidate::After(2)], 1),
            entry("b", vec![Candidate::Before(1)], 2),
        ];
        let err = resolve(&entries).unwrap_err();
        assert_eq!(
            err,
            PlacementError::cyclic(vec!["a".to_string(), "b".to_string(), "a".to_string()])
        );
    }
}
