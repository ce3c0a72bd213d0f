//! Deterministic sequence repair
//!
//! Any candidate ordering, however degenerate, is transformed into one
//! that satisfies the route invariants: starts at `Entrance`, ends at
//! `Checkout`, visits every required location, contains only graph
//! nodes, and never repeats a location back-to-back. The pipeline is
//! order-sensitive and idempotent; it never fails.

use aisle_graph::LocationGraph;
use aisle_grid::LocationId;

/// Repair a raw candidate (e.g. an oracle reply) into a valid route
#[must_use]
pub fn repair(
    candidate: &[String],
    graph: &LocationGraph,
    required: &[LocationId],
) -> Vec<LocationId> {
    let parsed: Vec<LocationId> = candidate
        .iter()
        .map(|raw| LocationId::from(raw.trim()))
        .collect();
    repair_sequence(parsed, graph, required)
}

/// Repair an already-typed candidate into a valid route
#[must_use]
pub fn repair_sequence(
    candidate: Vec<LocationId>,
    graph: &LocationGraph,
    required: &[LocationId],
) -> Vec<LocationId> {
    let before = candidate.len();
    let mut sequence: Vec<LocationId> = candidate
        .into_iter()
        .filter(|id| graph.contains(id))
        .collect();
    if sequence.len() < before {
        tracing::debug!(dropped = before - sequence.len(), "dropped unknown locations");
    }

    anchor_entrance(&mut sequence);
    anchor_checkout(&mut sequence);
    sequence.dedup();
    insert_missing(&mut sequence, required);
    sequence.dedup();

    sequence
}

/// Force `Entrance` to be the first element
fn anchor_entrance(sequence: &mut Vec<LocationId>) {
    if sequence.first() == Some(&LocationId::Entrance) {
        return;
    }
    sequence.retain(|id| *id != LocationId::Entrance);
    sequence.insert(0, LocationId::Entrance);
}

/// Force `Checkout` to be the last element
fn anchor_checkout(sequence: &mut Vec<LocationId>) {
    if sequence.last() == Some(&LocationId::Checkout) {
        return;
    }
    sequence.retain(|id| *id != LocationId::Checkout);
    sequence.push(LocationId::Checkout);
}

/// Insert required locations the candidate missed, just before the
/// final `Checkout`
fn insert_missing(sequence: &mut Vec<LocationId>, required: &[LocationId]) {
    let missing: Vec<LocationId> = required
        .iter()
        .filter(|id| !sequence.contains(id))
        .cloned()
        .collect();
    if missing.is_empty() {
        return;
    }
    tracing::debug!(count = missing.len(), "inserting missed required locations");

    match sequence.iter().rposition(|id| *id == LocationId::Checkout) {
        Some(pos) => {
            sequence.splice(pos..pos, missing);
        }
        None => {
            // Unreachable after anchoring, kept as a hard backstop
            sequence.extend(missing);
            sequence.push(LocationId::Checkout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aisle_grid::StoreGrid;
    use pretty_assertions::assert_eq;

    fn graph() -> LocationGraph {
        LocationGraph::build(&StoreGrid::parse("Entrance,A1\nB1,Checkout").unwrap())
    }

    fn ids(names: &[&str]) -> Vec<LocationId> {
        names.iter().map(|n| LocationId::from(*n)).collect()
    }

    fn raw(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn reorders_misplaced_entrance() {
        let out = repair(&raw(&["A1", "Entrance", "Checkout"]), &graph(), &ids(&["A1"]));
        assert_eq!(out, ids(&["Entrance", "A1", "Checkout"]));
    }

    #[test]
    fn drops_unknown_and_hole_ids() {
        let out = repair(
            &raw(&["banana", "Empty", "A1", "Unknown", "Checkout"]),
            &graph(),
            &ids(&["A1"]),
        );
        assert_eq!(out, ids(&["Entrance", "A1", "Checkout"]));
    }

    #[test]
    fn collapses_stutters() {
        let out = repair(&raw(&["A1", "A1", "Checkout"]), &graph(), &ids(&["A1"]));
        assert_eq!(out, ids(&["Entrance", "A1", "Checkout"]));
    }

    #[test]
    fn inserts_missing_before_checkout() {
        let out = repair(&raw(&["Entrance", "A1", "Checkout"]), &graph(), &ids(&["A1", "B1"]));
        assert_eq!(out, ids(&["Entrance", "A1", "B1", "Checkout"]));
    }

    #[test]
    fn empty_candidate_becomes_minimal_route() {
        let out = repair(&raw(&[]), &graph(), &ids(&["A1", "B1"]));
        assert_eq!(out, ids(&["Entrance", "A1", "B1", "Checkout"]));
    }

    #[test]
    fn reversed_endpoints_are_fixed() {
        let out = repair(&raw(&["Checkout", "Entrance"]), &graph(), &ids(&[]));
        assert_eq!(out, ids(&["Entrance", "Checkout"]));
    }

    #[test]
    fn misplaced_checkout_is_moved_to_the_end() {
        let out = repair(
            &raw(&["Entrance", "Checkout", "A1"]),
            &graph(),
            &ids(&["A1"]),
        );
        assert_eq!(out, ids(&["Entrance", "A1", "Checkout"]));
    }

    #[test]
    fn legitimate_revisit_is_kept() {
        // Non-consecutive repeats survive; only stutters collapse
        let out = repair(
            &raw(&["Entrance", "A1", "B1", "A1", "Checkout"]),
            &graph(),
            &ids(&["A1", "B1"]),
        );
        assert_eq!(out, ids(&["Entrance", "A1", "B1", "A1", "Checkout"]));
    }

    #[test]
    fn repair_is_idempotent() {
        let candidates: Vec<Vec<String>> = vec![
            raw(&[]),
            raw(&["Checkout"]),
            raw(&["banana"]),
            raw(&["Checkout", "Entrance"]),
            raw(&["A1", "A1", "B1"]),
        ];
        for candidate in candidates {
            let once = repair(&candidate, &graph(), &ids(&["A1", "B1"]));
            let twice = repair_sequence(once.clone(), &graph(), &ids(&["A1", "B1"]));
            assert_eq!(once, twice);
        }
    }
}
