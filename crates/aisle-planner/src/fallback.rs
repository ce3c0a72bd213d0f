//! Local tour ordering when the oracle is unavailable
//!
//! Nearest-neighbor over the cached distance table: good enough for
//! cart-sized location sets, and every tour still passes through the
//! repair pipeline, so quality here can never cost correctness.

use aisle_graph::DistanceTable;
use aisle_grid::LocationId;

/// Order required locations greedily from `Entrance` to `Checkout`
///
/// At each step the reachable unvisited location with the smallest hop
/// count from the current position wins; ties break by lexicographic id
/// order. Locations unreachable from the current position are deferred;
/// if only unreachable ones remain they are appended in lexicographic
/// order ahead of the final `Checkout`.
#[must_use]
pub fn nearest_neighbor(distances: &DistanceTable, required: &[LocationId]) -> Vec<LocationId> {
    let mut remaining: Vec<LocationId> = Vec::new();
    for id in required {
        if !id.is_role() && !remaining.contains(id) {
            remaining.push(id.clone());
        }
    }

    let mut sequence = vec![LocationId::Entrance];
    let mut current = LocationId::Entrance;

    while !remaining.is_empty() {
        let next = remaining
            .iter()
            .enumerate()
            .filter_map(|(i, id)| distances.distance(&current, id).map(|hops| (hops, id.as_str(), i)))
            .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

        match next {
            Some((hops, _, i)) => {
                let id = remaining.remove(i);
                tracing::trace!(to = %id, hops, "nearest neighbor step");
                current = id.clone();
                sequence.push(id);
            }
            None => {
                // Nothing reachable from here; park the stragglers at
                // the tail in a stable order
                remaining.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                sequence.append(&mut remaining);
                break;
            }
        }
    }

    sequence.push(LocationId::Checkout);
    sequence
}
