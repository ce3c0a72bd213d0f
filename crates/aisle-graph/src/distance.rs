//! All-pairs shortest distances over the location graph
//!
//! Computed once per graph and cached in a dense symmetric table.
//! Unreachable pairs are `None`, never a sentinel value a caller could
//! accidentally do arithmetic with.

use crate::graph::LocationGraph;
use aisle_grid::LocationId;
use indexmap::IndexMap;
use petgraph::algo::dijkstra;

/// Dense symmetric table of node-level hop counts
#[derive(Debug, Clone)]
pub struct DistanceTable {
    ids: IndexMap<LocationId, usize>,
    dist: Vec<Option<u32>>,
}

impl DistanceTable {
    /// Compute distances for every node pair
    ///
    /// One unit-cost Dijkstra pass per source node; on an unweighted
    /// graph this is breadth-first distance.
    #[must_use]
    pub fn compute(graph: &LocationGraph) -> Self {
        let ids: IndexMap<LocationId, usize> = graph
            .nodes()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        let n = ids.len();
        let mut dist = vec![None; n * n];

        for (id, &row) in &ids {
            let Some(source) = graph.node_index(id) else {
                continue;
            };
            let reached = dijkstra(graph.inner(), source, None, |_| 1u32);
            for (target, hops) in reached {
                let target_id = &graph.inner()[target];
                if let Some(&col) = ids.get(target_id) {
                    dist[row * n + col] = Some(hops);
                }
            }
        }

        Self { ids, dist }
    }

    /// Hop count between two ids
    ///
    /// `None` means the pair is unreachable or either id is not a node.
    /// Callers must treat that as a hard constraint, not as a large
    /// distance.
    #[must_use]
    pub fn distance(&self, from: &LocationId, to: &LocationId) -> Option<u32> {
        let row = *self.ids.get(from)?;
        let col = *self.ids.get(to)?;
        self.dist[row * self.ids.len() + col]
    }

    /// Whether a finite path exists between two ids
    #[inline]
    #[must_use]
    pub fn is_reachable(&self, from: &LocationId, to: &LocationId) -> bool {
        self.distance(from, to).is_some()
    }

    /// Number of nodes covered by the table
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }
}
