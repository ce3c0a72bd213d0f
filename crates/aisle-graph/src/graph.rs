//! Node-level location graph derived from a grid
//!
//! All cells sharing a [`LocationId`] collapse into one logical node;
//! an edge exists between two nodes when any pair of their cells is
//! 4-directionally adjacent. `Empty` and `Unknown` cells are holes:
//! they are neither nodes nor bridges.

use aisle_grid::{LocationId, StoreGrid};
use indexmap::IndexMap;
use petgraph::graph::{NodeIndex, UnGraph};

/// Undirected graph over distinct location ids
#[derive(Debug, Clone)]
pub struct LocationGraph {
    inner: UnGraph<LocationId, ()>,
    index: IndexMap<LocationId, NodeIndex>,
}

impl LocationGraph {
    /// Build the graph from a parsed grid
    ///
    /// Node identity is the location id, not the cell coordinate. A
    /// layout that reuses one id for unrelated shelves therefore merges
    /// them into a single node and may report adjacency neither shelf
    /// has on its own; layouts are expected to keep ids contiguous.
    #[must_use]
    pub fn build(grid: &StoreGrid) -> Self {
        let mut inner = UnGraph::new_undirected();
        let mut index: IndexMap<LocationId, NodeIndex> = IndexMap::new();

        for cell in grid.cells() {
            if let Some(id) = cell.kind.location_id() {
                index
                    .entry(id.clone())
                    .or_insert_with(|| inner.add_node(id.clone()));
            }
        }

        // Right and down neighbors cover every 4-directional pair once
        for cell in grid.cells() {
            let Some(id) = cell.kind.location_id() else {
                continue;
            };
            let from = index[id];
            for (row, col) in [(cell.row, cell.col + 1), (cell.row + 1, cell.col)] {
                let Some(other) = grid.cell(row, col) else {
                    continue;
                };
                let Some(other_id) = other.kind.location_id() else {
                    continue;
                };
                if other_id == id {
                    continue;
                }
                let to = index[other_id];
                inner.update_edge(from, to, ());
            }
        }

        Self { inner, index }
    }

    /// Whether the id is a node of this graph
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &LocationId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of logical nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of node-level edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Node ids in grid row-major first-seen order
    #[inline]
    pub fn nodes(&self) -> impl Iterator<Item = &LocationId> {
        self.index.keys()
    }

    /// Neighbors of a node, if it exists
    pub fn neighbors(&self, id: &LocationId) -> Option<Vec<&LocationId>> {
        let ix = *self.index.get(id)?;
        Some(
            self.inner
                .neighbors(ix)
                .map(|n| &self.inner[n])
                .collect(),
        )
    }

    /// Internal petgraph handle for a node
    pub(crate) fn node_index(&self, id: &LocationId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Internal petgraph storage
    pub(crate) fn inner(&self) -> &UnGraph<LocationId, ()> {
        &self.inner
    }
}
