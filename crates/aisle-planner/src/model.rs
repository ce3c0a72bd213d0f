//! Shared store model and the per-layout cache
//!
//! A [`StoreModel`] bundles everything derived from one layout: the
//! parsed grid, the location graph, and the distance table. It is
//! immutable after construction, so concurrent planning requests share
//! it through an `Arc` without locking. A changed layout hashes to a
//! new key and gets a freshly built model; nothing is mutated in place.

use crate::error::PlanError;
use aisle_graph::{DistanceTable, LocationGraph};
use aisle_grid::StoreGrid;
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Everything derived from a single validated layout
#[derive(Debug, Clone)]
pub struct StoreModel {
    /// Parsed rectangular grid
    pub grid: StoreGrid,
    /// Node-level location graph
    pub graph: LocationGraph,
    /// All-pairs hop counts
    pub distances: DistanceTable,
}

impl StoreModel {
    /// Parse, validate, and derive the graph and distances
    ///
    /// # Errors
    /// [`PlanError::Parse`] or [`PlanError::Layout`] for an unusable
    /// layout; no partial models are produced.
    pub fn from_layout(layout: &str) -> Result<Self, PlanError> {
        let grid = StoreGrid::parse(layout)?;
        grid.validate()?;
        let graph = LocationGraph::build(&grid);
        let distances = DistanceTable::compute(&graph);
        Ok(Self {
            grid,
            graph,
            distances,
        })
    }
}

type LayoutDigest = [u8; 32];

/// Concurrent cache of store models keyed by layout content
#[derive(Debug)]
pub struct LayoutCache {
    inner: DashMap<LayoutDigest, Arc<StoreModel>>,
    capacity: usize,
}

impl LayoutCache {
    /// Create a cache holding at most `capacity` layouts
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Fetch the model for a layout, building it on first sight
    ///
    /// Invalid layouts are never cached; they fail again on retry.
    ///
    /// # Errors
    /// Same as [`StoreModel::from_layout`].
    pub fn get_or_build(&self, layout: &str) -> Result<Arc<StoreModel>, PlanError> {
        let key = digest(layout);
        if let Some(hit) = self.inner.get(&key) {
            tracing::debug!("layout cache hit");
            return Ok(Arc::clone(&hit));
        }

        let model = Arc::new(StoreModel::from_layout(layout)?);
        // Layouts change wholesale and rarely; at capacity the cache is
        // dropped as a whole rather than tracking recency
        if self.inner.len() >= self.capacity {
            self.inner.clear();
        }
        self.inner.insert(key, Arc::clone(&model));
        tracing::debug!(
            nodes = model.graph.node_count(),
            cached = self.inner.len(),
            "layout model built"
        );
        Ok(model)
    }

    /// Number of cached layouts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn digest(layout: &str) -> LayoutDigest {
    let mut hasher = Sha256::new();
    hasher.update(layout.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aisle_grid::LayoutError;

    const LAYOUT: &str = "Entrance,A1\nB1,Checkout";

    #[test]
    fn model_from_valid_layout() {
        let model = StoreModel::from_layout(LAYOUT).unwrap();
        assert_eq!(model.graph.node_count(), 4);
        assert_eq!(model.distances.node_count(), 4);
    }

    #[test]
    fn model_rejects_invalid_layout() {
        assert!(matches!(
            StoreModel::from_layout("Entrance,A1"),
            Err(PlanError::Layout(LayoutError::MissingCheckout))
        ));
    }

    #[test]
    fn cache_returns_same_model_for_same_text() {
        let cache = LayoutCache::new(4);
        let a = cache.get_or_build(LAYOUT).unwrap();
        let b = cache.get_or_build(LAYOUT).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_distinguishes_layouts() {
        let cache = LayoutCache::new(4);
        cache.get_or_build(LAYOUT).unwrap();
        cache.get_or_build("Entrance,B7\nA2,Checkout").unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cache_resets_at_capacity() {
        let cache = LayoutCache::new(2);
        cache.get_or_build(LAYOUT).unwrap();
        cache.get_or_build("Entrance,B7\nA2,Checkout").unwrap();
        cache.get_or_build("Entrance,C9\nA3,Checkout").unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_does_not_store_invalid_layouts() {
        let cache = LayoutCache::new(4);
        assert!(cache.get_or_build("").is_err());
        assert!(cache.is_empty());
    }
}
