//! Required-location extraction from the cart

use crate::types::CartItem;
use aisle_graph::LocationGraph;
use aisle_grid::LocationId;

/// The set of shelf locations a route must cover
///
/// Unique and order-preserving over the cart. Role locations
/// (`Entrance`/`Checkout`) are omitted: the anchors guarantee them on
/// every route. Locations absent from the graph cannot be visited and
/// are collected separately for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredLocations {
    required: Vec<LocationId>,
    skipped: Vec<String>,
}

impl RequiredLocations {
    /// Partition cart locations into plannable and unknown
    #[must_use]
    pub fn from_cart(cart: &[CartItem], graph: &LocationGraph) -> Self {
        let mut required: Vec<LocationId> = Vec::new();
        let mut skipped: Vec<String> = Vec::new();

        for item in cart {
            let id = LocationId::from(item.location.trim());
            if id.is_role() {
                continue;
            }
            if graph.contains(&id) {
                if !required.contains(&id) {
                    required.push(id);
                }
            } else if !skipped.contains(&item.location) {
                skipped.push(item.location.clone());
            }
        }

        Self { required, skipped }
    }

    /// Locations the route must visit
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[LocationId] {
        &self.required
    }

    /// Cart locations with no node in the graph
    #[inline]
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
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

    fn item(location: &str) -> CartItem {
        CartItem::new("item", location)
    }

    #[test]
    fn dedup_preserves_cart_order() {
        let cart = vec![item("B1"), item("A1"), item("B1")];
        let required = RequiredLocations::from_cart(&cart, &graph());
        assert_eq!(
            required.ids(),
            &[LocationId::shelf("B1"), LocationId::shelf("A1")]
        );
        assert!(required.skipped().is_empty());
    }

    #[test]
    fn unknown_locations_are_skipped() {
        let cart = vec![item("A1"), item("Z9"), item("Z9")];
        let required = RequiredLocations::from_cart(&cart, &graph());
        assert_eq!(required.ids(), &[LocationId::shelf("A1")]);
        assert_eq!(required.skipped(), &["Z9".to_string()]);
    }

    #[test]
    fn role_locations_are_neither_required_nor_skipped() {
        let cart = vec![item("Entrance"), item("Checkout")];
        let required = RequiredLocations::from_cart(&cart, &graph());
        assert!(required.ids().is_empty());
        assert!(required.skipped().is_empty());
    }

    #[test]
    fn locations_are_trimmed() {
        let cart = vec![item("  A1 ")];
        let required = RequiredLocations::from_cart(&cart, &graph());
        assert_eq!(required.ids(), &[LocationId::shelf("A1")]);
    }
}
