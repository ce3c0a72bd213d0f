//! Request and result types for the planning entry point

use aisle_grid::LocationId;
use aisle_oracle::ItemDescriptor;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique planning-request identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanId(pub Ulid);

impl PlanId {
    /// Generate new plan ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cart entry: an item label plus its claimed shelf location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Item label, e.g. `"Sourdough Bread (Loaf)"`
    pub label: String,
    /// Claimed location id; validated against the grid during planning
    pub location: String,
}

impl CartItem {
    /// Create a cart item
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            location: location.into(),
        }
    }

    /// Descriptor form handed to the oracle
    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> ItemDescriptor {
        ItemDescriptor::new(self.label.clone(), self.location.clone())
    }
}

/// A planning request: the cart plus the raw layout text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Items to collect, in cart order
    pub cart: Vec<CartItem>,
    /// Store layout in comma/newline grid form
    pub layout: String,
}

impl PlanRequest {
    /// Create a request
    #[inline]
    #[must_use]
    pub fn new(layout: impl Into<String>, cart: Vec<CartItem>) -> Self {
        Self {
            cart,
            layout: layout.into(),
        }
    }
}

/// A validated shopping route
///
/// The sequence always starts at `Entrance`, ends at `Checkout`, covers
/// every required location that exists in the grid, and is free of
/// consecutive repeats. Cart locations absent from the grid are
/// excluded from the tour and reported in `skipped`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Request identifier, also stamped on log lines
    pub id: PlanId,
    /// Visiting order over location ids
    pub sequence: Vec<LocationId>,
    /// Cart locations that do not exist in the layout
    pub skipped: Vec<String>,
}
