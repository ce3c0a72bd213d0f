//! Aisle Planner - Route planning core
//!
//! Turns a cart and a layout into a validated shopping route:
//! - Resolves the store model (grid, graph, distances) once per layout
//! - Asks the untrusted proposal oracle under a deadline
//! - Repairs any proposal into an invariant-satisfying sequence
//! - Plans locally with nearest-neighbor ordering when the oracle fails
//!
//! The caller-visible contract is total: valid inputs always yield a
//! valid route, and only input problems (`EmptyCart`, an unusable
//! layout) surface as errors.
//!
//! # Example
//!
//! ```rust
//! use aisle_planner::{CartItem, PlanRequest, PlannerConfig, RoutePlanner};
//! use aisle_oracle::ScriptedOracle;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let oracle = Arc::new(ScriptedOracle::proposing(["Entrance", "A1", "Checkout"]));
//! let planner = RoutePlanner::new(oracle, PlannerConfig::new());
//!
//! let request = PlanRequest::new(
//!     "Entrance,A1\nB1,Checkout",
//!     vec![CartItem::new("Apples", "A1")],
//! );
//! let plan = planner.plan(&request).await?;
//!
//! assert_eq!(plan.sequence.first().map(ToString::to_string), Some("Entrance".into()));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fallback;
pub mod model;
pub mod planner;
pub mod repair;
pub mod required;
pub mod types;

pub use config::PlannerConfig;
pub use error::{ConfigError, PlanError};
pub use model::{LayoutCache, StoreModel};
pub use planner::RoutePlanner;
pub use required::RequiredLocations;
pub use types::{CartItem, PlanId, PlanRequest, RoutePlan};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the planner
    pub use crate::{CartItem, PlanError, PlanRequest, PlannerConfig, RoutePlan, RoutePlanner};
    pub use aisle_grid::LocationId;
    pub use aisle_oracle::{RouteOracle, ScriptedOracle};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
