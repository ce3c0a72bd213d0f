//! Aisle Graph - Reachability and distances over a store layout
//!
//! Derives a node-level graph from a parsed [`StoreGrid`](aisle_grid::StoreGrid):
//! - Cells sharing a location id collapse into one logical node
//! - 4-directional adjacency between non-hole cells becomes node edges
//! - All-pairs hop counts cached in a [`DistanceTable`], with
//!   unreachable pairs represented as `None`
//!
//! # Example
//!
//! ```rust
//! use aisle_graph::{DistanceTable, LocationGraph};
//! use aisle_grid::{LocationId, StoreGrid};
//!
//! let grid = StoreGrid::parse("Entrance,A1\nB1,Checkout")?;
//! let graph = LocationGraph::build(&grid);
//! let distances = DistanceTable::compute(&graph);
//!
//! assert_eq!(
//!     distances.distance(&LocationId::Entrance, &LocationId::shelf("A1")),
//!     Some(1)
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod distance;
pub mod graph;

pub use distance::DistanceTable;
pub use graph::LocationGraph;
