//! Aisle Grid - Store layout model
//!
//! Parses layout text into a rectangular grid of typed cells:
//! - Cell roles resolved once at parse time (`Empty`, `Unknown`, or a
//!   [`LocationId`])
//! - Strict rectangular-shape parsing with typed errors
//! - Structural validation (Entrance and Checkout must exist)
//!
//! # Example
//!
//! ```rust
//! use aisle_grid::{LocationId, StoreGrid};
//!
//! let grid = StoreGrid::parse("Entrance,A1: Fruits\nB1,Checkout")?;
//! grid.validate()?;
//!
//! assert!(grid.contains(&LocationId::shelf("A1")));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::{Cell, CellKind, LocationId};
pub use error::{LayoutError, ParseError};
pub use grid::StoreGrid;
