//! Rectangular store grid parsed from layout text
//!
//! Layout text is newline-separated rows of comma-separated cells.
//! Parsing is strict about shape: irregular row lengths are rejected
//! rather than padded, so a malformed layout fails before any path
//! computation.

use crate::cell::{Cell, CellKind, LocationId};
use crate::error::{LayoutError, ParseError};
use serde::{Deserialize, Serialize};

/// Rectangular matrix of typed cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreGrid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl StoreGrid {
    /// Parse layout text into a grid
    ///
    /// Whitespace around rows and cells is trimmed. The first row fixes
    /// the column count; every later row must match it.
    ///
    /// # Errors
    /// - [`ParseError::EmptyInput`] if the text is empty or whitespace
    /// - [`ParseError::IrregularRows`] if any row length differs
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut cells = Vec::new();
        let mut cols = 0usize;
        let mut rows = 0usize;

        for (row, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.trim().split(',').collect();
            if row == 0 {
                cols = fields.len();
            } else if fields.len() != cols {
                return Err(ParseError::IrregularRows {
                    row,
                    expected: cols,
                    found: fields.len(),
                });
            }
            for (col, raw) in fields.into_iter().enumerate() {
                cells.push(Cell::new(raw.trim(), row, col));
            }
            rows += 1;
        }

        Ok(Self { cells, rows, cols })
    }

    /// Check the structural invariants required for planning
    ///
    /// # Errors
    /// - [`LayoutError::EmptyGrid`] if there are no rows
    /// - [`LayoutError::MissingEntrance`] / [`LayoutError::MissingCheckout`]
    ///   if the respective role cell is absent
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        if !self.contains(&LocationId::Entrance) {
            return Err(LayoutError::MissingEntrance);
        }
        if !self.contains(&LocationId::Checkout) {
            return Err(LayoutError::MissingCheckout);
        }
        Ok(())
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at a coordinate, if in bounds
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Whether any cell carries the given id
    #[must_use]
    pub fn contains(&self, id: &LocationId) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.kind.location_id() == Some(id))
    }

    /// Distinct location ids in row-major first-seen order
    ///
    /// Excludes `Empty` and `Unknown` cells; multiple cells sharing an
    /// id contribute it once.
    #[must_use]
    pub fn location_ids(&self) -> Vec<&LocationId> {
        let mut seen: Vec<&LocationId> = Vec::new();
        for cell in &self.cells {
            if let CellKind::Location(id) = &cell.kind {
                if !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEMO: &str = "\
Entrance,A1: Fruits,A2: Dairy,A3: Bakery
B1: Vegetables,Empty,Empty,A4: Meat
B2: Dairy,C1: Drinks,C2: Snacks,A5: Frozen
B3: Breakfast,C3: Toiletries,Checkout,Empty";

    #[test]
    fn parse_demo_layout() {
        let grid = StoreGrid::parse(DEMO).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
        assert!(grid.validate().is_ok());

        let cell = grid.cell(0, 1).unwrap();
        assert_eq!(cell.kind, CellKind::Location(LocationId::shelf("A1")));
        assert_eq!(cell.raw, "A1: Fruits");

        let hole = grid.cell(1, 1).unwrap();
        assert_eq!(hole.kind, CellKind::Empty);
    }

    #[test]
    fn parse_trims_rows_and_cells() {
        let grid = StoreGrid::parse("  Entrance , A1 \n B1 , Checkout  ").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(
            grid.cell(0, 1).unwrap().kind,
            CellKind::Location(LocationId::shelf("A1"))
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(StoreGrid::parse(""), Err(ParseError::EmptyInput));
        assert_eq!(StoreGrid::parse("   \n  "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn parse_rejects_irregular_rows() {
        let err = StoreGrid::parse("Entrance,A1\nB1").unwrap_err();
        assert_eq!(
            err,
            ParseError::IrregularRows {
                row: 1,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn validate_missing_roles() {
        let grid = StoreGrid::parse("A1,A2\nB1,B2").unwrap();
        assert_eq!(grid.validate(), Err(LayoutError::MissingEntrance));

        let grid = StoreGrid::parse("Entrance,A2\nB1,B2").unwrap();
        assert_eq!(grid.validate(), Err(LayoutError::MissingCheckout));
    }

    #[test]
    fn location_ids_dedup_shared_labels() {
        // Two cells labelled A1 collapse to one id
        let grid = StoreGrid::parse("Entrance,A1\nA1,Checkout").unwrap();
        let ids = grid.location_ids();
        assert_eq!(
            ids,
            vec![
                &LocationId::Entrance,
                &LocationId::shelf("A1"),
                &LocationId::Checkout,
            ]
        );
    }

    #[test]
    fn cell_out_of_bounds() {
        let grid = StoreGrid::parse("Entrance,Checkout").unwrap();
        assert!(grid.cell(0, 2).is_none());
        assert!(grid.cell(1, 0).is_none());
    }
}
