//! Error types for layout parsing and validation

/// Errors raised while parsing layout text into a [`StoreGrid`](crate::StoreGrid)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Layout text was empty or whitespace-only
    #[error("layout text is empty")]
    EmptyInput,

    /// Row lengths differ; the grid must be rectangular
    #[error("row {row} has {found} cells, expected {expected}")]
    IrregularRows {
        /// 0-indexed offending row
        row: usize,
        /// Column count established by the first row
        expected: usize,
        /// Column count found on the offending row
        found: usize,
    },
}

/// Structural validation errors on a parsed grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Grid has no rows
    #[error("grid has no rows")]
    EmptyGrid,

    /// No cell resolved to the Entrance role
    #[error("layout has no Entrance cell")]
    MissingEntrance,

    /// No cell resolved to the Checkout role
    #[error("layout has no Checkout cell")]
    MissingCheckout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError::IrregularRows {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 cells, expected 4");
    }

    #[test]
    fn layout_error_display() {
        assert!(LayoutError::MissingEntrance
            .to_string()
            .contains("Entrance"));
        assert!(LayoutError::MissingCheckout
            .to_string()
            .contains("Checkout"));
    }
}
