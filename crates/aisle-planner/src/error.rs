//! Caller-visible planning errors
//!
//! Only input validity is surfaced: a layout that cannot be used, or a
//! cart with nothing in it. Oracle failures of any kind are absorbed by
//! local planning and never appear here.

use aisle_grid::{LayoutError, ParseError};

/// Errors returned by the planning entry point
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Layout text could not be parsed into a grid
    #[error("invalid layout: {0}")]
    Parse(#[from] ParseError),

    /// Parsed grid failed structural validation
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),

    /// Cart contains no items
    #[error("cart is empty")]
    EmptyCart,
}

impl PlanError {
    /// Whether this error concerns the layout rather than the cart
    #[inline]
    #[must_use]
    pub fn is_invalid_layout(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Layout(_))
    }
}

/// Errors loading a [`PlannerConfig`](crate::PlannerConfig) from disk
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the expected schema
    #[error("malformed config: {0}")]
    Malformed(#[from] toml::de::Error),
}
