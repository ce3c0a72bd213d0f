//! The route-proposal capability trait

use crate::error::OracleError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One cart item together with its shelf coordinate
///
/// Renders as `"<label> (at <location>)"`, the descriptor form the
/// proposal backend is prompted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Item label, e.g. `"Organic Apples (1kg)"`
    pub label: String,
    /// Claimed location id, e.g. `"A1"`; not checked against any grid
    pub location: String,
}

impl ItemDescriptor {
    /// Create a descriptor
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            location: location.into(),
        }
    }
}

impl Display for ItemDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.label, self.location)
    }
}

/// Capability interface for the external proposal mechanism
///
/// Implementations are untrusted by contract: they return whatever the
/// backend produced as raw strings, or an [`OracleError`] on outright
/// failure. Endpoint anchoring, coverage, and id validity are enforced
/// downstream, so a hostile or broken implementation cannot violate the
/// planner's invariants.
#[async_trait]
pub trait RouteOracle: Send + Sync {
    /// Ask the backend for a candidate visiting order
    ///
    /// # Errors
    /// Any [`OracleError`]; callers recover by planning locally.
    async fn propose(
        &self,
        layout: &str,
        items: &[ItemDescriptor],
    ) -> Result<Vec<String>, OracleError>;

    /// Implementation name (for logs)
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_display() {
        let item = ItemDescriptor::new("Whole Milk (1L)", "A2");
        assert_eq!(item.to_string(), "Whole Milk (1L) (at A2)");
    }
}
