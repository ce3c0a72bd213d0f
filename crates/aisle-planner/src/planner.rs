//! The planning entry point
//!
//! One request is one logical operation: resolve the store model
//! (cached per layout), extract required locations from the cart, ask
//! the oracle under a deadline, then repair its answer or plan locally.
//! The caller always gets a valid route or an input-validity error;
//! oracle trouble of any kind is absorbed here.

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::model::LayoutCache;
use crate::required::RequiredLocations;
use crate::types::{PlanId, PlanRequest, RoutePlan};
use crate::{fallback, repair};
use aisle_oracle::{ItemDescriptor, RouteOracle};
use std::sync::Arc;
use tokio::time::timeout;

/// Route planner with a pluggable proposal oracle
pub struct RoutePlanner {
    oracle: Arc<dyn RouteOracle>,
    config: PlannerConfig,
    cache: LayoutCache,
}

impl RoutePlanner {
    /// Create a planner
    #[must_use]
    pub fn new(oracle: Arc<dyn RouteOracle>, config: PlannerConfig) -> Self {
        let cache = LayoutCache::new(config.max_cached_layouts);
        Self {
            oracle,
            config,
            cache,
        }
    }

    /// Plan a route for one shopping trip
    ///
    /// # Errors
    /// - [`PlanError::EmptyCart`] if the cart has no items
    /// - [`PlanError::Parse`] / [`PlanError::Layout`] if the layout is
    ///   unusable
    ///
    /// Oracle failures are not errors: the tour is ordered locally and
    /// the result is still valid.
    pub async fn plan(&self, request: &PlanRequest) -> Result<RoutePlan, PlanError> {
        let id = PlanId::new();

        if request.cart.is_empty() {
            return Err(PlanError::EmptyCart);
        }
        let model = self.cache.get_or_build(&request.layout)?;
        let required = RequiredLocations::from_cart(&request.cart, &model.graph);
        tracing::debug!(
            plan = %id,
            items = request.cart.len(),
            required = required.ids().len(),
            skipped = required.skipped().len(),
            "planning route"
        );

        let descriptors: Vec<ItemDescriptor> =
            request.cart.iter().map(|item| item.descriptor()).collect();

        let proposal = match timeout(
            self.config.oracle_timeout(),
            self.oracle.propose(&request.layout, &descriptors),
        )
        .await
        {
            Ok(Ok(candidate)) => Some(candidate),
            Ok(Err(error)) => {
                tracing::warn!(plan = %id, oracle = self.oracle.name(), %error, "oracle failed, planning locally");
                None
            }
            Err(_) => {
                tracing::warn!(
                    plan = %id,
                    oracle = self.oracle.name(),
                    deadline_secs = self.config.oracle_timeout_secs,
                    "oracle deadline elapsed, planning locally"
                );
                None
            }
        };

        let sequence = match proposal {
            Some(candidate) => {
                tracing::debug!(plan = %id, proposed = candidate.len(), "repairing oracle proposal");
                repair::repair(&candidate, &model.graph, required.ids())
            }
            None => {
                let tour = fallback::nearest_neighbor(&model.distances, required.ids());
                repair::repair_sequence(tour, &model.graph, required.ids())
            }
        };

        tracing::info!(plan = %id, steps = sequence.len(), "route planned");
        Ok(RoutePlan {
            id,
            sequence,
            skipped: required.skipped().to_vec(),
        })
    }

    /// Planner configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Number of layouts currently cached
    #[inline]
    #[must_use]
    pub fn cached_layouts(&self) -> usize {
        self.cache.len()
    }
}

impl std::fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner")
            .field("oracle", &self.oracle.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
