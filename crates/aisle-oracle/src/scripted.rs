//! Deterministic oracle double for tests and offline runs
//!
//! Plays back a queue of canned outcomes, one per `propose` call. An
//! exhausted queue reports an empty response, which downstream code
//! treats like any other oracle failure.

use crate::error::OracleError;
use crate::oracle::{ItemDescriptor, RouteOracle};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted stand-in for a generative backend
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    replies: Mutex<VecDeque<Result<Vec<String>, OracleError>>>,
    calls: AtomicUsize,
}

impl ScriptedOracle {
    /// Empty script; every call reports an empty response
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a single proposal
    #[must_use]
    pub fn proposing<I, S>(sequence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().then_proposing(sequence)
    }

    /// Script a single timeout failure
    #[must_use]
    pub fn failing() -> Self {
        Self::new().then_failing(OracleError::Timeout)
    }

    /// Queue a proposal outcome
    #[must_use]
    pub fn then_proposing<I, S>(self, sequence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replies
            .lock()
            .expect("script lock poisoned")
            .push_back(Ok(sequence.into_iter().map(Into::into).collect()));
        self
    }

    /// Queue a failure outcome
    #[must_use]
    pub fn then_failing(self, error: OracleError) -> Self {
        self.replies
            .lock()
            .expect("script lock poisoned")
            .push_back(Err(error));
        self
    }

    /// Number of `propose` calls observed
    #[inline]
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RouteOracle for ScriptedOracle {
    async fn propose(
        &self,
        _layout: &str,
        _items: &[ItemDescriptor],
    ) -> Result<Vec<String>, OracleError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.replies
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or(Err(OracleError::EmptyResponse))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn plays_back_in_order() {
        let oracle = ScriptedOracle::proposing(["Entrance", "A1", "Checkout"])
            .then_failing(OracleError::Timeout);

        let first = oracle.propose("", &[]).await.unwrap();
        assert_eq!(first, vec!["Entrance", "A1", "Checkout"]);

        assert!(matches!(
            oracle.propose("", &[]).await,
            Err(OracleError::Timeout)
        ));
        assert_eq!(oracle.calls(), 2);
    }

    #[tokio::test]
    async fn exhausted_script_reports_empty() {
        let oracle = ScriptedOracle::new();
        assert!(matches!(
            oracle.propose("", &[]).await,
            Err(OracleError::EmptyResponse)
        ));
    }
}
