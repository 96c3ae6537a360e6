//! Search execution: validation, sequencing, outcome dispatch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use docsearch_core::{SearchError, SearchRequest};
use docsearch_store::SessionStore;

use crate::lookup::Lookup;

/// Drives search cycles against a [`SessionStore`].
///
/// Exactly one terminal outcome reaches the store per latest invocation:
/// `report_success` on a resolved lookup, `report_failure` on a lookup error
/// or an elapsed deadline. Validation failures never reach the store at all.
///
/// Overlapping submissions are sequenced with a monotonically increasing
/// request token: when a completion arrives for a request that is no longer
/// the latest, it is discarded so a slow early response can never overwrite
/// the outcome of a later search.
pub struct SearchExecutor {
    store: Arc<SessionStore>,
    lookup: Arc<dyn Lookup>,
    timeout: Option<Duration>,
    seq: AtomicU64,
}

impl SearchExecutor {
    /// Create an executor over the given store and lookup collaborator.
    ///
    /// No deadline is applied to the lookup unless [`with_timeout`] is
    /// called.
    ///
    /// [`with_timeout`]: SearchExecutor::with_timeout
    pub fn new(store: Arc<SessionStore>, lookup: Arc<dyn Lookup>) -> Self {
        Self {
            store,
            lookup,
            timeout: None,
            seq: AtomicU64::new(0),
        }
    }

    /// Apply a deadline to every lookup invocation.
    ///
    /// An elapsed deadline is reported through the store as a failure
    /// outcome, like any other lookup failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The store this executor dispatches outcomes into.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Run one search cycle.
    ///
    /// Returns `Err(SearchError::EmptyCriteria)` when the request names
    /// neither a document id nor a source; the store is not touched and the
    /// lookup is not invoked. For every valid request the cycle completes
    /// through the store and `Ok(())` is returned, including when the lookup
    /// itself failed (the failure lands in the session error message) and
    /// when the completion was superseded by a newer submission.
    pub async fn execute(&self, request: SearchRequest) -> Result<(), SearchError> {
        request.validate()?;

        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, "dispatching search");
        self.store.remember_request(request.clone());
        self.store.start_search();

        let outcome = match self.timeout {
            Some(deadline) => match tokio::time::timeout(deadline, self.lookup.find(&request)).await
            {
                Ok(result) => result.map_err(|e| SearchError::Lookup { message: e.message }),
                Err(_) => Err(SearchError::Timeout {
                    ms: deadline.as_millis() as u64,
                }),
            },
            None => self
                .lookup
                .find(&request)
                .await
                .map_err(|e| SearchError::Lookup { message: e.message }),
        };

        if self.seq.load(Ordering::SeqCst) != token {
            debug!(token, "discarding completion of superseded search");
            return Ok(());
        }

        match outcome {
            Ok(hits) => {
                debug!(token, hits = hits.len(), "search resolved");
                self.store.report_success(hits);
            }
            Err(err) => {
                warn!(token, error = %err, "search failed");
                self.store.report_failure(err.user_message());
            }
        }
        Ok(())
    }
}
