//! Session facade wiring the store and executor together.

use std::sync::Arc;
use std::time::Duration;

use docsearch_core::{SearchError, SearchRequest};
use docsearch_executor::{Lookup, SearchExecutor};
use docsearch_store::{SessionSnapshot, SessionStore};

/// One document search session.
///
/// Owns the [`SessionStore`] and the [`SearchExecutor`] over it. Commands a
/// front-end issues map one-to-one onto this type: submit a search, toggle a
/// row's access flag, take a snapshot to render.
pub struct Session {
    store: Arc<SessionStore>,
    executor: SearchExecutor,
}

impl Session {
    /// Create a session over the given lookup collaborator.
    pub fn new(lookup: Arc<dyn Lookup>) -> Self {
        let store = SessionStore::shared();
        let executor = SearchExecutor::new(Arc::clone(&store), lookup);
        Self { store, executor }
    }

    /// Create a session whose lookups are bounded by a deadline.
    pub fn with_timeout(lookup: Arc<dyn Lookup>, timeout: Duration) -> Self {
        let store = SessionStore::shared();
        let executor = SearchExecutor::new(Arc::clone(&store), lookup).with_timeout(timeout);
        Self { store, executor }
    }

    /// Submit a search.
    ///
    /// Returns `Err(SearchError::EmptyCriteria)` for a request naming
    /// neither a document id nor a source; the session state is untouched in
    /// that case. Every other outcome, including lookup failures, completes
    /// through the store and is visible in the next [`snapshot`].
    ///
    /// [`snapshot`]: Session::snapshot
    pub async fn search(&self, request: SearchRequest) -> Result<(), SearchError> {
        self.executor.execute(request).await
    }

    /// Flip the access flag of one result row. Unknown ids are a silent
    /// no-op returning `false`.
    pub fn toggle_access(&self, doc_id: &str) -> bool {
        self.store.toggle_access(doc_id)
    }

    /// Read-only view of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.store.snapshot()
    }

    /// The underlying store, for collaborators that issue commands directly.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsearch_executor::MockLookup;

    #[tokio::test]
    async fn session_rejects_empty_criteria_locally() {
        let session = Session::new(Arc::new(MockLookup::with_sample_results()));
        let err = session.search(SearchRequest::new()).await.unwrap_err();
        assert_eq!(err, SearchError::EmptyCriteria);
        assert!(session.snapshot().is_empty_success());
    }

    #[tokio::test]
    async fn session_search_and_toggle_round() {
        let session = Session::new(Arc::new(MockLookup::with_sample_results()));
        let mut request = SearchRequest::new();
        request.set_field("source", "Source1");
        session.search(request).await.unwrap();

        assert!(session.snapshot().results[0].access);
        assert!(session.toggle_access("DOC123"));
        assert!(!session.snapshot().results[0].access);
    }
}
