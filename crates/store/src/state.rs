//! Session state aggregate and its read-only view.

use serde::Serialize;

use docsearch_core::{SearchHit, SearchRequest};

/// The mutable aggregate guarded by the store's lock.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    /// Most recently submitted parameter copy.
    pub(crate) request: SearchRequest,
    /// Current result set, in collaborator response order.
    pub(crate) results: Vec<SearchHit>,
    /// True strictly between a start command and its terminal command.
    pub(crate) loading: bool,
    /// Message from the most recent failed cycle, cleared on the next start.
    pub(crate) error: Option<String>,
}

/// Owned, read-only view of the session state at one point in time.
///
/// Handed to rendering collaborators; mutating a snapshot has no effect on
/// the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Most recently submitted search parameters.
    pub request: SearchRequest,
    /// Current result set, in collaborator response order.
    pub results: Vec<SearchHit>,
    /// Whether a search cycle is in flight.
    pub loading: bool,
    /// Error message from the most recent failed cycle, if any.
    pub error: Option<String>,
}

impl SessionSnapshot {
    /// Look up a result row by document id.
    pub fn result(&self, doc_id: &str) -> Option<&SearchHit> {
        self.results.iter().find(|hit| hit.doc_id == doc_id)
    }

    /// Whether the last completed cycle produced an empty, non-error result
    /// set (the "no results" rendering state).
    pub fn is_empty_success(&self) -> bool {
        !self.loading && self.error.is_none() && self.results.is_empty()
    }
}
