//! Search session store.
//!
//! `SessionStore` is the single authoritative in-memory holder of search
//! session state and the only component permitted to mutate it. Rendering
//! collaborators read owned [`SessionSnapshot`]s and issue commands; the
//! executor drives the search cycle:
//!
//! ```text
//! Idle -> Loading -> { Success, Failure } -> Idle
//! ```
//!
//! `loading` is true strictly between `start_search` and the corresponding
//! terminal command. A failure keeps the previous result rows visible beside
//! the error; a success replaces the result set wholesale. `toggle_access`
//! is independent of the cycle and may be issued at any time.
//!
//! # Thread Safety
//!
//! The store assumes cooperative, single-writer-at-a-time use. All methods
//! take `&self`; access is serialized by an internal `parking_lot::RwLock`,
//! so the store is safe to share as `Arc<SessionStore>` across tasks.

#![warn(clippy::all)]

mod state;

pub use state::SessionSnapshot;

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use docsearch_core::{SearchHit, SearchRequest};
use state::SessionState;

/// Single authoritative holder of search session state.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<SessionState>,
}

impl SessionStore {
    /// Create an idle store: no results, not loading, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store wrapped for sharing with collaborators.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Begin a search cycle: raise `loading`, clear any previous error.
    ///
    /// Results from the previous cycle stay in place until a terminal
    /// command replaces them. Calling this twice without an intervening
    /// terminal command is indistinguishable from one in-flight search;
    /// sequencing of overlapping submissions is the executor's concern.
    pub fn start_search(&self) {
        let mut state = self.inner.write();
        state.loading = true;
        state.error = None;
        debug!("search cycle started");
    }

    /// Retain the most recently submitted parameter copy for display.
    ///
    /// The copy is never mutated after submission.
    pub fn remember_request(&self, request: SearchRequest) {
        self.inner.write().request = request;
    }

    /// Terminal command: the lookup resolved.
    ///
    /// Replaces the result set wholesale (no merging with previous rows) and
    /// clears `loading`. An empty set is a valid, non-error outcome.
    pub fn report_success(&self, results: Vec<SearchHit>) {
        let mut state = self.inner.write();
        state.loading = false;
        state.error = None;
        debug!(results = results.len(), "search cycle succeeded");
        state.results = results;
    }

    /// Terminal command: the lookup failed.
    ///
    /// Clears `loading` and records the message. Result rows from earlier
    /// cycles are left untouched, so a failed re-search does not blank
    /// previously displayed rows.
    pub fn report_failure(&self, message: impl Into<String>) {
        let mut state = self.inner.write();
        let message = message.into();
        state.loading = false;
        debug!(error = %message, "search cycle failed");
        state.error = Some(message);
    }

    /// Flip the access flag of the row with the given document id.
    ///
    /// Returns whether a row was flipped. An unknown id is a silent no-op
    /// (`false`), treated as a benign race against a result set that changed
    /// since the caller's snapshot. Never touches `loading` or `error`.
    pub fn toggle_access(&self, doc_id: &str) -> bool {
        let mut state = self.inner.write();
        match state.results.iter_mut().find(|hit| hit.doc_id == doc_id) {
            Some(hit) => {
                hit.access = !hit.access;
                debug!(doc_id, access = hit.access, "access toggled");
                true
            }
            None => {
                debug!(doc_id, "toggle ignored: no such row");
                false
            }
        }
    }

    /// Owned, read-only view of the current state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.inner.read();
        SessionSnapshot {
            request: state.request.clone(),
            results: state.results.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(doc_id: &str, access: bool) -> SearchHit {
        SearchHit {
            doc_id: doc_id.to_string(),
            source: "Source1".to_string(),
            access,
            ..Default::default()
        }
    }

    #[test]
    fn new_store_is_idle() {
        let store = SessionStore::new();
        let snap = store.snapshot();
        assert!(!snap.loading);
        assert!(snap.error.is_none());
        assert!(snap.results.is_empty());
    }

    #[test]
    fn start_search_raises_loading_and_clears_error() {
        let store = SessionStore::new();
        store.report_failure("previous failure");
        store.start_search();
        let snap = store.snapshot();
        assert!(snap.loading);
        assert!(snap.error.is_none());
    }

    #[test]
    fn success_replaces_results_wholesale() {
        let store = SessionStore::new();
        store.report_success(vec![hit("OLD1", false), hit("OLD2", false)]);
        store.start_search();
        store.report_success(vec![hit("NEW1", true)]);
        let snap = store.snapshot();
        assert!(!snap.loading);
        assert!(snap.error.is_none());
        let ids: Vec<_> = snap.results.iter().map(|h| h.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["NEW1"]);
    }

    #[test]
    fn empty_success_is_not_an_error() {
        let store = SessionStore::new();
        store.start_search();
        store.report_success(Vec::new());
        let snap = store.snapshot();
        assert!(!snap.loading);
        assert!(snap.error.is_none());
        assert!(snap.results.is_empty());
    }

    #[test]
    fn failure_keeps_stale_results_visible() {
        let store = SessionStore::new();
        store.report_success(vec![hit("DOC123", true)]);
        store.start_search();
        store.report_failure("Network error: Failed to fetch results.");
        let snap = store.snapshot();
        assert!(!snap.loading);
        assert_eq!(
            snap.error.as_deref(),
            Some("Network error: Failed to fetch results.")
        );
        assert_eq!(snap.results.len(), 1);
        assert_eq!(snap.results[0].doc_id, "DOC123");
    }

    #[test]
    fn loading_and_error_never_coexist() {
        let store = SessionStore::new();
        store.start_search();
        let snap = store.snapshot();
        assert!(snap.loading && snap.error.is_none());

        store.report_failure("boom");
        let snap = store.snapshot();
        assert!(!snap.loading && snap.error.is_some());

        store.start_search();
        let snap = store.snapshot();
        assert!(snap.loading && snap.error.is_none());
    }

    #[test]
    fn toggle_flips_only_the_addressed_row() {
        let store = SessionStore::new();
        store.report_success(vec![hit("DOC1", true), hit("DOC2", false)]);
        assert!(store.toggle_access("DOC1"));
        let snap = store.snapshot();
        assert!(!snap.results[0].access);
        assert!(!snap.results[1].access);
    }

    #[test]
    fn toggle_unknown_id_is_a_silent_noop() {
        let store = SessionStore::new();
        store.report_success(vec![hit("DOC1", true)]);
        let before = store.snapshot();
        assert!(!store.toggle_access("nonexistent-id"));
        assert_eq!(store.snapshot().results, before.results);
    }

    #[test]
    fn toggle_works_while_loading() {
        let store = SessionStore::new();
        store.report_success(vec![hit("DOC1", false)]);
        store.start_search();
        assert!(store.toggle_access("DOC1"));
        let snap = store.snapshot();
        assert!(snap.loading);
        assert!(snap.results[0].access);
    }

    #[test]
    fn remember_request_retains_last_copy() {
        let store = SessionStore::new();
        let mut req = SearchRequest::new();
        req.set_field("docId", "DOC123");
        store.remember_request(req.clone());
        assert_eq!(store.snapshot().request, req);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn result_set() -> impl Strategy<Value = Vec<SearchHit>> {
            proptest::collection::hash_set("[A-Z]{1,4}[0-9]{1,4}", 0..8).prop_flat_map(|ids| {
                let hits: Vec<_> = ids.into_iter().collect();
                proptest::collection::vec(any::<bool>(), hits.len()).prop_map(move |flags| {
                    hits.iter()
                        .zip(flags)
                        .map(|(id, access)| hit(id, access))
                        .collect()
                })
            })
        }

        proptest! {
            #[test]
            fn toggling_twice_restores_the_set(results in result_set()) {
                let store = SessionStore::new();
                store.report_success(results.clone());
                for row in &results {
                    store.toggle_access(&row.doc_id);
                    store.toggle_access(&row.doc_id);
                }
                prop_assert_eq!(store.snapshot().results, results);
            }

            #[test]
            fn toggling_an_absent_id_changes_nothing(results in result_set()) {
                let store = SessionStore::new();
                store.report_success(results.clone());
                store.toggle_access("id-that-cannot-appear");
                prop_assert_eq!(store.snapshot().results, results);
            }
        }
    }
}
