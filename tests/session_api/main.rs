//! Session API scenario tests.
//!
//! End-to-end runs of the public surface: submit → loading → terminal
//! outcome → per-row commands, the way a rendering front-end drives it.

use std::sync::Arc;
use std::time::Duration;

use docsearch::{
    FailurePolicy, MockLookup, SearchError, SearchRequest, Session, EMPTY_CRITERIA_MESSAGE,
};

fn doc_request(doc_id: &str) -> SearchRequest {
    let mut req = SearchRequest::new();
    req.set_field("docId", doc_id);
    req
}

#[tokio::test(start_paused = true)]
async fn doc_id_search_is_observed_loading_then_resolves() {
    let lookup = MockLookup::with_sample_results().with_latency(Duration::from_secs(1));
    let session = Arc::new(Session::new(Arc::new(lookup)));

    let worker = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.search(doc_request("DOC123")).await })
    };

    // Let the submission reach the store, then observe the in-flight state.
    tokio::task::yield_now().await;
    let mid = session.snapshot();
    assert!(mid.loading);
    assert!(mid.error.is_none());

    worker.await.unwrap().unwrap();

    let done = session.snapshot();
    assert!(!done.loading);
    assert!(done.error.is_none());
    assert_eq!(done.results.len(), 1);
    let row = &done.results[0];
    assert_eq!(row.doc_id, "DOC123");
    assert_eq!(row.source, "Source1");
    assert!(row.access);

    // Toggling the returned row flips its access flag.
    assert!(session.toggle_access("DOC123"));
    assert!(!session.snapshot().results[0].access);
}

#[tokio::test]
async fn empty_submission_is_rejected_without_touching_state() {
    let session = Session::new(Arc::new(MockLookup::with_sample_results()));

    // Seed some state so "unchanged" is observable.
    session.search(doc_request("DOC123")).await.unwrap();
    let before = session.snapshot();

    let err = session.search(SearchRequest::new()).await.unwrap_err();
    assert_eq!(err, SearchError::EmptyCriteria);
    assert_eq!(err.to_string(), EMPTY_CRITERIA_MESSAGE);
    assert_eq!(session.snapshot(), before);
}

#[tokio::test]
async fn failed_research_shows_error_beside_previous_rows() {
    let session = Session::new(Arc::new(
        MockLookup::with_sample_results().with_failure_policy(FailurePolicy::Always(
            "Network error: Failed to fetch results.".to_string(),
        )),
    ));
    session.store().report_success(vec![docsearch::SearchHit {
        doc_id: "KEPT".to_string(),
        ..Default::default()
    }]);

    session.search(doc_request("DOC123")).await.unwrap();
    let snap = session.snapshot();
    assert!(!snap.loading);
    assert_eq!(
        snap.error.as_deref(),
        Some("Network error: Failed to fetch results.")
    );
    assert_eq!(snap.results.len(), 1);
    assert_eq!(snap.results[0].doc_id, "KEPT");

    // The next start clears the error; the stale rows stay until a terminal
    // outcome replaces them.
    session.store().start_search();
    let snap = session.snapshot();
    assert!(snap.loading);
    assert!(snap.error.is_none());
    assert_eq!(snap.results.len(), 1);
}

#[tokio::test]
async fn no_results_is_a_rendering_state_not_an_error() {
    let session = Session::new(Arc::new(MockLookup::new(Vec::new())));
    session.search(doc_request("DOC404")).await.unwrap();
    let snap = session.snapshot();
    assert!(snap.is_empty_success());
}

#[tokio::test]
async fn toggle_twice_restores_the_original_flag() {
    let session = Session::new(Arc::new(MockLookup::with_sample_results()));
    session.search(doc_request("DOC123")).await.unwrap();

    let original = session.snapshot().results[0].access;
    session.toggle_access("DOC123");
    session.toggle_access("DOC123");
    assert_eq!(session.snapshot().results[0].access, original);
}

#[tokio::test]
async fn timeout_bounded_session_reports_failure() {
    let slow = MockLookup::with_sample_results().with_latency(Duration::from_secs(60));
    let session = Session::with_timeout(Arc::new(slow), Duration::from_millis(50));

    tokio::time::pause();
    session.search(doc_request("DOC123")).await.unwrap();

    let snap = session.snapshot();
    assert!(!snap.loading);
    assert_eq!(snap.error.as_deref(), Some("Search timed out after 50ms."));
}
