//! Simulated lookup collaborator.
//!
//! Stands in for the real query service during development and testing. The
//! simulation is a single awaitable with a fixed latency and an explicit
//! failure-injection hook; there is no hidden timer race.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use docsearch_core::{SearchHit, SearchRequest};

use crate::lookup::{Lookup, LookupError};

/// Failure message used when a policy injects a failure without naming one.
pub const MOCK_FAILURE_MESSAGE: &str = "Network error: Failed to fetch results.";

/// Failure-injection hook for [`MockLookup`].
#[derive(Debug, Clone)]
pub enum FailurePolicy {
    /// Every call resolves.
    Never,
    /// Every call fails with the given message.
    Always(String),
    /// Each call fails with the given probability (clamped to `0.0..=1.0`).
    Random {
        /// Probability of failure per call.
        probability: f64,
        /// Message reported on an injected failure.
        message: String,
    },
}

impl FailurePolicy {
    fn roll(&self) -> Option<LookupError> {
        match self {
            FailurePolicy::Never => None,
            FailurePolicy::Always(message) => Some(LookupError::new(message.clone())),
            FailurePolicy::Random {
                probability,
                message,
            } => {
                let p = probability.clamp(0.0, 1.0);
                if rand::thread_rng().gen_bool(p) {
                    Some(LookupError::new(message.clone()))
                } else {
                    None
                }
            }
        }
    }
}

/// Simulated lookup: canned hits, fixed latency, injectable failures.
///
/// Counts invocations so tests can assert whether the executor reached the
/// lookup at all.
pub struct MockLookup {
    hits: Vec<SearchHit>,
    latency: Duration,
    failure: FailurePolicy,
    calls: AtomicU64,
}

impl MockLookup {
    /// A lookup that instantly resolves with the given hits.
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            latency: Duration::ZERO,
            failure: FailurePolicy::Never,
            calls: AtomicU64::new(0),
        }
    }

    /// A lookup resolving with one sample document, the way the simulated
    /// backend answered every query during development.
    pub fn with_sample_results() -> Self {
        Self::new(vec![sample_hit()])
    }

    /// Delay every answer by the given latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Install a failure-injection policy.
    pub fn with_failure_policy(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }

    /// Fail every call with [`MOCK_FAILURE_MESSAGE`].
    pub fn always_failing(self) -> Self {
        self.with_failure_policy(FailurePolicy::Always(MOCK_FAILURE_MESSAGE.to_string()))
    }

    /// Number of times `find` has been invoked.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Lookup for MockLookup {
    async fn find(&self, _request: &SearchRequest) -> Result<Vec<SearchHit>, LookupError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(err) = self.failure.roll() {
            return Err(err);
        }
        Ok(self.hits.clone())
    }
}

/// The sample document the simulated backend returns.
pub(crate) fn sample_hit() -> SearchHit {
    SearchHit {
        doc_id: "DOC123".to_string(),
        source: "Source1".to_string(),
        a_number: "A123456".to_string(),
        c_number: "C789012".to_string(),
        first_name: "John".to_string(),
        middle_name: "Robert".to_string(),
        last_name: "Doe".to_string(),
        yob: "1980".to_string(),
        mob: "06".to_string(),
        dob: "1980-06-15".to_string(),
        country_of_birth: "USA".to_string(),
        po_birth: "New York".to_string(),
        registered_state: "NY".to_string(),
        file_number: "F123456".to_string(),
        poe_text: "NYC".to_string(),
        yoe: "2000".to_string(),
        line_no: "1".to_string(),
        row_no: "1".to_string(),
        format: "Standard".to_string(),
        calcd_soundex: "D000".to_string(),
        soundex: "D000".to_string(),
        folder_name: "Folder1".to_string(),
        file_path: "/archive/Folder1/DOC123".to_string(),
        image_url: "https://archive.example/images/DOC123.png".to_string(),
        access: true,
    }
}
