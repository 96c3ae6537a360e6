//! Lookup collaborator contract.

use async_trait::async_trait;
use thiserror::Error;

use docsearch_core::{SearchHit, SearchRequest};

/// Failure reported by a lookup collaborator.
///
/// The display form is the human-readable cause and is surfaced to the user
/// verbatim as the session error message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct LookupError {
    /// Human-readable cause.
    pub message: String,
}

impl LookupError {
    /// Build an error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// External document query collaborator.
///
/// Implemented by a real query service in production and by [`MockLookup`]
/// in this tree. The contract places no constraint on transport: given a
/// request, the collaborator asynchronously yields either a result set (an
/// empty set is a valid, non-error outcome) or a failure with a
/// human-readable cause.
///
/// [`MockLookup`]: crate::MockLookup
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Run the query for the given criteria.
    async fn find(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, LookupError>;
}
