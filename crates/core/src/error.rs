//! Error taxonomy for a search cycle.
//!
//! Three failure classes exist:
//! - `EmptyCriteria`: synchronous validation rejection, raised before any
//!   state mutation and never recorded in the session store
//! - `Lookup`: the external collaborator failed; converted by the executor
//!   into a failure outcome on the store
//! - `Timeout`: the configured deadline elapsed before the collaborator
//!   answered; reported like any other lookup failure

use thiserror::Error;

use crate::request::EMPTY_CRITERIA_MESSAGE;

/// Errors produced within one search cycle.
///
/// All variants are local to a single cycle: none of them corrupt the
/// session store, and the session remains usable for resubmission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The request named neither a document id nor a source.
    ///
    /// Display is the canonical validation message shown to the user.
    #[error("{}", EMPTY_CRITERIA_MESSAGE)]
    EmptyCriteria,

    /// The lookup collaborator reported a failure.
    #[error("{message}")]
    Lookup {
        /// Human-readable cause supplied by the collaborator.
        message: String,
    },

    /// The lookup did not answer within the configured deadline.
    #[error("Search timed out after {ms}ms.")]
    Timeout {
        /// Deadline that elapsed, in milliseconds.
        ms: u64,
    },
}

impl SearchError {
    /// Message to surface to the user for this error.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
