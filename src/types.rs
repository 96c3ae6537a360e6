//! Public types for the docsearch unified API.
//!
//! This module re-exports types from internal crates with a clean public
//! interface.

// Core data model and error taxonomy
pub use docsearch_core::{SearchError, SearchHit, SearchRequest};
pub use docsearch_core::{EMPTY_CRITERIA_MESSAGE, REQUEST_FIELDS};

// Session store and its read-only view
pub use docsearch_store::{SessionSnapshot, SessionStore};

// Executor and the lookup collaborator contract
pub use docsearch_executor::{
    FailurePolicy, Lookup, LookupError, MockLookup, SearchExecutor,
};
