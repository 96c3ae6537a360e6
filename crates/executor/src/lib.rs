//! Search executor layer.
//!
//! The executor is the boundary between user-submitted parameters and the
//! session store. It owns:
//! - validation (a request naming neither a doc id nor a source is rejected
//!   before the store is touched)
//! - sequencing (a monotonically increasing request token; completions of
//!   superseded requests are discarded)
//! - outcome translation (lookup success, lookup failure, and timeout each
//!   become exactly one terminal command on the store)
//!
//! The actual document query is behind the [`Lookup`] trait, injected at
//! construction. [`MockLookup`] is the in-tree simulated collaborator.

#![warn(clippy::all)]

mod executor;
mod lookup;
mod mock;

pub use executor::SearchExecutor;
pub use lookup::{Lookup, LookupError};
pub use mock::{FailurePolicy, MockLookup, MOCK_FAILURE_MESSAGE};
