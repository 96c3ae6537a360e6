//! Docsearch: session core for a browser-style document search interface.
//!
//! The core is two cooperating pieces:
//! - [`SessionStore`]: the single authoritative in-memory holder of search
//!   session state (parameters, result set, loading flag, error message)
//! - [`SearchExecutor`]: the boundary that validates user-entered criteria,
//!   invokes an injected [`Lookup`] collaborator, and feeds exactly one
//!   terminal outcome back into the store
//!
//! [`Session`] wires the two together behind one handle. Rendering is out of
//! scope: front-ends read [`SessionSnapshot`]s and issue commands.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docsearch::{MockLookup, SearchRequest, Session};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let session = Session::new(Arc::new(MockLookup::with_sample_results()));
//!
//! let mut request = SearchRequest::new();
//! request.set_field("docId", "DOC123");
//! session.search(request).await.unwrap();
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.results[0].doc_id, "DOC123");
//!
//! session.toggle_access("DOC123");
//! assert!(!session.snapshot().results[0].access);
//! # }
//! ```

#![warn(clippy::all)]

mod session;
mod types;

pub use session::Session;
pub use types::*;
