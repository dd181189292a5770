//! Per-feature data-access handles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks wire the injected stores to the network layer: they claim fetches,
//! apply results, and expose typed operations to pages. They are the only
//! writers of session, role, and product-cache state.

pub mod role;
pub mod session;
pub mod upvote;
