//! Network layer: HTTP client composition, REST wrappers, wire DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches the backend goes through this module. State and
//! page code never build requests directly; they call `api` functions and
//! receive typed results.

pub mod api;
pub mod client;
pub mod error;
pub mod types;
