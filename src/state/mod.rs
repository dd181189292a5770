//! Injected client-side stores.
//!
//! DESIGN
//! ======
//! Session, role, and cache state are explicitly owned values provided via
//! Leptos context at app start, passed by reference to consumers. Mutation
//! goes through their methods only: the session store owns identity, the
//! role cache owns role flags, and every component sees one view of who is
//! signed in.

pub mod auth;
pub mod notify;
pub mod products;
pub mod role;
pub mod ui;
