//! Product collection cache with epoch-based stale-response discard.
//!
//! DESIGN
//! ======
//! Each cached collection hands out an epoch token when a fetch begins; a
//! response only applies if its token still matches, so a superseded
//! request can never overwrite newer data. Invalidation bumps the epoch and
//! marks the collection stale; the next reader refetches instead of the
//! cache mutating optimistically.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::Product;

/// One server-held product collection and its fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    epoch: u64,
    stale: bool,
    loaded: bool,
}

impl CollectionState {
    /// True when a reader should start a fetch: never loaded, or
    /// invalidated, and no fetch currently in flight.
    pub fn needs_fetch(&self) -> bool {
        (!self.loaded || self.stale) && !self.loading
    }

    /// Begin a fetch and claim its epoch token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.stale = false;
        self.epoch
    }

    /// Apply a fetch result. Returns `false` when the token was superseded
    /// and the result discarded.
    pub fn apply(&mut self, token: u64, result: Result<Vec<Product>, String>) -> bool {
        if token != self.epoch {
            return false;
        }
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Mark the collection stale so the next reader refetches. Also
    /// supersedes any in-flight request.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.stale = true;
        self.loading = false;
    }
}

/// The product collections shared across features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductCache {
    pub featured: CollectionState,
    pub trending: CollectionState,
}

impl ProductCache {
    /// Invalidate every shared collection; called after a successful
    /// upvote so all views converge on the server's count.
    pub fn invalidate_shared(&mut self) {
        self.featured.invalidate();
        self.trending.invalidate();
    }
}
