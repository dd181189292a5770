//! Upvote hook: shared product collections plus the vote operation.
//!
//! DESIGN
//! ======
//! Votes never mutate the shared cache optimistically. A successful vote
//! invalidates both the featured and trending collections so every view
//! refetches the server's count; the brief staleness window buys caches
//! that cannot diverge.

#[cfg(test)]
#[path = "upvote_test.rs"]
mod upvote_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::RequestError;
use crate::net::types::UpdateOutcome;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::products::{CollectionState, ProductCache};

/// Which shared collection a fetch targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    Featured,
    Trending,
}

impl CollectionKind {
    fn select(self, cache: &ProductCache) -> &CollectionState {
        match self {
            Self::Featured => &cache.featured,
            Self::Trending => &cache.trending,
        }
    }

    fn select_mut(self, cache: &mut ProductCache) -> &mut CollectionState {
        match self {
            Self::Featured => &mut cache.featured,
            Self::Trending => &mut cache.trending,
        }
    }
}

/// Apply a vote outcome to the shared cache. Only a modifying vote
/// invalidates; an unchanged one leaves the collections alone.
pub fn apply_vote_outcome(cache: &mut ProductCache, outcome: UpdateOutcome) {
    if outcome.modified() {
        cache.invalidate_shared();
    }
}

/// Handle over the shared product collections and the vote operation.
#[derive(Clone, Copy)]
pub struct UpvoteHandle {
    pub cache: RwSignal<ProductCache>,
}

impl UpvoteHandle {
    /// Cast a vote for `product_id` as `voter_email`.
    ///
    /// # Errors
    ///
    /// `RequestError::AlreadyVoted` when the backend rejects a duplicate
    /// vote or an owner voting on their own product; other request errors
    /// pass through unchanged.
    pub async fn upvote(&self, product_id: &str, voter_email: &str) -> Result<(), RequestError> {
        let outcome = api::upvote_product(product_id, voter_email).await?;
        self.cache.update(|c| apply_vote_outcome(c, outcome));
        Ok(())
    }
}

/// Access the shared collections, fetching any that are missing or stale.
pub fn use_upvote() -> UpvoteHandle {
    let cache = expect_context::<RwSignal<ProductCache>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    install_collection_fetch(cache, session, CollectionKind::Featured);
    install_collection_fetch(cache, session, CollectionKind::Trending);
    UpvoteHandle { cache }
}

/// Build the click handler product grids share: signed-out viewers go to
/// `/login`, votes run through the handle, and the outcome surfaces as a
/// notice at this call site rather than inside the data layer.
pub fn vote_callback(handle: UpvoteHandle) -> Callback<String> {
    let session = expect_context::<RwSignal<SessionStore>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    Callback::new(move |product_id: String| {
        let Some(email) = session.with_untracked(|s| s.email().map(str::to_owned)) else {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match handle.upvote(&product_id, &email).await {
                    Ok(()) => notify.update(|n| {
                        n.success("Upvoted successfully!");
                    }),
                    Err(err) => notify.update(|n| {
                        n.error(err.user_message());
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, email, notify, handle);
        }
    })
}

/// Refetch `kind` whenever it becomes stale. The epoch token claimed at
/// fetch start makes a superseded response drop instead of overwriting
/// newer data.
fn install_collection_fetch(
    cache: RwSignal<ProductCache>,
    session: RwSignal<SessionStore>,
    kind: CollectionKind,
) {
    Effect::new(move || {
        // Wait for restore so the fetch picks the right client.
        if session.with(|s| s.loading) {
            return;
        }
        let signed_in = session.with(SessionStore::signed_in);
        if !cache.with(|c| kind.select(c).needs_fetch()) {
            return;
        }
        let Some(token) = cache.try_update(|c| kind.select_mut(c).begin_fetch()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = match kind {
                    CollectionKind::Featured => api::fetch_featured_products(signed_in).await,
                    CollectionKind::Trending => api::fetch_trending_products(signed_in).await,
                }
                .map_err(|e| e.user_message());
                cache.update(|c| {
                    kind.select_mut(c).apply(token, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, signed_in);
        }
    });
}
