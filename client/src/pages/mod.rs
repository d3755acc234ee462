//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Reads are issued from effects, so they only run in the
//! browser and re-run when the route parameters they track change.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod admin;
pub mod home;
pub mod not_found;
pub mod paged;
pub mod post_detail;
pub mod search;
pub mod sign_in;
pub mod sign_up;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ReadOutcome;

/// A page-level read: `None` while the request is in flight.
pub type Pending<T> = Option<ReadOutcome<T>>;

/// Issue `read` in the background and publish its outcome into `target`.
///
/// Concurrent loads into the same signal are not de-duplicated; the last one
/// to resolve wins.
pub(crate) fn load_into<T, Fut>(target: RwSignal<Pending<T>>, read: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = ReadOutcome<T>> + 'static,
{
    target.set(None);
    leptos::task::spawn_local(async move {
        let outcome = read.await;
        if target.try_set(Some(outcome)).is_some() {
            log::debug!("page closed before its data arrived");
        }
    });
}

/// Status line for a read that has nothing to show yet.
pub(crate) fn status_message<T>(pending: Option<&ReadOutcome<T>>, empty: &str) -> Option<String> {
    match pending {
        None => Some("Loading...".to_owned()),
        Some(ReadOutcome::Empty) => Some(empty.to_owned()),
        Some(ReadOutcome::Failed(e)) => Some(format!("Could not load: {}", e.user_message())),
        Some(ReadOutcome::Loaded(_)) => None,
    }
}

/// Project the loaded value, or `U::default()` while loading or on failure.
pub(crate) fn loaded<T, U: Default>(pending: Option<&ReadOutcome<T>>, pick: impl FnOnce(&T) -> U) -> U {
    match pending {
        Some(ReadOutcome::Loaded(value)) => pick(value),
        _ => U::default(),
    }
}
