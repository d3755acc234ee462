//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` owns the signed-in `CurrentUser` and mirrors it to
//! `blog_auth_vue`. It is rehydrated synchronously when created, so the admin
//! guard can answer on the very first navigation. Views read the principal
//! through `AuthContext` and never mutate it directly.
//!
//! `AuthContext` hides the principal from tracked reads until `mark_ready`
//! runs from a client-only effect. A server render has no browser storage, so
//! the server and the hydrating client both render the signed-out header and
//! a pending admin guard. The browser then makes the real decision.
//!
//! TRADE-OFFS
//! ==========
//! No expiry, refresh, or cross-tab sync: a sign-out in another tab is not
//! observed until this tab reloads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::listeners::{Listeners, SubscriptionId};
use crate::net::types::CurrentUser;
use crate::routes::{admin_guard, can_enter_admin};
use crate::util::storage::{AUTH_USER_KEY, SharedStorage, StorageError, load_json, save_json};

/// Process-wide authentication store.
pub struct AuthStore {
    storage: SharedStorage,
    current_user: Option<CurrentUser>,
    listeners: Listeners<Option<CurrentUser>>,
}

impl AuthStore {
    /// Rehydrate from persisted storage. Missing or unparseable data starts
    /// the store signed out.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let current_user = load_json::<CurrentUser>(storage.as_ref(), AUTH_USER_KEY);
        Self { storage, current_user, listeners: Listeners::default() }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        can_enter_admin(self.current_user.as_ref())
    }

    /// Replace the current user and persist it (last writer wins).
    ///
    /// The in-memory user is replaced and subscribers are notified even if
    /// the persisted write fails.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the user could not be persisted.
    pub fn sign_in_success(&mut self, user: CurrentUser) -> Result<(), StorageError> {
        let persisted = save_json(self.storage.as_ref(), AUTH_USER_KEY, &user);
        self.current_user = Some(user);
        self.listeners.notify(&self.current_user);
        persisted
    }

    /// Forget the current user in memory and in storage.
    pub fn sign_out(&mut self) {
        self.storage.remove(AUTH_USER_KEY);
        self.current_user = None;
        self.listeners.notify(&self.current_user);
    }

    pub fn subscribe(&mut self, listener: impl Fn(&Option<CurrentUser>) + Send + Sync + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

/// Reactive handle to the `AuthStore`, provided through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: StoredValue<AuthStore>,
    user: RwSignal<Option<CurrentUser>>,
    ready: RwSignal<bool>,
}

impl AuthContext {
    #[must_use]
    pub fn new(mut store: AuthStore) -> Self {
        let user = RwSignal::new(store.current_user().cloned());
        store.subscribe(move |next| user.set(next.clone()));
        Self { store: StoredValue::new(store), user, ready: RwSignal::new(false) }
    }

    /// Expose the rehydrated principal to tracked reads. Called once the
    /// app is running in the browser.
    pub fn mark_ready(&self) {
        self.ready.set(true);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Current principal; tracked when read inside a reactive scope.
    /// `None` until `mark_ready`.
    #[must_use]
    pub fn user(&self) -> Option<CurrentUser> {
        if !self.ready.get() {
            return None;
        }
        self.user.get()
    }

    #[must_use]
    pub fn user_untracked(&self) -> Option<CurrentUser> {
        self.user.get_untracked()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.ready.get() && self.user.with(|user| can_enter_admin(user.as_ref()))
    }

    /// Condition for the guarded `/admin` route: pending until ready.
    #[must_use]
    pub fn admin_guard(&self) -> Option<bool> {
        let ready = self.ready.get();
        self.user.with(|user| admin_guard(ready, user.as_ref()))
    }

    pub fn sign_in_success(&self, user: CurrentUser) {
        self.store.update_value(|store| {
            if let Err(e) = store.sign_in_success(user) {
                log::warn!("signed in, but the session was not persisted: {e}");
            }
        });
    }

    pub fn sign_out(&self) {
        self.store.update_value(AuthStore::sign_out);
    }
}
