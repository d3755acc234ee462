//! Route table and the admin guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` declares the Leptos router from these paths. The guard itself is a
//! plain predicate over the principal, so the router, the auth store, and
//! tests all ask the same question the same way.
//!
//! The guard is evaluated on every entry into `/admin/*`, including deep
//! links and history navigation; no earlier decision is cached. Routes
//! outside `/admin` are never guarded. A server render cannot see browser
//! storage, so it leaves the decision pending for the browser to make.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::CurrentUser;

pub const HOME_PATH: &str = "/home";
pub const SIGN_IN_PATH: &str = "/sign-in";
pub const SIGN_UP_PATH: &str = "/sign-up";
pub const SEARCH_PATH: &str = "/search";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const ADMIN_POSTS_PATH: &str = "/admin/posts";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const ADMIN_COMMENTS_PATH: &str = "/admin/comments";

/// Where unauthorized admin navigation and `/` end up.
pub const REDIRECT_PATH: &str = HOME_PATH;

/// Authorization predicate for the `/admin` subtree.
#[must_use]
pub fn can_enter_admin(principal: Option<&CurrentUser>) -> bool {
    principal.is_some_and(|user| user.is_admin)
}

/// Guard decision for the `/admin` subtree, in the router's terms.
///
/// `None` means "not known yet": the principal has not been rehydrated from
/// browser storage (always the case while rendering on the server), so the
/// router neither renders nor redirects. Once rehydrated, `Some(false)`
/// redirects to `REDIRECT_PATH`.
#[must_use]
pub fn admin_guard(rehydrated: bool, principal: Option<&CurrentUser>) -> Option<bool> {
    rehydrated.then(|| can_enter_admin(principal))
}

/// Path of the create/edit form for `post_id` (`new` creates).
#[must_use]
pub fn admin_create_path(post_id: &str) -> String {
    format!("/admin/create/{post_id}")
}
