//! Admin area: dashboard, content tables, and the post form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here renders inside `AdminLayout`, which the router only mounts
//! after the admin guard has passed. Pages still read the principal from
//! `AuthContext` when a write needs the acting user's id.

pub mod comments;
pub mod create_post;
pub mod dashboard;
pub mod posts;
pub mod users;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::routes::{ADMIN_COMMENTS_PATH, ADMIN_DASHBOARD_PATH, ADMIN_POSTS_PATH, ADMIN_USERS_PATH, admin_create_path};

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <div class="admin">
            <nav class="admin__nav">
                <A href=ADMIN_DASHBOARD_PATH>"Dashboard"</A>
                <A href=ADMIN_POSTS_PATH>"Posts"</A>
                <A href=ADMIN_USERS_PATH>"Users"</A>
                <A href=ADMIN_COMMENTS_PATH>"Comments"</A>
                <A href=admin_create_path("new")>"Create post"</A>
            </nav>
            <div class="admin__content">
                <Outlet/>
            </div>
        </div>
    }
}
