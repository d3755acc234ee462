//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the shared services once, in dependency order: persisted
//! storage, then the API client and the auth store that read it, then the
//! theme store. Each is handed to views through Leptos context. The `/admin`
//! subtree sits behind `ProtectedParentRoute`, whose condition is the same
//! `can_enter_admin` predicate `routes` exposes, re-evaluated on every entry.
//! The condition stays pending until the client has rehydrated the session,
//! so a server render of an admin deep link neither redirects nor renders.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ProtectedParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::net::http::ApiClient;
use crate::pages::admin::{
    AdminLayout, comments::AdminCommentsPage, create_post::CreatePostPage, dashboard::AdminDashboardPage,
    posts::AdminPostsPage, users::AdminUsersPage,
};
use crate::pages::{
    home::HomePage, not_found::NotFoundPage, post_detail::PostDetailPage, search::SearchPage, sign_in::SignInPage,
    sign_up::SignUpPage,
};
use crate::routes::{HOME_PATH, REDIRECT_PATH};
use crate::state::auth::{AuthContext, AuthStore};
use crate::state::theme::{ThemeContext, ThemeStore};
use crate::util::storage::{BrowserStorage, SharedStorage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage: SharedStorage = BrowserStorage::shared();
    let api = ApiClient::for_build(storage.clone());
    let auth = AuthContext::new(AuthStore::load(storage.clone()));
    let theme = ThemeContext::new(ThemeStore::default());

    provide_context(storage);
    provide_context(api);
    provide_context(auth);
    provide_context(theme);

    Effect::new(move || crate::util::theme::apply(theme.theme()));
    Effect::new(move || auth.mark_ready());

    view! {
        <Stylesheet id="leptos" href="/pkg/inkpost.css"/>
        <Title text="Inkpost"/>

        <Router>
            <Header/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=path!("/home") view=HomePage/>
                    <Route path=path!("/postdetail/:slug") view=PostDetailPage/>
                    <Route path=path!("/sign-in") view=SignInPage/>
                    <Route path=path!("/sign-up") view=SignUpPage/>
                    <Route path=path!("/search") view=SearchPage/>
                    <ProtectedParentRoute
                        path=path!("/admin")
                        view=AdminLayout
                        condition=move || auth.admin_guard()
                        redirect_path=|| REDIRECT_PATH
                    >
                        <Route path=path!("dashboard") view=AdminDashboardPage/>
                        <Route path=path!("posts") view=AdminPostsPage/>
                        <Route path=path!("users") view=AdminUsersPage/>
                        <Route path=path!("comments") view=AdminCommentsPage/>
                        <Route path=path!("create/:id") view=CreatePostPage/>
                    </ProtectedParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
