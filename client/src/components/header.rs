//! Site header: navigation, theme switch, and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::routes::{ADMIN_DASHBOARD_PATH, HOME_PATH, SEARCH_PATH, SIGN_IN_PATH, SIGN_UP_PATH};
use crate::state::auth::AuthContext;
use crate::state::theme::{Theme, ThemeContext};
use crate::util::storage::{SharedStorage, clear_token};

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let theme = expect_context::<ThemeContext>();
    let client = expect_context::<ApiClient>();
    let storage = expect_context::<SharedStorage>();
    let navigate = use_navigate();

    // The server call is best-effort; the local session is always dropped.
    let on_sign_out = move |_| {
        let client = client.clone();
        let storage = storage.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::sign_out(&client).await {
                log::warn!("sign-out request failed: {e}");
            }
            clear_token(storage.as_ref());
            auth.sign_out();
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        });
    };

    let theme_label = move || match theme.theme() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    view! {
        <header class="site-header">
            <A href=HOME_PATH attr:class="site-header__brand">"Inkpost"</A>
            <nav class="site-header__nav">
                <A href=HOME_PATH>"Home"</A>
                <A href=SEARCH_PATH>"Search"</A>
                <Show when=move || auth.is_admin()>
                    <A href=ADMIN_DASHBOARD_PATH>"Dashboard"</A>
                </Show>
            </nav>
            <button
                class="site-header__theme"
                on:click=move |_| theme.toggle_theme(theme.theme_untracked().opposite())
            >
                {theme_label}
            </button>
            <Show
                when=move || auth.user().is_some()
                fallback=|| {
                    view! {
                        <div class="site-header__session">
                            <A href=SIGN_IN_PATH>"Sign in"</A>
                            <A href=SIGN_UP_PATH>"Sign up"</A>
                        </div>
                    }
                }
            >
                <div class="site-header__session">
                    <span class="site-header__user">
                        {move || auth.user().map(|user| user.username).unwrap_or_default()}
                    </span>
                    <button class="site-header__sign-out" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </header>
    }
}
