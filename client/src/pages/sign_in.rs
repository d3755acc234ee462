//! Sign-in page: email and password against `/auth/signin`.
//!
//! On success the issued token is persisted for the request interceptor and
//! the user is handed to the auth store before navigating home.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::SignInRequest;
use crate::routes::{HOME_PATH, SIGN_UP_PATH};
use crate::state::auth::AuthContext;
use crate::util::storage::{SharedStorage, write_token};

/// Build the sign-in body from raw form input.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill out all fields.");
    }
    Ok(SignInRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let storage = expect_context::<SharedStorage>();
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_sign_in(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let client = client.clone();
        let storage = storage.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&client, &credentials).await {
                Ok(session) => {
                    if let Some(token) = session.token.as_deref() {
                        if let Err(e) = write_token(storage.as_ref(), token) {
                            log::warn!("API token was not persisted: {e}");
                        }
                    }
                    auth.sign_in_success(session.user);
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    info.set(e.user_message());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Sign in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="name@company.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-form__message">{move || info.get()}</p>
            </Show>
            <p>"Don't have an account? " <A href=SIGN_UP_PATH>"Sign up"</A></p>
        </section>
    }
}
