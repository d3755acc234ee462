//! Fallback view for paths the router does not know.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <A href=HOME_PATH>"Back to home"</A>
        </section>
    }
}
