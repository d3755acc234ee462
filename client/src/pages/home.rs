//! Home page: featured post and the latest posts.

use leptos::prelude::*;
use leptos_router::components::A;

use super::{Pending, load_into, loaded, status_message};
use crate::components::post_card::PostCard;
use crate::net::api::{self, ReadOutcome};
use crate::net::http::ApiClient;
use crate::net::types::{Blog, PostList};
use crate::routes::SEARCH_PATH;

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let featured = RwSignal::new(None::<ReadOutcome<Blog>>);
    let recent = RwSignal::new(None::<ReadOutcome<PostList>>);

    Effect::new(move || {
        let (featured_client, recent_client) = (client.clone(), client.clone());
        load_into(featured, async move { api::get_featured_post(&featured_client).await });
        load_into(recent, async move { api::get_recent_posts(&recent_client).await });
    });

    let recent_posts = move || recent.with(|r: &Pending<PostList>| loaded(r.as_ref(), |list| list.posts.clone()));

    view! {
        <section class="home">
            <header class="home__intro">
                <h1>"Inkpost"</h1>
                <p>"Articles, notes, and tutorials."</p>
            </header>
            {move || {
                featured
                    .get()
                    .and_then(ReadOutcome::into_option)
                    .map(|post| {
                        view! {
                            <div class="home__featured">
                                <h2>"Featured"</h2>
                                <PostCard post/>
                            </div>
                        }
                    })
            }}
            <h2>"Recent posts"</h2>
            {move || {
                recent
                    .with(|r| status_message(r.as_ref(), "No posts yet."))
                    .map(|message| view! { <p class="status">{message}</p> })
            }}
            <div class="post-grid">
                <For each=recent_posts key=|post| post.id.clone() children=|post: Blog| view! { <PostCard post/> }/>
            </div>
            <A href=SEARCH_PATH attr:class="home__all">"View all posts"</A>
        </section>
    }
}
