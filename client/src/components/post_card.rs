//! Post summary card used on the home, search, and dashboard views.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Blog;

/// Date part (`YYYY-MM-DD`) of an ISO 8601 timestamp.
#[must_use]
pub fn format_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

#[component]
pub fn PostCard(post: Blog) -> impl IntoView {
    let href = post.detail_path();
    let tags: Vec<String> = post.tag_list().into_iter().map(str::to_owned).collect();
    let byline = format!("{} · {}", post.user.display_name(), format_date(&post.created_at));
    let image = (!post.image.is_empty()).then(|| post.image.clone());

    view! {
        <article class="post-card">
            {image.map(|src| view! { <img class="post-card__image" src=src alt=""/> })}
            <div class="post-card__body">
                <span class="post-card__category">{post.category}</span>
                <A href=href attr:class="post-card__title">{post.title}</A>
                <p class="post-card__subtitle">{post.subtitle}</p>
                <p class="post-card__byline">{byline}</p>
                <ul class="post-card__tags">
                    {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                </ul>
            </div>
        </article>
    }
}
