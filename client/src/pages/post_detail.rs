//! Post detail page: the post body and its comment thread.
//!
//! SYSTEM CONTEXT
//! ==============
//! The post is looked up by slug; comments load once the post lookup settles,
//! keyed by the first matching post's id. Comment writes (create, like,
//! delete) update the local thread from the server's reply instead of
//! reloading it.

#[cfg(test)]
#[path = "post_detail_test.rs"]
mod post_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::{Pending, load_into, status_message};
use crate::components::comment_item::CommentItem;
use crate::components::post_card::format_date;
use crate::editor::document::{BlockView, EditorDocument};
use crate::net::api::{self, ReadOutcome};
use crate::net::http::ApiClient;
use crate::net::types::{Blog, Comment, CommentPayload, PostList};
use crate::routes::SIGN_IN_PATH;
use crate::state::auth::AuthContext;

pub const MAX_COMMENT_LEN: usize = 200;

/// Trim and bound a comment draft.
///
/// # Errors
///
/// Returns the message to show when the draft is blank or too long.
pub fn validate_comment(draft: &str) -> Result<String, &'static str> {
    let text = draft.trim();
    if text.is_empty() {
        return Err("Write something first.");
    }
    if text.chars().count() > MAX_COMMENT_LEN {
        return Err("Comments are limited to 200 characters.");
    }
    Ok(text.to_owned())
}

/// Characters left before the draft hits the limit (negative when over).
#[must_use]
pub fn remaining_chars(draft: &str) -> i64 {
    let used = i64::try_from(draft.chars().count()).unwrap_or(i64::MAX);
    i64::try_from(MAX_COMMENT_LEN).unwrap_or(i64::MAX).saturating_sub(used)
}

/// Swap in the server's copy of a comment, matched by id.
pub fn replace_comment(thread: &mut [Comment], updated: Comment) {
    if let Some(slot) = thread.iter_mut().find(|c| c.id == updated.id) {
        *slot = updated;
    }
}

fn edit_thread(comments: RwSignal<Pending<Vec<Comment>>>, edit: impl FnOnce(&mut Vec<Comment>)) {
    comments.update(|pending| match pending {
        Some(ReadOutcome::Loaded(thread)) => edit(thread),
        _ => {
            let mut thread = Vec::new();
            edit(&mut thread);
            *pending = Some(ReadOutcome::Loaded(thread));
        }
    });
}

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let post = RwSignal::new(None::<ReadOutcome<PostList>>);
    let comments = RwSignal::new(None::<ReadOutcome<Vec<Comment>>>);
    let draft = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let post_client = client.clone();
    Effect::new(move || {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        let client = post_client.clone();
        load_into(post, async move { api::get_post_by_slug(&client, &slug).await });
    });

    // Settled post lookup -> comment thread. A lookup that found nothing
    // still asks for comments, with a `null` post id.
    let thread_client = client.clone();
    Effect::new(move || {
        let Some(lookup) = post.get() else {
            return;
        };
        let post_id = lookup.into_option().and_then(|list| list.posts.into_iter().next()).map(|p| p.id);
        let client = thread_client.clone();
        load_into(comments, async move { api::get_post_comments(&client, post_id.as_deref()).await });
    });

    let current_post = move || post.with(|p| p.clone().and_then(ReadOutcome::into_option)?.posts.into_iter().next());

    let submit_client = client.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(user), Some(target)) = (auth.user_untracked(), current_post()) else {
            return;
        };
        let content = match validate_comment(&draft.get_untracked()) {
            Ok(content) => content,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let payload = CommentPayload { content, post_id: target.id, user_id: user.id };
        let client = submit_client.clone();
        leptos::task::spawn_local(async move {
            match api::create_comment(&client, &payload).await {
                Ok(created) => {
                    draft.set(String::new());
                    info.set(String::new());
                    edit_thread(comments, |thread| thread.insert(0, created));
                }
                Err(e) => info.set(e.user_message()),
            }
        });
    };

    let like_client = client.clone();
    let on_like = Callback::new(move |comment_id: String| {
        if auth.user_untracked().is_none() {
            return;
        }
        let client = like_client.clone();
        leptos::task::spawn_local(async move {
            match api::like_comment(&client, &comment_id).await {
                Ok(updated) => edit_thread(comments, |thread| replace_comment(thread, updated)),
                Err(e) => info.set(e.user_message()),
            }
        });
    });

    let delete_client = client.clone();
    let on_delete = Callback::new(move |comment_id: String| {
        let client = delete_client.clone();
        leptos::task::spawn_local(async move {
            match api::delete_comment(&client, &comment_id).await {
                Ok(()) => edit_thread(comments, |thread| thread.retain(|c| c.id != comment_id)),
                Err(e) => info.set(e.user_message()),
            }
        });
    });

    view! {
        <article class="post-detail">
            {move || {
                post.with(|p| match p {
                    Some(ReadOutcome::Loaded(list)) if list.posts.is_empty() => {
                        Some("Post not found.".to_owned())
                    }
                    other => status_message(other.as_ref(), "Post not found."),
                })
                    .map(|message| view! { <p class="status">{message}</p> })
            }}
            {move || current_post().map(|post| view! { <PostBody post/> })}
            <section class="comments">
                <h2>"Comments"</h2>
                <Show
                    when=move || auth.user().is_some()
                    fallback=|| {
                        view! {
                            <p class="comments__signin">
                                "You must be signed in to comment. "
                                <A href=SIGN_IN_PATH>"Sign in"</A>
                            </p>
                        }
                    }
                >
                    <form class="comments__form" on:submit=on_submit.clone()>
                        <textarea
                            placeholder="Add a comment..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        ></textarea>
                        <span class="comments__remaining">
                            {move || format!("{} characters remaining", remaining_chars(&draft.get()))}
                        </span>
                        <button type="submit">"Submit"</button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="comments__message">{move || info.get()}</p>
                </Show>
                {move || {
                    comments
                        .with(|c| status_message(c.as_ref(), "No comments yet."))
                        .map(|message| view! { <p class="status">{message}</p> })
                }}
                <ul class="comments__list">
                    <For
                        each=move || comments.with(|c| super::loaded(c.as_ref(), Vec::clone))
                        key=|comment| (comment.id.clone(), comment.number_of_likes)
                        children=move |comment: Comment| {
                            view! {
                                <CommentItem
                                    comment
                                    viewer=auth.user_untracked()
                                    on_like=on_like
                                    on_delete=on_delete
                                />
                            }
                        }
                    />
                </ul>
            </section>
        </article>
    }
}

#[component]
fn PostBody(post: Blog) -> impl IntoView {
    let document = EditorDocument::parse(&post.content);
    let tags: Vec<String> = post.tag_list().into_iter().map(str::to_owned).collect();
    let byline = format!("{} · {}", post.user.display_name(), format_date(&post.created_at));
    let image = (!post.image.is_empty()).then(|| post.image.clone());

    let blocks = document
        .blocks
        .iter()
        .map(|block| match block.view() {
            BlockView::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
            BlockView::RelatedPost(related) => view! {
                <a class="related-post" href=related.url>
                    <strong>{related.title}</strong>
                    <span>{related.description}</span>
                </a>
            }
            .into_any(),
            BlockView::Unsupported(kind) => {
                log::debug!("skipping unsupported {kind} block");
                ().into_any()
            }
        })
        .collect_view();

    view! {
        <header class="post-detail__header">
            <span class="post-detail__category">{post.category}</span>
            <h1>{post.title}</h1>
            <p class="post-detail__subtitle">{post.subtitle}</p>
            <p class="post-detail__byline">{byline}</p>
        </header>
        {image.map(|src| view! { <img class="post-detail__image" src=src alt=""/> })}
        <div class="post-detail__content">{blocks}</div>
        <ul class="post-detail__tags">{tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}</ul>
    }
}
