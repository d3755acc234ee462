//! One comment under a post, with like and delete controls.

#[cfg(test)]
#[path = "comment_item_test.rs"]
mod comment_item_test;

use leptos::prelude::*;

use super::post_card::format_date;
use crate::net::types::{Comment, CurrentUser};

/// Authors may delete their own comments; admins may delete any.
#[must_use]
pub fn can_delete_comment(comment: &Comment, viewer: Option<&CurrentUser>) -> bool {
    viewer.is_some_and(|user| user.is_admin || user.id == comment.user_id)
}

/// Like count label (`1 like`, `3 likes`); empty when nobody liked it.
#[must_use]
pub fn likes_label(count: u32) -> String {
    match count {
        0 => String::new(),
        1 => "1 like".to_owned(),
        n => format!("{n} likes"),
    }
}

#[component]
pub fn CommentItem(
    comment: Comment,
    viewer: Option<CurrentUser>,
    #[prop(into)] on_like: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let liked = viewer.as_ref().is_some_and(|user| comment.is_liked_by(&user.id));
    let deletable = can_delete_comment(&comment, viewer.as_ref());
    let signed_in = viewer.is_some();
    let like_id = comment.id.clone();
    let delete_id = comment.id.clone();

    view! {
        <li class="comment">
            <p class="comment__meta">{format_date(&comment.created_at).to_owned()}</p>
            <p class="comment__content">{comment.content}</p>
            <div class="comment__actions">
                <button
                    class="comment__like"
                    class:comment__like--active=liked
                    disabled=!signed_in
                    on:click=move |_| on_like.run(like_id.clone())
                >
                    "Like"
                </button>
                <span class="comment__likes">{likes_label(comment.number_of_likes)}</span>
                {deletable
                    .then(|| {
                        view! {
                            <button class="comment__delete" on:click=move |_| on_delete.run(delete_id.clone())>
                                "Delete"
                            </button>
                        }
                    })}
            </div>
        </li>
    }
}
