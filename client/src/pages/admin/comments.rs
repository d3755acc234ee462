//! Admin comments table with delete and "show more".

use leptos::prelude::*;

use crate::components::post_card::format_date;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::Comment;
use crate::pages::paged::{Paged, fetch_page};

#[component]
pub fn AdminCommentsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let table = RwSignal::new(Paged::<Comment>::default());

    let load = {
        let client = client.clone();
        move |start: usize| {
            let client = client.clone();
            fetch_page(table, async move {
                api::get_all_comments(&client, start).await.map(|list| list.comments)
            });
        }
    };
    let first_page = load.clone();
    Effect::new(move || first_page(0));

    let on_delete = Callback::new(move |comment_id: String| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::delete_comment(&client, &comment_id).await {
                Ok(()) => table.update(|t| t.remove_where(|comment| comment.id == comment_id)),
                Err(e) => table.update(|t| t.error = Some(e.user_message())),
            }
        });
    });

    view! {
        <section class="admin-table">
            <h1>"Comments"</h1>
            <Show when=move || table.with(Paged::is_empty_result)>
                <p class="status">"You have no comments yet."</p>
            </Show>
            {move || table.with(|t| t.error.clone()).map(|message| view! { <p class="status">{message}</p> })}
            <table>
                <thead>
                    <tr>
                        <th>"Date updated"</th>
                        <th>"Comment"</th>
                        <th>"Likes"</th>
                        <th>"Post id"</th>
                        <th>"User id"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || table.with(|t| t.rows.clone())
                        key=|comment| comment.id.clone()
                        children=move |comment: Comment| {
                            let date = format_date(&comment.created_at).to_owned();
                            let comment_id = comment.id.clone();
                            view! {
                                <tr>
                                    <td>{date}</td>
                                    <td>{comment.content}</td>
                                    <td>{comment.number_of_likes}</td>
                                    <td>{comment.post_id}</td>
                                    <td>{comment.user_id}</td>
                                    <td>
                                        <button on:click=move |_| on_delete.run(comment_id.clone())>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || table.with(|t| t.has_more && !t.loading)>
                <button class="admin-table__more" on:click={
                    let load = load.clone();
                    move |_| load(table.with_untracked(Paged::next_start))
                }>"Show more"</button>
            </Show>
        </section>
    }
}
