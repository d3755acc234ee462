//! Admin posts table with edit links, delete, and "show more".

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::post_card::format_date;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::Blog;
use crate::pages::paged::{Paged, fetch_page};
use crate::routes::admin_create_path;
use crate::state::auth::AuthContext;

#[component]
pub fn AdminPostsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<AuthContext>();
    let table = RwSignal::new(Paged::<Blog>::default());

    let load = {
        let client = client.clone();
        move |start: usize| {
            let client = client.clone();
            fetch_page(table, async move { api::get_all_posts(&client, start).await.map(|list| list.posts) });
        }
    };
    let first_page = load.clone();
    Effect::new(move || first_page(0));

    let on_delete = Callback::new(move |post_id: String| {
        let Some(user) = auth.user_untracked() else {
            return;
        };
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::delete_post(&client, &user.id, &post_id).await {
                Ok(()) => table.update(|t| t.remove_where(|post| post.id == post_id)),
                Err(e) => table.update(|t| t.error = Some(e.user_message())),
            }
        });
    });

    view! {
        <section class="admin-table">
            <h1>"Posts"</h1>
            <Show when=move || table.with(Paged::is_empty_result)>
                <p class="status">"You have no posts yet."</p>
            </Show>
            {move || table.with(|t| t.error.clone()).map(|message| view! { <p class="status">{message}</p> })}
            <table>
                <thead>
                    <tr>
                        <th>"Date updated"</th>
                        <th>"Image"</th>
                        <th>"Title"</th>
                        <th>"Category"</th>
                        <th>"Status"</th>
                        <th></th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || table.with(|t| t.rows.clone())
                        key=|post| post.id.clone()
                        children=move |post: Blog| {
                            let date = format_date(&post.created_at).to_owned();
                            let detail = post.detail_path();
                            let edit = admin_create_path(&post.id);
                            let post_id = post.id.clone();
                            view! {
                                <tr>
                                    <td>{date}</td>
                                    <td><img class="admin-table__thumb" src=post.image alt=""/></td>
                                    <td><A href=detail>{post.title}</A></td>
                                    <td>{post.category}</td>
                                    <td>{post.status}</td>
                                    <td><A href=edit>"Edit"</A></td>
                                    <td>
                                        <button on:click=move |_| on_delete.run(post_id.clone())>"Delete"</button>
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
