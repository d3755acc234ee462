//! Admin users table with delete and "show more".

use leptos::prelude::*;

use crate::components::post_card::format_date;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::CurrentUser;
use crate::pages::paged::{Paged, fetch_page};

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let table = RwSignal::new(Paged::<CurrentUser>::default());

    let load = {
        let client = client.clone();
        move |start: usize| {
            let client = client.clone();
            fetch_page(table, async move { api::get_all_users(&client, start).await.map(|list| list.users) });
        }
    };
    let first_page = load.clone();
    Effect::new(move || first_page(0));

    let on_delete = Callback::new(move |user_id: String| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::delete_user(&client, &user_id).await {
                Ok(()) => table.update(|t| t.remove_where(|user| user.id == user_id)),
                Err(e) => table.update(|t| t.error = Some(e.user_message())),
            }
        });
    });

    view! {
        <section class="admin-table">
            <h1>"Users"</h1>
            <Show when=move || table.with(Paged::is_empty_result)>
                <p class="status">"You have no users yet."</p>
            </Show>
            {move || table.with(|t| t.error.clone()).map(|message| view! { <p class="status">{message}</p> })}
            <table>
                <thead>
                    <tr>
                        <th>"Date created"</th>
                        <th>"Image"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Admin"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || table.with(|t| t.rows.clone())
                        key=|user| user.id.clone()
                        children=move |user: CurrentUser| {
                            let date = format_date(&user.created_at).to_owned();
                            let user_id = user.id.clone();
                            view! {
                                <tr>
                                    <td>{date}</td>
                                    <td><img class="admin-table__avatar" src=user.profile_picture alt=""/></td>
                                    <td>{user.username}</td>
                                    <td>{user.email}</td>
                                    <td>{if user.is_admin { "yes" } else { "no" }}</td>
                                    <td>
                                        <button on:click=move |_| on_delete.run(user_id.clone())>"Delete"</button>
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
