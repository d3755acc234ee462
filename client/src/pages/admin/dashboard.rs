//! Admin dashboard: totals plus the latest users, comments, and posts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::post_card::format_date;
use crate::net::api::{self, ReadOutcome};
use crate::net::http::ApiClient;
use crate::net::types::{CommentList, PostList, UserList};
use crate::pages::{load_into, loaded, status_message};
use crate::routes::{ADMIN_COMMENTS_PATH, ADMIN_POSTS_PATH, ADMIN_USERS_PATH};

/// Headline numbers for one stat card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub total: u64,
    pub last_month: u64,
}

impl From<&UserList> for Totals {
    fn from(list: &UserList) -> Self {
        Self { total: list.total_users, last_month: list.last_month_users }
    }
}

impl From<&CommentList> for Totals {
    fn from(list: &CommentList) -> Self {
        Self { total: list.total_comments, last_month: list.last_month_comments }
    }
}

impl From<&PostList> for Totals {
    fn from(list: &PostList) -> Self {
        Self { total: list.total_posts, last_month: list.last_month_posts }
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let users = RwSignal::new(None::<ReadOutcome<UserList>>);
    let comments = RwSignal::new(None::<ReadOutcome<CommentList>>);
    let posts = RwSignal::new(None::<ReadOutcome<PostList>>);

    Effect::new(move || {
        let (u, c, p) = (client.clone(), client.clone(), client.clone());
        load_into(users, async move { api::get_users(&u).await });
        load_into(comments, async move { api::get_comments(&c).await });
        load_into(posts, async move { api::get_posts(&p).await });
    });

    let user_totals =
        Signal::derive(move || users.with(|u| loaded(u.as_ref(), |list: &UserList| Totals::from(list))));
    let comment_totals =
        Signal::derive(move || comments.with(|c| loaded(c.as_ref(), |list: &CommentList| Totals::from(list))));
    let post_totals =
        Signal::derive(move || posts.with(|p| loaded(p.as_ref(), |list: &PostList| Totals::from(list))));

    view! {
        <section class="dashboard">
            <div class="dashboard__stats">
                <StatCard title="Total users" totals=user_totals/>
                <StatCard title="Total comments" totals=comment_totals/>
                <StatCard title="Total posts" totals=post_totals/>
            </div>
            <div class="dashboard__previews">
                <div class="dashboard__preview">
                    <h2>"Recent users"</h2>
                    {move || users.with(|u| status_message(u.as_ref(), "No users yet."))}
                    <ul>
                        {move || {
                            users
                                .with(|u| loaded(u.as_ref(), |list| list.users.clone()))
                                .into_iter()
                                .map(|user| view! { <li>{user.username}" · "{user.email}</li> })
                                .collect_view()
                        }}
                    </ul>
                    <A href=ADMIN_USERS_PATH>"See all"</A>
                </div>
                <div class="dashboard__preview">
                    <h2>"Recent comments"</h2>
                    {move || comments.with(|c| status_message(c.as_ref(), "No comments yet."))}
                    <ul>
                        {move || {
                            comments
                                .with(|c| loaded(c.as_ref(), |list| list.comments.clone()))
                                .into_iter()
                                .map(|comment| {
                                    view! { <li>{comment.content}" · "{comment.number_of_likes}" likes"</li> }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <A href=ADMIN_COMMENTS_PATH>"See all"</A>
                </div>
                <div class="dashboard__preview">
                    <h2>"Recent posts"</h2>
                    {move || posts.with(|p| status_message(p.as_ref(), "No posts yet."))}
                    <ul>
                        {move || {
                            posts
                                .with(|p| loaded(p.as_ref(), |list| list.posts.clone()))
                                .into_iter()
                                .map(|post| {
                                    let date = format_date(&post.created_at).to_owned();
                                    let href = post.detail_path();
                                    view! {
                                        <li>
                                            <A href=href>{post.title}</A>
                                            " · "{post.category}" · "{date}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <A href=ADMIN_POSTS_PATH>"See all"</A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(title: &'static str, #[prop(into)] totals: Signal<Totals>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{title}</h3>
            <p class="stat-card__total">{move || totals.get().total}</p>
            <p class="stat-card__month">{move || format!("+{} last month", totals.get().last_month)}</p>
        </div>
    }
}
