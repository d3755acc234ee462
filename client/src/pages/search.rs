//! Search page: filter posts by term, sort order, and category.
//!
//! The filters live in the location query (`searchTerm`, `sort`,
//! `category`), so a search is shareable and survives reload. Submitting the
//! form navigates; the results reload whenever the query changes.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::paged::{Paged, fetch_page};
use crate::components::post_card::PostCard;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::Blog;
use crate::routes::SEARCH_PATH;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }

    /// Anything but `asc` sorts newest first.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "asc" { Self::Asc } else { Self::Desc }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub search_term: String,
    pub sort: SortOrder,
    /// Empty means every category.
    pub category: String,
}

impl SearchFilters {
    /// Read filters from location query parameters.
    #[must_use]
    pub fn from_query(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            search_term: lookup("searchTerm").unwrap_or_default(),
            sort: lookup("sort").map(|s| SortOrder::parse(&s)).unwrap_or_default(),
            category: lookup("category").unwrap_or_default(),
        }
    }

    /// Query string for the posts endpoint and the location. Values are
    /// passed through as typed.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut query = format!("searchTerm={}&sort={}", self.search_term.trim(), self.sort.as_str());
        let category = self.category.trim();
        if !category.is_empty() {
            query.push_str("&category=");
            query.push_str(category);
        }
        query
    }

    /// Query for the page starting at `start_index`.
    #[must_use]
    pub fn page_query(&self, start_index: usize) -> String {
        if start_index == 0 {
            self.to_query()
        } else {
            format!("{}&startIndex={start_index}", self.to_query())
        }
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let query = use_query_map();
    let navigate = use_navigate();

    let applied = Memo::new(move |_| query.with(|q| SearchFilters::from_query(|key| q.get(key))));
    let form = RwSignal::new(SearchFilters::default());
    let results = RwSignal::new(Paged::<Blog>::default());

    let load_client = client.clone();
    Effect::new(move || {
        let filters = applied.get();
        form.set(filters.clone());
        results.set(Paged::default());
        let client = load_client.clone();
        fetch_page(results, async move {
            api::get_posts_by_query(&client, &filters.page_query(0)).await.map(|list| list.posts)
        });
    });

    let on_show_more = move |_| {
        let filters = applied.get_untracked();
        let start = results.with_untracked(Paged::next_start);
        let client = client.clone();
        fetch_page(results, async move {
            api::get_posts_by_query(&client, &filters.page_query(start)).await.map(|list| list.posts)
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = format!("{SEARCH_PATH}?{}", form.with_untracked(SearchFilters::to_query));
        navigate(&target, NavigateOptions::default());
    };

    view! {
        <section class="search">
            <form class="search__filters" on:submit=on_submit>
                <label>
                    "Search term"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.search_term.clone())
                        on:input=move |ev| form.update(|f| f.search_term = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Sort"
                    <select
                        prop:value=move || form.with(|f| f.sort.as_str())
                        on:change=move |ev| form.update(|f| f.sort = SortOrder::parse(&event_target_value(&ev)))
                    >
                        <option value="desc">"Latest"</option>
                        <option value="asc">"Oldest"</option>
                    </select>
                </label>
                <label>
                    "Category"
                    <input
                        type="text"
                        placeholder="any"
                        prop:value=move || form.with(|f| f.category.clone())
                        on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Apply filters"</button>
            </form>
            <div class="search__results">
                <h1>"Posts results"</h1>
                <Show when=move || results.with(Paged::is_empty_result)>
                    <p class="status">"No posts found."</p>
                </Show>
                {move || results.with(|r| r.error.clone()).map(|message| view! { <p class="status">{message}</p> })}
                <div class="post-grid">
                    <For
                        each=move || results.with(|r| r.rows.clone())
                        key=|post| post.id.clone()
                        children=|post: Blog| view! { <PostCard post/> }
                    />
                </div>
                <Show when=move || results.with(|r| r.loading)>
                    <p class="status">"Loading..."</p>
                </Show>
                <Show when=move || results.with(|r| r.has_more && !r.loading)>
                    <button class="search__more" on:click=on_show_more.clone()>
                        "Show more"
                    </button>
                </Show>
            </div>
        </section>
    }
}
