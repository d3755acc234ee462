//! Create/update post form at `/admin/create/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `id = new` creates a post; any other id loads that post and updates it.
//! The body is stored as an editor document: the free-text body becomes
//! paragraph blocks, followed by one `relatedPost` block per related-post
//! entry. In the browser, related posts are captured from the rendered
//! blocks with `RelatedPostTool::save`, exactly as the host editor would
//! serialize them.

#[cfg(test)]
#[path = "create_post_test.rs"]
mod create_post_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::related_post_fields::RelatedPostFields;
use crate::editor::document::EditorDocument;
use crate::editor::related_post::{RelatedPostData, RelatedPostField};
use crate::net::api::{self, ReadOutcome};
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Blog, PostPayload};
use crate::state::auth::AuthContext;

/// Route id that selects create mode.
pub const NEW_POST_ID: &str = "new";

pub const STATUS_OPTIONS: [&str; 2] = ["draft", "published"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update(String),
}

impl EditorMode {
    #[must_use]
    pub fn from_param(id: &str) -> Self {
        let id = id.trim();
        if id.is_empty() || id == NEW_POST_ID { Self::Create } else { Self::Update(id.to_owned()) }
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Create a post",
            Self::Update(_) => "Update post",
        }
    }
}

/// Editable form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub tags: String,
    pub image: String,
    pub status: String,
    pub category: String,
    pub body: String,
    pub related: Vec<RelatedPostData>,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            tags: String::new(),
            image: String::new(),
            status: STATUS_OPTIONS[0].to_owned(),
            category: String::new(),
            body: String::new(),
            related: Vec::new(),
        }
    }
}

impl PostForm {
    /// Prefill from an existing post, unpacking its editor document.
    #[must_use]
    pub fn from_blog(post: &Blog) -> Self {
        let document = EditorDocument::parse(&post.content);
        Self {
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            tags: post.tags.clone(),
            image: post.image.clone(),
            status: if post.status.is_empty() { STATUS_OPTIONS[0].to_owned() } else { post.status.clone() },
            category: post.category.clone(),
            body: document.body_text(),
            related: document.related_posts(),
        }
    }

    /// Request body, with `related` as the captured related-post blocks.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the title is blank.
    pub fn payload(&self, related: &[RelatedPostData], time: u64) -> Result<PostPayload, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("A post needs a title.");
        }
        Ok(PostPayload {
            title: title.to_owned(),
            subtitle: self.subtitle.trim().to_owned(),
            tags: self.tags.trim().to_owned(),
            image: self.image.trim().to_owned(),
            status: self.status.clone(),
            content: EditorDocument::compose(&self.body, related, time).to_content(),
            category: self.category.trim().to_owned(),
        })
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(feature = "hydrate"))]
fn now_millis() -> u64 {
    0
}

/// Read every rendered related-post block under `root` the way the editor
/// saves them.
#[cfg(feature = "hydrate")]
fn capture_related(root: &web_sys::Element) -> Vec<RelatedPostData> {
    use wasm_bindgen::JsCast as _;

    use crate::editor::related_post::{BLOCK_CLASS, RelatedPostTool};

    let Ok(blocks) = root.query_selector_all(&format!(".{BLOCK_CLASS}")) else {
        return Vec::new();
    };
    let tool = RelatedPostTool::default();
    (0..blocks.length())
        .filter_map(|i| blocks.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|block| tool.save(&block))
        .collect()
}

#[component]
pub fn CreatePostPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let navigate = use_navigate();

    let mode = Memo::new(move |_| params.with(|p| EditorMode::from_param(&p.get("id").unwrap_or_default())));
    let form = RwSignal::new(PostForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let blocks_ref = NodeRef::<leptos::html::Div>::new();

    let load_client = client.clone();
    Effect::new(move || {
        let EditorMode::Update(post_id) = mode.get() else {
            form.set(PostForm::default());
            return;
        };
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_post_by_id(&client, &post_id).await {
                ReadOutcome::Loaded(list) => match list.posts.first() {
                    Some(post) => form.set(PostForm::from_blog(post)),
                    None => info.set("Post not found.".to_owned()),
                },
                ReadOutcome::Empty => info.set("Post not found.".to_owned()),
                ReadOutcome::Failed(e) => info.set(e.user_message()),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(user) = auth.user_untracked() else {
            info.set("Sign in again to publish.".to_owned());
            return;
        };

        #[cfg(feature = "hydrate")]
        let related = match blocks_ref.get_untracked() {
            Some(root) => capture_related(&root),
            None => form.with_untracked(|f| f.related.clone()),
        };
        #[cfg(not(feature = "hydrate"))]
        let related = form.with_untracked(|f| f.related.clone());

        let payload = match form.with_untracked(|f| f.payload(&related, now_millis())) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let client = client.clone();
        let navigate = navigate.clone();
        let mode = mode.get_untracked();
        leptos::task::spawn_local(async move {
            let saved: Result<Blog, ApiError> = match &mode {
                EditorMode::Create => api::create_post(&client, &payload).await,
                EditorMode::Update(post_id) => api::update_post(&client, &payload, post_id, &user.id).await,
            };
            match saved {
                Ok(post) => navigate(&post.detail_path(), NavigateOptions::default()),
                Err(e) => {
                    info.set(e.user_message());
                    busy.set(false);
                }
            }
        });
    };

    let on_add_related = move |_| form.update(|f| f.related.push(RelatedPostData::default()));

    view! {
        <section class="post-form">
            <h1>{move || mode.with(EditorMode::heading)}</h1>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Subtitle"
                    prop:value=move || form.with(|f| f.subtitle.clone())
                    on:input=move |ev| form.update(|f| f.subtitle = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || form.with(|f| f.category.clone())
                    on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Tags, comma separated"
                    prop:value=move || form.with(|f| f.tags.clone())
                    on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="Cover image URL"
                    prop:value=move || form.with(|f| f.image.clone())
                    on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                />
                <select
                    prop:value=move || form.with(|f| f.status.clone())
                    on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                >
                    {STATUS_OPTIONS
                        .into_iter()
                        .map(|status| view! { <option value=status>{status}</option> })
                        .collect_view()}
                </select>
                <textarea
                    class="post-form__body"
                    placeholder="Write something..."
                    prop:value=move || form.with(|f| f.body.clone())
                    on:input=move |ev| form.update(|f| f.body = event_target_value(&ev))
                ></textarea>
                <div class="post-form__related" node_ref=blocks_ref>
                    {move || {
                        form.with(|f| f.related.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, data)| {
                                view! {
                                    <RelatedPostFields
                                        data
                                        on_change=move |(field, value): (RelatedPostField, String)| {
                                            form.update_untracked(|f| {
                                                if let Some(block) = f.related.get_mut(index) {
                                                    block.set(field, value);
                                                }
                                            });
                                        }
                                        on_remove=move |()| {
                                            form.update(|f| {
                                                if index < f.related.len() {
                                                    f.related.remove(index);
                                                }
                                            });
                                        }
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button type="button" on:click=on_add_related>"Add related post"</button>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Publish" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="post-form__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
