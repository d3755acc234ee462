//! Inline form for one "Related Post" block inside the post form.
//!
//! Renders the same markup the editor tool renders (container class plus one
//! control per field class), so the form can capture blocks with
//! `RelatedPostTool::save` the way the host editor does.

use leptos::prelude::*;

use crate::editor::related_post::{BLOCK_CLASS, RelatedPostData, RelatedPostField};

#[component]
pub fn RelatedPostFields(
    data: RelatedPostData,
    #[prop(into)] on_change: Callback<(RelatedPostField, String)>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let controls = RelatedPostField::ALL
        .into_iter()
        .map(|field| {
            let value = data.get(field).to_owned();
            if field.is_multiline() {
                view! {
                    <textarea
                        class=field.class()
                        placeholder=field.placeholder()
                        prop:value=value
                        on:input=move |ev| on_change.run((field, event_target_value(&ev)))
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        class=field.class()
                        placeholder=field.placeholder()
                        prop:value=value
                        on:input=move |ev| on_change.run((field, event_target_value(&ev)))
                    />
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <div class=BLOCK_CLASS>
            {controls}
            <button type="button" class="related-post__remove" on:click=move |_| on_remove.run(())>
                "Remove"
            </button>
        </div>
    }
}
