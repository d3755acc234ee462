//! "Related Post" block for the block-based post editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! A block is three inline fields (title, URL, description). `render` builds
//! the block's DOM fragment and wires each control's `input` event straight
//! into the block's local data, with no validation or debouncing. `save`
//! reads the values back out of the rendered fragment by class name, not from
//! retained element references, which is what the host editor serializes.
//! There is no network access here.

#[cfg(test)]
#[path = "related_post_test.rs"]
mod related_post_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub const BLOCK_CLASS: &str = "ce-related-post";
pub const TITLE_CLASS: &str = "ce-related-post__title";
pub const URL_CLASS: &str = "ce-related-post__url";
pub const DESCRIPTION_CLASS: &str = "ce-related-post__description";

/// Block type name under which the host editor stores this block.
pub const BLOCK_TYPE: &str = "relatedPost";

const TOOLBOX_TITLE: &str = "Related Post";
const TOOLBOX_ICON: &str = r#"<svg width="17" height="15" viewBox="0 0 336 276" xmlns="http://www.w3.org/2000/svg"><path d="M291 150V79c0-19-15-34-34-34H79c-19 0-34 15-34 34v42l67-44 81 72 56-29 42 30zm0 52l-43-30-56 30-81-67-66 39v23c0 19 15 34 34 34h178c17 0 31-13 34-29zM79 0h178c44 0 79 35 79 79v118c0 44-35 79-79 79H79c-44 0-79-35-79-79V79C0 35 35 0 79 0z"/></svg>"#;

/// Saved payload of one block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPostData {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Block data as the host hands it over; any field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelatedPostInput {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl RelatedPostData {
    /// Fill every missing field with an empty string.
    #[must_use]
    pub fn from_input(input: RelatedPostInput) -> Self {
        Self {
            title: input.title.unwrap_or_default(),
            url: input.url.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn get(&self, field: RelatedPostField) -> &str {
        match field {
            RelatedPostField::Title => &self.title,
            RelatedPostField::Url => &self.url,
            RelatedPostField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: RelatedPostField, value: String) {
        match field {
            RelatedPostField::Title => self.title = value,
            RelatedPostField::Url => self.url = value,
            RelatedPostField::Description => self.description = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelatedPostField {
    Title,
    Url,
    Description,
}

impl RelatedPostField {
    pub const ALL: [Self; 3] = [Self::Title, Self::Url, Self::Description];

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Title => TITLE_CLASS,
            Self::Url => URL_CLASS,
            Self::Description => DESCRIPTION_CLASS,
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Post Title",
            Self::Url => "Post URL",
            Self::Description => "Brief description",
        }
    }

    /// Rendered as a `<textarea>` rather than an `<input>`.
    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Description)
    }
}

/// Toolbox entry shown in the editor's block picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Toolbox {
    pub title: &'static str,
    pub icon: &'static str,
}

/// A rendered block the field values can be read back from.
pub trait BlockContent {
    /// Current value of the control carrying `class`, if present.
    fn field_value(&self, class: &str) -> Option<String>;
}

/// One control of a rendered block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedField {
    pub field: RelatedPostField,
    pub value: String,
}

/// Detached description of a rendered block; what `render` puts in the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedBlock {
    pub fields: Vec<RenderedField>,
}

impl RenderedBlock {
    /// Overwrite a control's value, as typing into it would.
    pub fn type_into(&mut self, field: RelatedPostField, value: &str) {
        if let Some(control) = self.fields.iter_mut().find(|f| f.field == field) {
            control.value = value.to_owned();
        }
    }
}

impl BlockContent for RenderedBlock {
    fn field_value(&self, class: &str) -> Option<String> {
        self.fields.iter().find(|f| f.field.class() == class).map(|f| f.value.clone())
    }
}

/// The editor block. Data is shared with the input listeners `render`
/// installs, so edits land in the block while it is mounted.
#[derive(Clone, Debug, Default)]
pub struct RelatedPostTool {
    data: Rc<RefCell<RelatedPostData>>,
}

impl RelatedPostTool {
    #[must_use]
    pub fn new(input: RelatedPostInput) -> Self {
        Self { data: Rc::new(RefCell::new(RelatedPostData::from_input(input))) }
    }

    #[must_use]
    pub fn toolbox() -> Toolbox {
        Toolbox { title: TOOLBOX_TITLE, icon: TOOLBOX_ICON }
    }

    /// Snapshot of the block's local data.
    #[must_use]
    pub fn data(&self) -> RelatedPostData {
        self.data.borrow().clone()
    }

    /// `input` event handler body: write straight into local data.
    pub fn on_input(&self, field: RelatedPostField, value: String) {
        self.data.borrow_mut().set(field, value);
    }

    /// Controls in render order, seeded from local data.
    #[must_use]
    pub fn layout(&self) -> RenderedBlock {
        let data = self.data.borrow();
        RenderedBlock {
            fields: RelatedPostField::ALL
                .into_iter()
                .map(|field| RenderedField { field, value: data.get(field).to_owned() })
                .collect(),
        }
    }

    /// Read the three field values out of `content`.
    ///
    /// A control missing from `content` saves as an empty string.
    #[allow(clippy::unused_self)]
    pub fn save(&self, content: &impl BlockContent) -> RelatedPostData {
        let read = |field: RelatedPostField| {
            content.field_value(field.class()).unwrap_or_else(|| {
                log::warn!("related post block is missing its {} control", field.class());
                String::new()
            })
        };
        RelatedPostData {
            title: read(RelatedPostField::Title),
            url: read(RelatedPostField::Url),
            description: read(RelatedPostField::Description),
        }
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;

    use super::{BLOCK_CLASS, BlockContent, RelatedPostTool};

    impl BlockContent for web_sys::Element {
        fn field_value(&self, class: &str) -> Option<String> {
            let el = self.query_selector(&format!(".{class}")).ok().flatten()?;
            control_value(&el)
        }
    }

    fn control_value(target: &JsValue) -> Option<String> {
        if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
            return Some(input.value());
        }
        target.dyn_ref::<web_sys::HtmlTextAreaElement>().map(web_sys::HtmlTextAreaElement::value)
    }

    impl RelatedPostTool {
        /// Build the block's DOM fragment with live-bound controls.
        ///
        /// # Errors
        ///
        /// Returns the DOM exception if an element cannot be created.
        pub fn render(&self) -> Result<web_sys::HtmlElement, JsValue> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| JsValue::from_str("no document"))?;
            let container: web_sys::HtmlElement = document.create_element("div")?.unchecked_into();
            container.class_list().add_1(BLOCK_CLASS)?;

            for rendered in self.layout().fields {
                let field = rendered.field;
                let control = if field.is_multiline() {
                    let area: web_sys::HtmlTextAreaElement = document.create_element("textarea")?.unchecked_into();
                    area.set_placeholder(field.placeholder());
                    area.set_value(&rendered.value);
                    area.unchecked_into::<web_sys::HtmlElement>()
                } else {
                    let input: web_sys::HtmlInputElement = document.create_element("input")?.unchecked_into();
                    input.set_placeholder(field.placeholder());
                    input.set_value(&rendered.value);
                    input.unchecked_into::<web_sys::HtmlElement>()
                };
                control.class_list().add_1(field.class())?;

                let tool = self.clone();
                let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
                    if let Some(value) = ev.target().and_then(|t| control_value(&t)) {
                        tool.on_input(field, value);
                    }
                });
                control.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
                // Lives as long as the element; the editor owns teardown.
                on_input.forget();

                container.append_child(&control)?;
            }
            Ok(container)
        }
    }
}
