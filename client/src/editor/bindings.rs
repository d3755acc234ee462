//! JavaScript-facing wrapper for the "Related Post" block tool.
//!
//! The host editor constructs the tool with `{ data, ... }`, reads the static
//! `toolbox` getter, calls `render()` to mount the block, and `save(el)` to
//! serialize it.

use wasm_bindgen::prelude::*;

use super::related_post::{RelatedPostInput, RelatedPostTool};

#[wasm_bindgen(js_name = RelatedPostTool)]
pub struct RelatedPostToolJs {
    inner: RelatedPostTool,
}

#[wasm_bindgen(js_class = RelatedPostTool)]
impl RelatedPostToolJs {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Self {
        Self { inner: RelatedPostTool::new(block_input(&config)) }
    }

    /// Toolbox entry: `{ title, icon }`.
    #[wasm_bindgen(getter)]
    pub fn toolbox() -> JsValue {
        let toolbox = RelatedPostTool::toolbox();
        let entry = js_sys::Object::new();
        // Setting own properties on a fresh plain object cannot fail.
        let _ = js_sys::Reflect::set(&entry, &"title".into(), &toolbox.title.into());
        let _ = js_sys::Reflect::set(&entry, &"icon".into(), &toolbox.icon.into());
        entry.into()
    }

    pub fn render(&self) -> Result<web_sys::HtmlElement, JsValue> {
        self.inner.render()
    }

    /// `{ title, url, description }` read from the rendered block.
    pub fn save(&self, block_content: &web_sys::Element) -> Result<JsValue, JsValue> {
        let data = self.inner.save(block_content);
        let json = serde_json::to_string(&data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&json)
    }
}

/// Decode `config.data`; anything missing or malformed starts empty.
fn block_input(config: &JsValue) -> RelatedPostInput {
    let Some(json) = js_sys::Reflect::get(config, &"data".into())
        .ok()
        .filter(|data| !data.is_undefined() && !data.is_null())
        .and_then(|data| js_sys::JSON::stringify(&data).ok())
        .and_then(|s| s.as_string())
    else {
        return RelatedPostInput::default();
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        log::debug!("related post block data ignored: {e}");
        RelatedPostInput::default()
    })
}
