//! The editor's saved document, stored as a post's `content`.
//!
//! DESIGN
//! ======
//! The shape follows the host editor's output (`{"time", "blocks", "version"}`,
//! each block `{"type", "data"}`). Blocks stay loosely typed so block kinds
//! this client does not render survive a load/save cycle untouched.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use serde::{Deserialize, Serialize};

use super::related_post::{BLOCK_TYPE as RELATED_POST_TYPE, RelatedPostData, RelatedPostInput};

pub const PARAGRAPH_TYPE: &str = "paragraph";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorDocument {
    #[serde(default)]
    pub time: u64,
    #[serde(default)]
    pub blocks: Vec<EditorBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// A block this client knows how to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockView {
    Paragraph(String),
    RelatedPost(RelatedPostData),
    Unsupported(String),
}

impl EditorBlock {
    #[must_use]
    pub fn paragraph(text: &str) -> Self {
        Self { id: None, kind: PARAGRAPH_TYPE.to_owned(), data: serde_json::json!({ "text": text }) }
    }

    #[must_use]
    pub fn related_post(data: &RelatedPostData) -> Self {
        Self {
            id: None,
            kind: RELATED_POST_TYPE.to_owned(),
            data: serde_json::to_value(data).unwrap_or(serde_json::Value::Null),
        }
    }

    #[must_use]
    pub fn view(&self) -> BlockView {
        match self.kind.as_str() {
            PARAGRAPH_TYPE => BlockView::Paragraph(
                self.data.get("text").and_then(serde_json::Value::as_str).unwrap_or_default().to_owned(),
            ),
            RELATED_POST_TYPE => {
                let input = serde_json::from_value::<RelatedPostInput>(self.data.clone()).unwrap_or_default();
                BlockView::RelatedPost(RelatedPostData::from_input(input))
            }
            other => BlockView::Unsupported(other.to_owned()),
        }
    }
}

impl EditorDocument {
    /// Parse stored post content.
    ///
    /// Content that is not an editor document (older plain-text posts) loads
    /// as one paragraph per non-blank line.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        if let Ok(doc) = serde_json::from_str::<Self>(content) {
            return doc;
        }
        Self { time: 0, blocks: paragraphs(content), version: None }
    }

    /// Build a document from free text and related-post blocks, paragraphs
    /// first.
    #[must_use]
    pub fn compose(body: &str, related: &[RelatedPostData], time: u64) -> Self {
        let mut blocks = paragraphs(body);
        blocks.extend(related.iter().map(EditorBlock::related_post));
        Self { time, blocks, version: None }
    }

    /// Serialized form stored in `Blog::content`.
    #[must_use]
    pub fn to_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Paragraph text joined by newlines, for re-editing.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| match b.view() {
                BlockView::Paragraph(text) => Some(text),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn related_posts(&self) -> Vec<RelatedPostData> {
        self.blocks
            .iter()
            .filter_map(|b| match b.view() {
                BlockView::RelatedPost(data) => Some(data),
                _ => None,
            })
            .collect()
    }
}

fn paragraphs(text: &str) -> Vec<EditorBlock> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).map(EditorBlock::paragraph).collect()
}
