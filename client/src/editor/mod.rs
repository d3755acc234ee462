//! Post editor support.
//!
//! SYSTEM CONTEXT
//! ==============
//! Post bodies are block documents produced by a host block editor. This
//! module owns the document model stored in `Blog::content` and the custom
//! "Related Post" block tool. In the browser build the tool is exported to
//! JavaScript so the host editor can register it.

#[cfg(feature = "hydrate")]
pub mod bindings;
pub mod document;
pub mod related_post;
