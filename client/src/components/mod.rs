//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, post cards, and comment rows while reading
//! shared auth and theme state from Leptos context providers.

pub mod comment_item;
pub mod header;
pub mod post_card;
pub mod related_post_fields;
