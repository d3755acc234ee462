//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each store is a plain struct created once in `App` and handed down through
//! Leptos context. Stores notify subscribers explicitly; the `*Context`
//! wrappers bridge those notifications into signals for the view layer.

pub mod auth;
pub mod listeners;
pub mod theme;
