//! Mirrors the active theme onto the document.
//!
//! Sets a `data-theme` attribute on the `<html>` element so stylesheets can
//! switch palettes. Requires a browser environment; a no-op otherwise.

use crate::state::theme::Theme;

/// Attribute written on `<html>`.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Apply `theme` to the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
