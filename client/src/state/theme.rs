//! Light/dark theme flag.
//!
//! `toggle_theme` assigns the caller-supplied theme; it does not invert the
//! current one. The flag is not persisted and starts as `Light` on every load.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use super::listeners::{Listeners, SubscriptionId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a theme flag; anything but `dark` is light.
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        if flag.eq_ignore_ascii_case("dark") { Self::Dark } else { Self::Light }
    }

    /// The other theme, for switch controls that want to flip.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Default)]
pub struct ThemeStore {
    theme: Theme,
    listeners: Listeners<Theme>,
}

impl ThemeStore {
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the theme to `state`.
    pub fn toggle_theme(&mut self, state: Theme) {
        self.theme = state;
        self.listeners.notify(&self.theme);
    }

    pub fn subscribe(&mut self, listener: impl Fn(&Theme) + Send + Sync + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

/// Reactive handle to the `ThemeStore`, provided through Leptos context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: StoredValue<ThemeStore>,
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    #[must_use]
    pub fn new(mut store: ThemeStore) -> Self {
        let theme = RwSignal::new(store.theme());
        store.subscribe(move |next| theme.set(*next));
        Self { store: StoredValue::new(store), theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    #[must_use]
    pub fn theme_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn toggle_theme(&self, state: Theme) {
        self.store.update_value(|store| store.toggle_theme(state));
    }
}
