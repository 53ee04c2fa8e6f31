//! Syntax-highlighting theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The blog swaps one stylesheet link between theme files and remembers the
//! choice in a client-side key-value store. Storage is injected through
//! [`PreferenceStore`] so the logic runs the same against a browser cookie jar
//! or an in-memory map.
//!
//! TRADE-OFFS
//! ==========
//! Names are not validated. An unknown name persists and produces a
//! stylesheet path that will not resolve.

use std::collections::HashMap;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Preference key holding the theme name.
pub const THEME_KEY: &str = "codestyle";

/// Theme used when nothing has been stored.
pub const DEFAULT_THEME: &str = "solarizedlight";

/// Element id of the stylesheet link the theme controls.
pub const STYLESHEET_ID: &str = "syntax-css";

/// Themes offered by the blog's toggle.
pub const KNOWN_THEMES: &[&str] = &[
    "solarizedlight",
    "solarizeddark",
    "monokai",
    "github",
    "tomorrow",
];

/// Persisted key-value preferences scoped to the browsing context.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and server rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Stylesheet path for a theme name.
pub fn stylesheet_path(name: &str) -> String {
    format!("/css/{name}.css")
}

/// Theme selection backed by a preference store.
#[derive(Clone, Debug, Default)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Last selected theme, or [`DEFAULT_THEME`] when none (or an empty
    /// value) is stored.
    pub fn current_theme(&self) -> String {
        self.store
            .get(THEME_KEY)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_THEME.to_owned())
    }

    /// Persist `name` and return the stylesheet path the link should use.
    pub fn select_theme(&mut self, name: &str) -> String {
        self.store.set(THEME_KEY, name);
        stylesheet_path(name)
    }

    /// Re-select the current theme, as done once on page load.
    pub fn restore(&mut self) -> String {
        let current = self.current_theme();
        self.select_theme(&current)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
