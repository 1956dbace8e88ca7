//! # Preferences Module / 偏好模块
//!
//! Resolves the display language and theme at startup and persists every
//! later change through a key-value store.
//!
//! Resolution order for both values is: persisted choice, then the system
//! hint, then the default. Malformed persisted values count as absent.
//!
//! 在启动时解析显示语言和主题，并通过键值存储持久化之后的每次更改。
//! 两个值的解析顺序均为：已保存的选择、系统提示、默认值。

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::core::language::Language;

/// Storage key of the theme (`"dark"` or `"light"`).
pub const THEME_KEY: &str = "inne-theme";
/// Storage key of the language code (`"en"`, `"uk"` or `"ru"`).
pub const LANGUAGE_KEY: &str = "inne-language";

/// Color scheme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The literal form written to the store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads a persisted value: only the exact string `"light"` is light,
    /// any other value is dark.
    pub fn from_persisted(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active language and theme. Passed explicitly to everything that
/// renders; there is no process-wide copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

/// Raw values read back from the store, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedPreferences {
    pub language: Option<String>,
    pub theme: Option<String>,
}

impl PersistedPreferences {
    pub fn read_from<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            language: store.get(LANGUAGE_KEY),
            theme: store.get(THEME_KEY),
        }
    }
}

/// Maps an ambient locale string such as `"uk-UA"` or `"ru_RU.UTF-8"` to a
/// language. The match is a case-insensitive substring test, Ukrainian first.
pub fn language_from_locale_hint(hint: &str) -> Language {
    let hint = hint.to_lowercase();
    if hint.contains("uk") || hint.contains("ua") {
        Language::Uk
    } else if hint.contains("ru") {
        Language::Ru
    } else {
        Language::En
    }
}

/// Resolves the startup preferences. Pure: reading never writes anything back.
pub fn resolve_initial(
    persisted: &PersistedPreferences,
    system_locale_hint: &str,
    prefers_dark: bool,
) -> Preferences {
    let language = persisted
        .language
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_else(|| language_from_locale_hint(system_locale_hint));

    let theme = match persisted.theme.as_deref() {
        Some(value) if !value.is_empty() => Theme::from_persisted(value),
        _ => Theme::from_prefers_dark(prefers_dark),
    };

    Preferences { language, theme }
}

/// A string-to-string persistence capability, in the spirit of browser
/// local storage. Writes are synchronous.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Used by tests and as a throwaway store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owns the store and the current preferences, and persists every change
/// before returning.
///
/// 持有存储和当前偏好，并在返回前持久化每一次更改。
#[derive(Debug)]
pub struct PreferenceController<S: KeyValueStore> {
    store: S,
    preferences: Preferences,
}

impl<S: KeyValueStore> PreferenceController<S> {
    /// Resolves the startup preferences from `store` and the system hints.
    pub fn load(store: S, system_locale_hint: &str, prefers_dark: bool) -> Self {
        let persisted = PersistedPreferences::read_from(&store);
        let preferences = resolve_initial(&persisted, system_locale_hint, prefers_dark);
        Self { store, preferences }
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Switches the language and writes it under [`LANGUAGE_KEY`].
    /// On a write error the new language is still active in memory.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.preferences.language = language;
        self.store.set(LANGUAGE_KEY, language.code())
    }

    /// Switches the theme and writes it under [`THEME_KEY`].
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.preferences.theme = theme;
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Flips light/dark and returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.preferences.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
