//! # System Hints Module / 系统提示模块
//!
//! Reads the ambient locale and the dark-mode preference once at startup.

use tracing::debug;

/// The environment signals consulted when nothing is persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemHints {
    /// Locale string as reported by the OS, e.g. `"uk-UA"`. Empty if unknown.
    pub locale: String,
    /// `true` when the OS reports a dark color scheme.
    pub prefers_dark: bool,
}

impl SystemHints {
    /// Detects both hints. Detection failures count as "no preference":
    /// an empty locale and a light scheme.
    pub fn detect() -> Self {
        let locale = sys_locale::get_locale().unwrap_or_default();
        let prefers_dark = matches!(dark_light::detect(), Ok(dark_light::Mode::Dark));
        debug!(%locale, prefers_dark, "detected system hints");
        Self {
            locale,
            prefers_dark,
        }
    }

    /// Replaces detected values with explicit ones where given.
    pub fn with_overrides(mut self, locale: Option<String>, prefers_dark: Option<bool>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if let Some(prefers_dark) = prefers_dark {
            self.prefers_dark = prefers_dark;
        }
        self
    }
}
