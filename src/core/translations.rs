//! # Translation Table / 翻译表
//!
//! The page strings live in `i18n/strings.toml` and are compiled into a sorted
//! static slice by `build.rs`. Lookups never fail: an unknown key is returned
//! verbatim so a missing entry shows up on the page instead of crashing it.
//!
//! 页面字符串由 `build.rs` 编译为有序静态切片。查找永不失败：未知的键会原样返回。

use crate::core::language::{Language, Localized};

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// Finds the entry for `key`, if the table has one.
pub fn lookup(key: &str) -> Option<&'static Localized<&'static str>> {
    TRANSLATIONS
        .binary_search_by(|(candidate, _)| (*candidate).cmp(key))
        .ok()
        .map(|index| &TRANSLATIONS[index].1)
}

/// Translates `key` into `language`, echoing the key back when it is unknown.
pub fn t(key: &str, language: Language) -> &str {
    match lookup(key) {
        Some(entry) => *entry.get(language),
        None => key,
    }
}

/// All keys of the table, in sorted order.
pub fn translation_keys() -> impl Iterator<Item = &'static str> {
    TRANSLATIONS.iter().map(|(key, _)| *key)
}
