//! # inne-space Library / inne-space 库
//!
//! This library provides the core of the inne.space portfolio page: a
//! trilingual (English/Ukrainian/Russian) single page with projects, a work
//! history with a computed total experience, and light/dark theming.
//!
//! 此库为 inne.space 作品集页面提供核心功能：
//! 一个三语（英语/乌克兰语/俄语）单页，包含项目、带有总经验计算的工作经历以及明暗主题。
//!
//! ## Modules / 模块
//!
//! - `core` - Languages, translations, preferences, projection and duration logic
//! - `infra` - Document loading, preference store, system hints, configuration, logging
//! - `reporting` - HTML site and console rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 语言、翻译、偏好、投影和时长逻辑
//! - `infra` - 文档加载、偏好存储、系统提示、配置和日志
//! - `reporting` - HTML 站点和控制台渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::models;
pub use core::preferences;
pub use core::translations;

/// Picks the locale for the tool's own messages and activates it.
///
/// `requested` (from `--ui-lang`) wins over the system locale. The full
/// locale is tried first (e.g. "uk-UA"), then its language part ("uk"), and
/// finally the default "en". Returns the locale that was activated.
pub fn init_ui_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n for the CLI messages
rust_i18n::i18n!("locales", fallback = "en");
