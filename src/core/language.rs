//! # Language Module / 语言模块
//!
//! The closed set of display languages and the fixed-arity `Localized<T>`
//! bundle that carries one value per language.
//!
//! 显示语言的封闭集合，以及为每种语言携带一个值的定长 `Localized<T>` 结构。

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display language of the page.
/// 页面的显示语言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uk,
    Ru,
}

impl Language {
    /// All supported languages, in switcher order.
    pub const ALL: [Language; 3] = [Language::En, Language::Uk, Language::Ru];

    /// The lowercase code that is persisted and substituted into URLs.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Uk => "uk",
            Language::Ru => "ru",
        }
    }

    /// Parses an exact lowercase language code. Anything else is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "uk" => Some(Language::Uk),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    /// BCP 47 tag used for the `lang` attribute of rendered pages.
    pub fn html_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Uk => "uk-UA",
            Language::Ru => "ru-RU",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One value per supported language.
///
/// All three fields are required when deserializing: a record that lacks one
/// of them is rejected as a whole rather than silently falling back to
/// another language.
///
/// 每种支持的语言各一个值。反序列化时三个字段都是必需的。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub uk: T,
    pub ru: T,
}

/// A text in all three languages.
pub type LocalizedString = Localized<String>;

impl<T> Localized<T> {
    pub fn new(en: T, uk: T, ru: T) -> Self {
        Self { en, uk, ru }
    }

    /// Selects the value for `language`.
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Uk => &self.uk,
            Language::Ru => &self.ru,
        }
    }
}

impl LocalizedString {
    /// Borrowed view of the string for `language`.
    pub fn text(&self, language: Language) -> &str {
        self.get(language).as_str()
    }
}
