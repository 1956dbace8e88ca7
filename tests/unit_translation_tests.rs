//! # Translation Table Unit Tests / 翻译表单元测试
//!
//! Covers the static page strings: completeness in all three languages and
//! the echo-the-key fallback for unknown keys.

use inne_space::core::language::Language;
use inne_space::translations::{lookup, t, translation_keys};

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[test]
    fn test_every_key_is_non_empty_in_every_language() {
        let keys: Vec<_> = translation_keys().collect();
        assert!(!keys.is_empty());

        for key in keys {
            for language in Language::ALL {
                let text = t(key, language);
                assert!(!text.trim().is_empty(), "{key} is empty for {language}");
            }
        }
    }

    #[test]
    fn test_unknown_key_is_echoed() {
        for language in Language::ALL {
            assert_eq!(t("noSuchKey", language), "noSuchKey");
        }
        assert_eq!(t("", Language::Uk), "");
        assert!(lookup("noSuchKey").is_none());
    }

    #[test]
    fn test_known_keys_per_language() {
        assert_eq!(t("projects", Language::En), "Projects");
        assert_eq!(t("projects", Language::Uk), "Проєкти");
        assert_eq!(t("projects", Language::Ru), "Проекты");
        assert_eq!(t("currentlyWorking", Language::Ru), "Работаю до сих пор");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_eq!(t("Projects", Language::Uk), "Projects");
    }
}

#[cfg(test)]
mod table_shape_tests {
    use super::*;

    #[test]
    fn test_keys_are_sorted_and_unique() {
        let keys: Vec<_> = translation_keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_page_keys_are_present() {
        for key in [
            "name",
            "intro",
            "projects",
            "experience",
            "totalExperience",
            "currentlyWorking",
            "contacts",
            "jobSearchStatus",
        ] {
            assert!(lookup(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_languages_differ_for_localized_entries() {
        let entry = lookup("contacts").unwrap();
        assert_ne!(entry.en, entry.uk);
        assert_ne!(entry.uk, entry.ru);
    }
}
