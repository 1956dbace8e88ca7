// Shared test helpers for integration tests
#![allow(dead_code)]

use inne_space::core::language::LocalizedString;
use inne_space::models::{ExperienceRecord, ProjectRecord};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn localized(en: &str, uk: &str, ru: &str) -> LocalizedString {
    LocalizedString::new(en.to_string(), uk.to_string(), ru.to_string())
}

pub fn same(text: &str) -> LocalizedString {
    localized(text, text, text)
}

pub fn project(id: &str, url: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: localized("Blog", "Блог", "Блог"),
        description: localized("Posts", "Дописи", "Посты"),
        url: url.to_string(),
        icon: "Globe".to_string(),
        tags: vec!["Go".to_string(), "Gin".to_string()],
        disabled: false,
        disabled_reason: same(""),
    }
}

pub fn experience(id: &str, start: &str, end: Option<&str>) -> ExperienceRecord {
    ExperienceRecord {
        id: id.to_string(),
        company: localized("Acme", "Акме", "Акме"),
        position: localized("Developer", "Розробник", "Разработчик"),
        description: localized(
            "- Built services\n- Wrote tests",
            "- Створював сервіси\n- Писав тести",
            "- Создавал сервисы\n- Писал тесты",
        ),
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
        tags: vec!["Rust".to_string()],
    }
}

pub const PROJECTS_YAML: &str = r#"
projects:
  - id: blog
    title: { en: Blog, uk: Блог, ru: Блог }
    description: { en: Posts, uk: Дописи, ru: Посты }
    url: "https://blog.inne.space/{language}/posts"
    icon: Globe
    tags: [Go]
    disabled: false
    disabledReason: { en: "", uk: "", ru: "" }
  - id: bot
    title: { en: Bot, uk: Бот, ru: Бот }
    description: { en: Helper, uk: Помічник, ru: Помощник }
    url: "https://t.me/inne_dev"
    icon: Rocket
    tags: []
    disabled: true
    disabledReason: { en: "", uk: "На паузі", ru: "На паузе" }
"#;

pub const EXPERIENCE_YAML: &str = r#"
experience:
  - id: one
    company: { en: Acme, uk: Акме, ru: Акме }
    position: { en: Developer, uk: Розробник, ru: Разработчик }
    description: { en: "- Built services", uk: "- Створював сервіси", ru: "- Создавал сервисы" }
    startDate: "2020-01"
    endDate: "2020-12"
    tags: [Rust]
"#;

/// Creates a content directory with both YAML documents.
pub fn setup_content_dir() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    fs::write(temp_dir.path().join("projects.yaml"), PROJECTS_YAML)
        .expect("Failed to write projects.yaml");
    fs::write(temp_dir.path().join("experience.yaml"), EXPERIENCE_YAML)
        .expect("Failed to write experience.yaml");
    temp_dir
}

pub fn store_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("prefs").join("preferences.toml")
}
