//! # Site Rendering Integration Tests / 站点渲染集成测试
//!
//! Loads documents from disk and writes the full static site.

mod common;

use common::setup_content_dir;
use inne_space::core::calendar::YearMonth;
use inne_space::core::language::Language;
use inne_space::infra::documents::ContentSource;
use inne_space::preferences::{Preferences, Theme};
use inne_space::reporting::write_site;
use std::fs;

fn now() -> YearMonth {
    YearMonth::new(2024, 6).unwrap()
}

#[tokio::test]
async fn test_write_site_creates_every_page() {
    let content_dir = setup_content_dir();
    let out_dir = tempfile::tempdir().unwrap();
    let content = ContentSource::new(content_dir.path())
        .load_content("projects.yaml", "experience.yaml")
        .await;

    let preferences = Preferences {
        language: Language::Uk,
        theme: Theme::Dark,
    };
    let written = write_site(out_dir.path(), preferences, &content, now()).unwrap();

    assert_eq!(written.len(), 4);
    for code in ["en", "uk", "ru"] {
        assert!(out_dir.path().join(code).join("index.html").is_file());
    }

    let redirect = fs::read_to_string(out_dir.path().join("index.html")).unwrap();
    assert!(redirect.contains("./uk/"));
}

#[tokio::test]
async fn test_pages_are_localized_and_themed() {
    let content_dir = setup_content_dir();
    let out_dir = tempfile::tempdir().unwrap();
    let content = ContentSource::new(content_dir.path())
        .load_content("projects.yaml", "experience.yaml")
        .await;

    let preferences = Preferences {
        language: Language::En,
        theme: Theme::Dark,
    };
    write_site(out_dir.path(), preferences, &content, now()).unwrap();

    let uk = fs::read_to_string(out_dir.path().join("uk").join("index.html")).unwrap();
    assert!(uk.contains("lang=\"uk-UA\""));
    assert!(uk.contains("class=\"dark\""));
    assert!(uk.contains("Проєкти"));
    assert!(uk.contains("https://blog.inne.space/uk/posts"));
    assert!(uk.contains("На паузі"));
    assert!(uk.contains("1 рік"));

    let en = fs::read_to_string(out_dir.path().join("en").join("index.html")).unwrap();
    assert!(en.contains("https://blog.inne.space/en/posts"));
    assert!(en.contains("January 2020 - December 2020"));
    assert!(en.contains("Total experience"));
}

#[tokio::test]
async fn test_light_theme_and_empty_content() {
    let out_dir = tempfile::tempdir().unwrap();
    let content = ContentSource::new(out_dir.path().join("missing"))
        .load_content("projects.yaml", "experience.yaml")
        .await;

    let preferences = Preferences {
        language: Language::Ru,
        theme: Theme::Light,
    };
    write_site(out_dir.path(), preferences, &content, now()).unwrap();

    let ru = fs::read_to_string(out_dir.path().join("ru").join("index.html")).unwrap();
    assert!(!ru.contains("class=\"dark\""));
    assert!(ru.contains("Контакты"));
    assert!(!ru.contains("Общий опыт"));
}
