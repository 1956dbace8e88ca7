//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes sample
//! `projects.yaml` and `experience.yaml` documents to start from.
//!
//! 此模块实现 `init` 命令，写出示例 `projects.yaml` 和 `experience.yaml` 文档。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::Path};

use crate::infra::t;

pub const SAMPLE_PROJECTS: &str = r#"# Projects shown on the page.
# Every text needs all three languages: en, uk, ru.
projects:
  - id: blog
    title:
      en: Blog
      uk: Блог
      ru: Блог
    description:
      en: Notes on backend development and infrastructure.
      uk: Нотатки про backend-розробку та інфраструктуру.
      ru: Заметки о backend-разработке и инфраструктуре.
    # "{language}" is replaced with the active language code.
    url: "https://blog.inne.space/{language}"
    icon: Globe
    tags: [Go, Gin]
    disabled: false
    disabledReason:
      en: ""
      uk: ""
      ru: ""

  - id: assistant-bot
    title:
      en: Assistant bot
      uk: Бот-помічник
      ru: Бот-помощник
    description:
      en: A Telegram bot that answers questions about my projects.
      uk: Telegram-бот, що відповідає на запитання про мої проєкти.
      ru: Telegram-бот, отвечающий на вопросы о моих проектах.
    url: "https://t.me/inne_dev"
    icon: Bot
    tags: [Python, AI]
    disabled: true
    disabledReason:
      en: Temporarily offline while it moves to a new server.
      uk: Тимчасово недоступний через переїзд на новий сервер.
      ru: Временно недоступен из-за переезда на новый сервер.
"#;

pub const SAMPLE_EXPERIENCE: &str = r#"# Work history. Dates are YYYY-MM or YYYY-MM-DD; endDate: null means ongoing.
experience:
  - id: current
    company:
      en: Example Corp
      uk: Example Corp
      ru: Example Corp
    position:
      en: Backend Developer
      uk: Backend Розробник
      ru: Backend Разработчик
    description:
      en: |
        - Built and maintained web services
        - Integrated third-party APIs
      uk: |
        - Розробка та підтримка веб-сервісів
        - Інтеграція сторонніх API
      ru: |
        - Разработка и поддержка веб-сервисов
        - Интеграция сторонних API
    startDate: "2023-03"
    endDate: null
    tags: [Go, PostgreSQL]

  - id: first-job
    company:
      en: Startup
      uk: Стартап
      ru: Стартап
    position:
      en: Junior Developer
      uk: Молодший розробник
      ru: Младший разработчик
    description:
      en: "- Optimized application performance"
      uk: "- Оптимізація продуктивності застосунку"
      ru: "- Оптимизация производительности приложения"
    startDate: "2021-09"
    endDate: "2023-02"
    tags: [Python]
"#;

/// Executes the init command.
///
/// # Arguments
/// * `dir` - Directory that receives `projects.yaml` and `experience.yaml`
/// * `force` - Whether to overwrite existing files
/// * `locale` - Locale for the messages
pub fn execute(dir: &Path, force: bool, locale: &str) -> Result<()> {
    let targets = [
        (dir.join("projects.yaml"), SAMPLE_PROJECTS),
        (dir.join("experience.yaml"), SAMPLE_EXPERIENCE),
    ];

    // Check if any file already exists
    if !force {
        if let Some((existing, _)) = targets.iter().find(|(path, _)| path.exists()) {
            println!(
                "{}",
                t!("init.file_exists", locale = locale, path = existing.display()).red()
            );
            println!("{}", t!("init.use_force", locale = locale).yellow());
            return Ok(());
        }
    }

    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| {
            format!(
                "{}",
                t!("init.create_dir_failed", locale = locale, path = dir.display())
            )
        })?;
    }

    for (path, body) in &targets {
        fs::write(path, body).with_context(|| {
            format!(
                "{}",
                t!("init.write_failed", locale = locale, path = path.display())
            )
        })?;
        println!(
            "{}",
            t!("init.success", locale = locale, path = path.display()).green()
        );
    }
    println!("{}", t!("init.next_steps", locale = locale));

    Ok(())
}
