//! # Page Assembly Module / 页面组装模块
//!
//! Builds the complete view of the single page for one set of preferences:
//! hero, total experience, projects, experience, contacts and footer.
//!
//! 为一组偏好构建单页的完整视图：首屏、总经验、项目、经历、联系方式和页脚。

use serde::Serialize;

use crate::core::calendar::YearMonth;
use crate::core::duration::total_experience;
use crate::core::language::Language;
use crate::core::models::{ExperienceRecord, ProjectRecord};
use crate::core::preferences::{Preferences, Theme};
use crate::core::projection::{project, project_experience, ExperienceView, ProjectView};
use crate::core::translations::t;

pub const BRAND: &str = "inne.space";
pub const HEADING: &str = "Inne | Andy";
pub const FOOTER: &str = "© 2026 inne.space";

/// A fixed outbound profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const CONTACTS: [ContactLink; 4] = [
    ContactLink {
        label: "GitHub",
        url: "https://github.com/inne-dev",
    },
    ContactLink {
        label: "Telegram",
        url: "https://t.me/inne_dev",
    },
    ContactLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/andy-litvinov-635925289/",
    },
    ContactLink {
        label: "HH.ru",
        url: "https://hh.ru/resume/2e015778ff0be97e8b0039ed1f784254304a57",
    },
];

/// One entry of the language switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub language: Language,
    pub active: bool,
}

impl LanguageOption {
    /// Button label, e.g. `"UK"`.
    pub fn label(&self) -> String {
        self.language.code().to_uppercase()
    }
}

/// The total-experience line of the hero. Only present when there is at
/// least one experience record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceSummary {
    pub label: &'static str,
    pub duration: String,
    pub job_search_status: &'static str,
}

/// The whole page in one language and theme.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    pub language: Language,
    pub theme: Theme,
    pub title: &'static str,
    pub brand: &'static str,
    pub heading: &'static str,
    pub role: &'static str,
    pub intro: &'static str,
    pub summary: Option<ExperienceSummary>,
    pub projects_label: &'static str,
    pub projects: Vec<ProjectView<'a>>,
    pub experience_label: &'static str,
    pub experience: Vec<ExperienceView<'a>>,
    pub contacts_label: &'static str,
    pub contacts: &'static [ContactLink],
    pub languages: Vec<LanguageOption>,
    pub theme_label: &'static str,
    pub footer: &'static str,
}

impl<'a> PageView<'a> {
    /// Projects everything for `preferences`. `now` closes ongoing positions
    /// for the total-experience line.
    pub fn build(
        preferences: Preferences,
        projects: &'a [ProjectRecord],
        experience: &'a [ExperienceRecord],
        now: YearMonth,
    ) -> Self {
        let language = preferences.language;

        let summary = (!experience.is_empty()).then(|| ExperienceSummary {
            label: t("totalExperience", language),
            duration: total_experience(experience, language, now),
            job_search_status: t("jobSearchStatus", language),
        });

        let theme_label = match preferences.theme {
            Theme::Light => t("themeLight", language),
            Theme::Dark => t("themeDark", language),
        };

        Self {
            language,
            theme: preferences.theme,
            title: t("title", language),
            brand: BRAND,
            heading: HEADING,
            role: t("name", language),
            intro: t("intro", language),
            summary,
            projects_label: t("projects", language),
            projects: project(projects, language),
            experience_label: t("experience", language),
            experience: project_experience(experience, language),
            contacts_label: t("contacts", language),
            contacts: &CONTACTS,
            languages: Language::ALL
                .iter()
                .map(|&option| LanguageOption {
                    language: option,
                    active: option == language,
                })
                .collect(),
            theme_label,
            footer: FOOTER,
        }
    }
}
