//! # Content Projection Module / 内容投影模块
//!
//! Reduces loaded records to what one language displays. Records are only
//! borrowed: projecting again under another language needs no reload.
//!
//! 将加载的记录缩减为某一语言下的显示内容。记录仅被借用，切换语言时无需重新加载。

use serde::Serialize;

use crate::core::calendar::format_raw_month_year;
use crate::core::language::Language;
use crate::core::models::{ExperienceRecord, ProjectRecord};
use crate::core::translations::t;

/// Token in a project URL that is replaced with the active language code.
pub const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Icons a project card may reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Globe,
    Bot,
    MessageSquare,
}

impl Icon {
    /// Resolves a symbolic name from a document. Names are case-sensitive and
    /// unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Globe" => Some(Icon::Globe),
            "Bot" => Some(Icon::Bot),
            "MessageSquare" => Some(Icon::MessageSquare),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Icon::Globe => "Globe",
            Icon::Bot => "Bot",
            Icon::MessageSquare => "MessageSquare",
        }
    }

    /// Text glyph used by the static and console renderers.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Globe => "🌐",
            Icon::Bot => "🤖",
            Icon::MessageSquare => "💬",
        }
    }
}

/// A project card in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub url: String,
    pub icon: Option<Icon>,
    pub tags: &'a [String],
    pub disabled: bool,
    /// Present only for disabled projects with a non-empty reason.
    pub disabled_reason: Option<&'a str>,
}

/// An experience entry in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceView<'a> {
    pub id: &'a str,
    pub position: &'a str,
    pub company: &'a str,
    /// "<start> - <end>", where the end is "Currently working" for ongoing entries.
    pub period: String,
    pub is_current: bool,
    pub tags: &'a [String],
    pub bullets: Vec<&'a str>,
}

/// Replaces every `{language}` in `template` with the language code.
pub fn expand_url(template: &str, language: Language) -> String {
    template.replace(LANGUAGE_PLACEHOLDER, language.code())
}

pub fn project_one(record: &ProjectRecord, language: Language) -> ProjectView<'_> {
    let disabled_reason = if record.disabled {
        Some(record.disabled_reason.text(language)).filter(|reason| !reason.is_empty())
    } else {
        None
    };

    ProjectView {
        id: &record.id,
        title: record.title.text(language),
        description: record.description.text(language),
        url: expand_url(&record.url, language),
        icon: Icon::from_name(&record.icon),
        tags: &record.tags,
        disabled: record.disabled,
        disabled_reason,
    }
}

/// Projects all project records, keeping their order.
pub fn project(records: &[ProjectRecord], language: Language) -> Vec<ProjectView<'_>> {
    records.iter().map(|record| project_one(record, language)).collect()
}

/// Splits a description into bullet lines: blank lines are dropped, a single
/// leading `"- "` is removed, and the rest is trimmed.
pub fn bullet_lines(description: &str) -> Vec<&str> {
    description
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.strip_prefix("- ").unwrap_or(line).trim())
        .collect()
}

pub fn project_experience_one(record: &ExperienceRecord, language: Language) -> ExperienceView<'_> {
    let start = format_raw_month_year(&record.start_date, language);
    let end = match record.end_date() {
        Some(raw) => format_raw_month_year(raw, language),
        None => t("currentlyWorking", language).to_string(),
    };

    ExperienceView {
        id: &record.id,
        position: record.position.text(language),
        company: record.company.text(language),
        period: format!("{start} - {end}"),
        is_current: record.is_current(),
        tags: &record.tags,
        bullets: bullet_lines(record.description.text(language)),
    }
}

/// Projects all experience records, keeping their order.
pub fn project_experience(records: &[ExperienceRecord], language: Language) -> Vec<ExperienceView<'_>> {
    records
        .iter()
        .map(|record| project_experience_one(record, language))
        .collect()
}
