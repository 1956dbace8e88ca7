//! # Data Models Module / 数据模型模块
//!
//! Records loaded from the `projects` and `experience` configuration
//! documents. They keep every language so the page can be re-projected under
//! another language without reloading anything.
//!
//! 从 `projects` 和 `experience` 配置文档加载的记录。
//! 记录保留所有语言，因此切换语言时无需重新加载。

use serde::{Deserialize, Serialize};

use crate::core::language::LocalizedString;

/// A project card.
/// 项目卡片。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: LocalizedString,
    pub description: LocalizedString,
    /// Link target. Every `{language}` in it is replaced with the active
    /// language code when the record is projected.
    pub url: String,
    /// Symbolic icon name such as `Globe`. Unknown names render without an icon.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Shown only while `disabled` is set and the text for the active
    /// language is non-empty.
    #[serde(default)]
    pub disabled_reason: LocalizedString,
}

/// One position in the work history.
/// 工作经历中的一个职位。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub id: String,
    pub company: LocalizedString,
    pub position: LocalizedString,
    /// Newline separated bullet lines, each optionally prefixed with `- `.
    pub description: LocalizedString,
    /// Raw `YYYY-MM` or `YYYY-MM-DD`. Parsed on read, never on load.
    pub start_date: String,
    /// `None` (or an empty string) means the position is ongoing.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ExperienceRecord {
    /// The end date, treating an empty string like a missing one.
    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref().filter(|date| !date.is_empty())
    }

    pub fn is_current(&self) -> bool {
        self.end_date().is_none()
    }
}

/// Top-level shape of the `projects` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsDocument {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// Top-level shape of the `experience` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceDocument {
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
}

/// Everything loaded from the configuration documents. A document that
/// failed to load leaves its collection empty.
///
/// 从配置文档加载的全部内容。加载失败的文档对应的集合为空。
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub projects: Vec<ProjectRecord>,
    pub experience: Vec<ExperienceRecord>,
}
