//! # Core Module / 核心模块
//!
//! This module contains the presentation-independent logic of the portfolio:
//! languages and localized values, the static translation table, preference
//! resolution, record projection, the total-experience calculator and the
//! page assembler that ties them together.
//!
//! 此模块包含与展示无关的核心逻辑：语言与本地化值、静态翻译表、偏好解析、
//! 记录投影、总工作经验计算以及将它们组合起来的页面组装器。

pub mod calendar;
pub mod duration;
pub mod language;
pub mod models;
pub mod page;
pub mod preferences;
pub mod projection;
pub mod translations;

// Re-exports
pub use language::{Language, Localized, LocalizedString};
pub use models::{Content, ExperienceRecord, ProjectRecord};
pub use page::PageView;
pub use preferences::{Preferences, Theme};
pub use translations::t;
