//! # Calendar Module / 日历模块
//!
//! Year+month dates, parsing of the raw date strings found in experience
//! records, and the localized "Month YYYY" label.
//!
//! 年月粒度的日期、经历记录中原始日期字符串的解析，以及本地化的“月份 年份”标签。

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::core::language::{Language, Localized};

/// Nominative (standalone) month names, January first.
static MONTH_NAMES: Localized<[&str; 12]> = Localized {
    en: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    uk: [
        "січень", "лютий", "березень", "квітень", "травень", "червень", "липень", "серпень",
        "вересень", "жовтень", "листопад", "грудень",
    ],
    ru: [
        "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
        "октябрь", "ноябрь", "декабрь",
    ],
};

/// A calendar date at month granularity. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Builds a `YearMonth`, returning `None` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The current month on the local clock.
    pub fn now() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses the date formats accepted in configuration documents:
    /// `YYYY-MM`, `YYYY-MM-DD` and full RFC 3339 timestamps.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(Self::from_date(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
            return Some(Self::from_date(date));
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| Self::from_date(timestamp.date_naive()))
    }

    /// Number of months from `start` to `self`, counting both ends.
    /// A range that starts and ends in the same month is one month long.
    pub fn inclusive_months_since(self, start: YearMonth) -> i64 {
        (i64::from(self.year) - i64::from(start.year)) * 12
            + (i64::from(self.month) - i64::from(start.month))
            + 1
    }

    pub fn month_name(self, language: Language) -> &'static str {
        MONTH_NAMES.get(language)[(self.month - 1) as usize]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Formats a date as "<month name> <year>", e.g. "March 2023",
/// "березень 2023" or "март 2023".
pub fn format_month_year(date: YearMonth, language: Language) -> String {
    format!("{} {}", date.month_name(language), date.year)
}

/// Formats a raw record date. A string that does not parse is echoed back
/// unchanged so the page still shows what the document said.
pub fn format_raw_month_year(raw: &str, language: Language) -> String {
    match YearMonth::parse(raw) {
        Some(date) => format_month_year(date, language),
        None => raw.to_string(),
    }
}
