//! # Experience Duration Module / 工作经验时长模块
//!
//! Sums the months of every experience record and renders the total as a
//! localized "N years M months" phrase.
//!
//! The month count of a record includes both its first and its last month,
//! and overlapping records are simply added up. Slavic plural forms follow a
//! simplified rule: one form for exactly 1, a second for 2 to 4 and a third
//! for everything else, including 11 to 14 and 21, 22, ...
//!
//! 对所有经历记录的月数求和，并将总数渲染为本地化短语。
//! 每条记录的月数包含首尾两个月，重叠的记录直接相加。

use crate::core::calendar::YearMonth;
use crate::core::language::Language;
use crate::core::models::ExperienceRecord;

/// A month total. Becomes `NotANumber` as soon as one record carries a date
/// that does not parse, and then renders as the literal `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthTotal {
    Months(i64),
    NotANumber,
}

impl MonthTotal {
    /// Splits the total into `(years, months)`. The years are floored and the
    /// months keep the sign of the total.
    pub fn split(self) -> (Count, Count) {
        match self {
            MonthTotal::Months(total) => (
                Count::Value(total.div_euclid(12)),
                Count::Value(total % 12),
            ),
            MonthTotal::NotANumber => (Count::NotANumber, Count::NotANumber),
        }
    }
}

/// One rendered quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Value(i64),
    NotANumber,
}

impl Count {
    fn is_positive(self) -> bool {
        matches!(self, Count::Value(value) if value > 0)
    }

    fn is_one(self) -> bool {
        self == Count::Value(1)
    }

    fn is_few(self) -> bool {
        matches!(self, Count::Value(value) if value > 1 && value < 5)
    }

    fn is_plural(self) -> bool {
        matches!(self, Count::Value(value) if value > 1)
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Count::Value(value) => write!(f, "{value}"),
            Count::NotANumber => f.write_str("NaN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Year,
    Month,
}

/// Noun forms for 1, for 2..=4, and for everything else.
struct PluralForms {
    one: &'static str,
    few: &'static str,
    many: &'static str,
}

const UK_YEARS: PluralForms = PluralForms { one: "рік", few: "роки", many: "років" };
const UK_MONTHS: PluralForms = PluralForms { one: "місяць", few: "місяці", many: "місяців" };
const RU_YEARS: PluralForms = PluralForms { one: "год", few: "года", many: "лет" };
const RU_MONTHS: PluralForms = PluralForms { one: "месяц", few: "месяца", many: "месяцев" };

impl PluralForms {
    fn select(&self, count: Count) -> &'static str {
        if count.is_one() {
            self.one
        } else if count.is_few() {
            self.few
        } else {
            self.many
        }
    }
}

/// Inclusive month count of a single record, with `now` standing in for an
/// ongoing position. `None` when a date does not parse.
pub fn record_months(record: &ExperienceRecord, now: YearMonth) -> Option<i64> {
    let start = YearMonth::parse(&record.start_date)?;
    let end = match record.end_date() {
        Some(raw) => YearMonth::parse(raw)?,
        None => now,
    };
    Some(end.inclusive_months_since(start))
}

/// Sums the inclusive month counts of all records without merging overlaps.
pub fn total_months(records: &[ExperienceRecord], now: YearMonth) -> MonthTotal {
    records
        .iter()
        .try_fold(0i64, |total, record| {
            record_months(record, now).map(|months| total + months)
        })
        .map_or(MonthTotal::NotANumber, MonthTotal::Months)
}

/// Renders a month total as a localized phrase.
///
/// Both parts are shown when both are positive, years alone when only the
/// years are, and otherwise the months alone (so an empty total reads
/// "0 month" / "0 місяців" / "0 месяцев").
pub fn format_duration(total: MonthTotal, language: Language) -> String {
    let (years, months) = total.split();
    if years.is_positive() && months.is_positive() {
        format!(
            "{} {}",
            quantity(years, Unit::Year, language),
            quantity(months, Unit::Month, language)
        )
    } else if years.is_positive() {
        quantity(years, Unit::Year, language)
    } else {
        quantity(months, Unit::Month, language)
    }
}

/// Total experience across `records` as a localized phrase.
pub fn total_experience(records: &[ExperienceRecord], language: Language, now: YearMonth) -> String {
    format_duration(total_months(records, now), language)
}

fn quantity(count: Count, unit: Unit, language: Language) -> String {
    let forms = match (language, unit) {
        (Language::En, _) => {
            let noun = if unit == Unit::Year { "year" } else { "month" };
            let suffix = if count.is_plural() { "s" } else { "" };
            return format!("{count} {noun}{suffix}");
        }
        (Language::Uk, Unit::Year) => &UK_YEARS,
        (Language::Uk, Unit::Month) => &UK_MONTHS,
        (Language::Ru, Unit::Year) => &RU_YEARS,
        (Language::Ru, Unit::Month) => &RU_MONTHS,
    };
    format!("{count} {}", forms.select(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_sign_of_remainder() {
        assert_eq!(
            MonthTotal::Months(-3).split(),
            (Count::Value(-1), Count::Value(-3))
        );
        assert_eq!(
            MonthTotal::Months(25).split(),
            (Count::Value(2), Count::Value(1))
        );
    }

    #[test]
    fn zero_months_uses_the_month_branch() {
        assert_eq!(format_duration(MonthTotal::Months(0), Language::En), "0 month");
        assert_eq!(format_duration(MonthTotal::Months(0), Language::Uk), "0 місяців");
        assert_eq!(format_duration(MonthTotal::Months(0), Language::Ru), "0 месяцев");
    }

    #[test]
    fn not_a_number_renders_literally() {
        assert_eq!(format_duration(MonthTotal::NotANumber, Language::En), "NaN month");
        assert_eq!(format_duration(MonthTotal::NotANumber, Language::Ru), "NaN месяцев");
    }
}
