//! # Projection Unit Tests / 投影单元测试
//!
//! Projects and experience records seen in one language: URL expansion,
//! disabled reasons, icons, bullet lines and periods.

mod common;

use common::{experience, project, same};
use inne_space::core::calendar::{format_raw_month_year, YearMonth};
use inne_space::core::language::Language;
use inne_space::core::page::PageView;
use inne_space::core::projection::{
    bullet_lines, expand_url, project_experience, project_experience_one, project_one, Icon,
};
use inne_space::preferences::{Preferences, Theme};

#[cfg(test)]
mod project_tests {
    use super::*;

    #[test]
    fn test_url_placeholder_is_expanded() {
        let record = project("blog", "https://blog.inne.space/{language}/posts");
        let view = project_one(&record, Language::Uk);
        assert_eq!(view.url, "https://blog.inne.space/uk/posts");
        assert_eq!(view.title, "Блог");
        assert_eq!(view.description, "Дописи");
    }

    #[test]
    fn test_every_placeholder_occurrence_is_replaced() {
        assert_eq!(
            expand_url("https://x.dev/{language}?hl={language}", Language::Ru),
            "https://x.dev/ru?hl=ru"
        );
        assert_eq!(expand_url("https://x.dev/", Language::En), "https://x.dev/");
    }

    #[test]
    fn test_disabled_reason_only_when_non_empty() {
        let mut record = project("bot", "https://t.me/inne_dev");
        record.disabled = true;
        record.disabled_reason.uk = "На паузі".to_string();

        assert_eq!(project_one(&record, Language::En).disabled_reason, None);
        assert_eq!(project_one(&record, Language::Uk).disabled_reason, Some("На паузі"));
        assert!(project_one(&record, Language::En).disabled);
    }

    #[test]
    fn test_enabled_project_hides_reason() {
        let mut record = project("blog", "https://blog.inne.space");
        record.disabled_reason = same("unused");
        assert_eq!(project_one(&record, Language::En).disabled_reason, None);
    }

    #[test]
    fn test_icons_resolve_by_exact_name() {
        assert_eq!(Icon::from_name("Globe"), Some(Icon::Globe));
        assert_eq!(Icon::from_name("Bot"), Some(Icon::Bot));
        assert_eq!(Icon::from_name("MessageSquare"), Some(Icon::MessageSquare));
        assert_eq!(Icon::from_name("globe"), None);
        assert_eq!(Icon::from_name("Rocket"), None);

        let mut record = project("blog", "https://blog.inne.space");
        record.icon = "Rocket".to_string();
        assert_eq!(project_one(&record, Language::En).icon, None);
    }
}

#[cfg(test)]
mod experience_tests {
    use super::*;

    #[test]
    fn test_bullet_lines() {
        assert_eq!(
            bullet_lines("- First\n\n   \n- Second  \nThird\n-No space"),
            vec!["First", "Second", "Third", "-No space"]
        );
        assert!(bullet_lines("").is_empty());
    }

    #[test]
    fn test_only_one_marker_is_removed() {
        assert_eq!(bullet_lines("- - nested"), vec!["- nested"]);
    }

    #[test]
    fn test_closed_period() {
        let record = experience("a", "2021-09", Some("2023-02"));
        let view = project_experience_one(&record, Language::En);
        assert_eq!(view.period, "September 2021 - February 2023");
        assert!(!view.is_current);
        assert_eq!(view.bullets, vec!["Built services", "Wrote tests"]);
    }

    #[test]
    fn test_ongoing_period_uses_translation() {
        let record = experience("a", "2023-03", None);
        let en = project_experience_one(&record, Language::En);
        assert_eq!(en.period, "March 2023 - Currently working");
        assert!(en.is_current);

        let ru = project_experience_one(&record, Language::Ru);
        assert_eq!(ru.period, "март 2023 - Работаю до сих пор");
        assert_eq!(ru.position, "Разработчик");
    }

    #[test]
    fn test_unparseable_date_is_shown_raw() {
        assert_eq!(format_raw_month_year("soon", Language::Uk), "soon");
        let record = experience("a", "soon", Some("2020-01"));
        let view = project_experience_one(&record, Language::En);
        assert_eq!(view.period, "soon - January 2020");
    }

    #[test]
    fn test_order_is_kept() {
        let records = [
            experience("first", "2020-01", Some("2020-02")),
            experience("second", "2019-01", Some("2019-02")),
        ];
        let ids: Vec<_> = project_experience(&records, Language::En)
            .iter()
            .map(|view| view.id)
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    fn prefs(language: Language, theme: Theme) -> Preferences {
        Preferences { language, theme }
    }

    #[test]
    fn test_summary_only_with_experience() {
        let now = YearMonth::new(2021, 6).unwrap();
        let page = PageView::build(prefs(Language::En, Theme::Dark), &[], &[], now);
        assert!(page.summary.is_none());

        let records = [experience("a", "2020-01", Some("2020-12"))];
        let page = PageView::build(prefs(Language::Uk, Theme::Dark), &[], &records, now);
        let summary = page.summary.unwrap();
        assert_eq!(summary.label, "Загальний досвід");
        assert_eq!(summary.duration, "1 рік");
    }

    #[test]
    fn test_switcher_marks_active_language() {
        let now = YearMonth::new(2021, 6).unwrap();
        let page = PageView::build(prefs(Language::Ru, Theme::Light), &[], &[], now);
        let active: Vec<_> = page
            .languages
            .iter()
            .filter(|choice| choice.active)
            .map(|choice| choice.label())
            .collect();
        assert_eq!(active, vec!["RU"]);
        assert_eq!(page.languages.len(), 3);
        assert_eq!(page.theme_label, "Светлая");
        assert_eq!(page.contacts.len(), 4);
    }
}
