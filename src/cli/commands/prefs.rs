//! # Preference Commands / 偏好命令
//!
//! `lang` and `theme`: change one preference and persist it immediately.

use anyhow::{bail, Error, Result};
use colored::*;
use std::str::FromStr;

use crate::cli::AppContext;
use crate::core::language::Language;
use crate::core::preferences::Theme;
use crate::infra::t;

/// Argument of the `theme` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Set(Theme),
    Toggle,
}

impl FromStr for ThemeChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(ThemeChoice::Set(Theme::Light)),
            "dark" => Ok(ThemeChoice::Set(Theme::Dark)),
            "toggle" => Ok(ThemeChoice::Toggle),
            other => bail!("Unknown theme: {other}"),
        }
    }
}

/// Saves `language` as the display language.
pub fn set_language(ctx: &AppContext, language: Language) -> Result<()> {
    let mut controller = ctx.open_preferences()?;
    controller.set_language(language)?;

    println!(
        "{}",
        t!(
            "prefs.language_saved",
            locale = &ctx.locale,
            lang = language.code(),
            path = ctx.store_path.display()
        )
        .green()
    );
    Ok(())
}

/// Saves a theme, or flips the current one.
pub fn set_theme(ctx: &AppContext, choice: ThemeChoice) -> Result<()> {
    let mut controller = ctx.open_preferences()?;
    let theme = match choice {
        ThemeChoice::Set(theme) => {
            controller.set_theme(theme)?;
            theme
        }
        ThemeChoice::Toggle => controller.toggle_theme()?,
    };

    println!(
        "{}",
        t!(
            "prefs.theme_saved",
            locale = &ctx.locale,
            theme = theme.as_str(),
            path = ctx.store_path.display()
        )
        .green()
    );
    Ok(())
}
