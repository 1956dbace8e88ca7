//! # Show Command Module / 显示命令模块
//!
//! Prints the page in the active language, either as colored text or as JSON.

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::cli::commands::render::load_content;
use crate::cli::AppContext;
use crate::core::calendar::YearMonth;
use crate::core::page::PageView;
use crate::infra::t;
use crate::reporting::print_page;

pub async fn execute(ctx: &AppContext, content_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let preferences = ctx.open_preferences()?.preferences();
    let content = load_content(ctx, content_dir).await;
    let page = PageView::build(
        preferences,
        &content.projects,
        &content.experience,
        YearMonth::now(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!(
        "{}\n",
        t!(
            "show.preferences",
            locale = &ctx.locale,
            lang = preferences.language.code(),
            theme = preferences.theme.as_str()
        )
        .dimmed()
    );
    print_page(&page);
    Ok(())
}
