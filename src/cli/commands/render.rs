//! # Render Command Module / 渲染命令模块
//!
//! This module implements the `render` command, which loads the content
//! documents and writes the static site for every language.
//!
//! 此模块实现 `render` 命令：加载内容文档并为每种语言写出静态站点。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::cli::AppContext;
use crate::core::calendar::YearMonth;
use crate::core::models::Content;
use crate::infra::documents::ContentSource;
use crate::infra::t;
use crate::reporting::write_site;

/// Loads the documents from `content_dir` (or the configured directory).
/// Failures are logged inside and leave the affected collection empty.
pub async fn load_content(ctx: &AppContext, content_dir: Option<PathBuf>) -> Content {
    let root = content_dir.unwrap_or_else(|| ctx.config.content_dir.clone());
    let source = ContentSource::new(root);
    source
        .load_content(&ctx.config.projects_document, &ctx.config.experience_document)
        .await
}

/// Executes the render command.
///
/// # Arguments
/// * `ctx` - Configuration, hints and preference store location
/// * `content_dir` - Optional override of the content directory
/// * `out_dir` - Optional override of the output directory
pub async fn execute(
    ctx: &AppContext,
    content_dir: Option<PathBuf>,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let preferences = ctx.open_preferences()?.preferences();

    let source_dir = content_dir.unwrap_or_else(|| ctx.config.content_dir.clone());
    println!(
        "{}",
        t!("render.loading", locale = &ctx.locale, path = source_dir.display())
    );
    let content = load_content(ctx, Some(source_dir)).await;
    if content.projects.is_empty() && content.experience.is_empty() {
        println!("{}", t!("render.empty_content", locale = &ctx.locale).yellow());
    }

    let out_dir = out_dir.unwrap_or_else(|| ctx.config.output_dir.clone());
    let written = write_site(&out_dir, preferences, &content, YearMonth::now())?;

    for path in &written {
        println!(
            "{}",
            t!("render.written", locale = &ctx.locale, path = path.display()).dimmed()
        );
    }
    println!(
        "{}",
        t!(
            "render.done",
            locale = &ctx.locale,
            count = written.len(),
            path = out_dir.display(),
            lang = preferences.language.code(),
            theme = preferences.theme.as_str()
        )
        .green()
        .bold()
    );

    Ok(())
}
