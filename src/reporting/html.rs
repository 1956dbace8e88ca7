//! # HTML Rendering Module / HTML 渲染模块
//!
//! Renders a [`PageView`] into a standalone HTML document and writes the
//! static site: one page per language under `<out>/<code>/index.html` plus a
//! root `index.html` that redirects to the active language.
//!
//! 将 [`PageView`] 渲染为独立的 HTML 文档，并写出静态站点：
//! 每种语言一个页面，外加一个重定向到当前语言的根 `index.html`。

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::calendar::YearMonth;
use crate::core::language::Language;
use crate::core::models::Content;
use crate::core::page::PageView;
use crate::core::preferences::Preferences;
use crate::core::projection::{ExperienceView, ProjectView};

/// Embedded CSS styles for the page / 页面的嵌入式 CSS 样式
const SITE_STYLE: &str = include_str!("assets/site.css");

/// Renders the full document for one page.
pub fn render_page(page: &PageView<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(page.language.html_tag()) class=[page.theme.is_dark().then_some("dark")] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
                style { (PreEscaped(SITE_STYLE)) }
            }
            body {
                (render_header(page))
                main.container {
                    (render_hero(page))
                    section id="projects" {
                        h2 { (page.projects_label) }
                        div.grid {
                            @for project in &page.projects {
                                (render_project(project))
                            }
                        }
                    }
                    section id="experience" {
                        h2 { (page.experience_label) }
                        div.grid {
                            @for entry in &page.experience {
                                (render_experience(entry))
                            }
                        }
                    }
                    section id="contacts" {
                        h2 { (page.contacts_label) }
                        div.contacts {
                            @for contact in page.contacts {
                                a href=(contact.url) target="_blank" rel="noopener noreferrer" {
                                    (contact.label)
                                }
                            }
                        }
                    }
                }
                footer.site {
                    div.container { (page.footer) }
                }
            }
        }
    }
}

fn render_header(page: &PageView<'_>) -> Markup {
    html! {
        header.site {
            div.container {
                div.brand {
                    span.logo { "I" }
                    span { (page.brand) }
                }
                nav.switcher {
                    @for choice in &page.languages {
                        a.active[choice.active]
                            href={ "../" (choice.language.code()) "/" }
                            hreflang=(choice.language.code()) {
                            (choice.label())
                        }
                    }
                    span.theme-label { (page.theme_label) }
                }
            }
        }
    }
}

fn render_hero(page: &PageView<'_>) -> Markup {
    html! {
        section id="hero" {
            h1 { (page.heading) }
            h2.muted { (page.role) }
            p.muted { (page.intro) }
            @if let Some(summary) = &page.summary {
                div.muted {
                    strong { (summary.label) ":" }
                    " " (summary.duration)
                }
                p.status { "✓ " (summary.job_search_status) }
            }
        }
    }
}

fn render_project(project: &ProjectView<'_>) -> Markup {
    html! {
        article.card.project data-id=(project.id) {
            div.card-head {
                div.card-title {
                    div.icon {
                        @if let Some(icon) = project.icon {
                            span title=(icon.name()) { (icon.glyph()) }
                        }
                    }
                    div {
                        h3 { (project.title) }
                        div.tags {
                            @for tag in project.tags {
                                span.tag { (tag) }
                            }
                        }
                    }
                }
                @if project.disabled {
                    span.arrow.disabled aria-disabled="true" { "→" }
                } @else {
                    a.arrow href=(project.url) { "→" }
                }
            }
            @if let Some(reason) = project.disabled_reason {
                div.reason { p { (reason) } }
            }
            p.muted { (project.description) }
        }
    }
}

fn render_experience(entry: &ExperienceView<'_>) -> Markup {
    html! {
        article.card.experience data-id=(entry.id) {
            h3 { (entry.position) }
            div.muted { (entry.company) }
            div.muted { small { (entry.period) } }
            div.tags {
                @for tag in entry.tags {
                    span.tag { (tag) }
                }
            }
            ul.bullets {
                @for line in &entry.bullets {
                    li { (line) }
                }
            }
        }
    }
}

/// A tiny page that forwards `/` to the active language.
pub fn render_redirect(language: Language) -> Markup {
    let target = format!("./{}/", language.code());
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href=(target);
                title { "inne.space" }
            }
            body {
                a href=(target) { (target) }
            }
        }
    }
}

/// Writes every language page and the root redirect into `out_dir`, using
/// the current theme for all pages. Returns the written files.
pub fn write_site(
    out_dir: &Path,
    preferences: Preferences,
    content: &Content,
    now: YearMonth,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(Language::ALL.len() + 1);

    for language in Language::ALL {
        let page = PageView::build(
            Preferences {
                language,
                theme: preferences.theme,
            },
            &content.projects,
            &content.experience,
            now,
        );
        let dir = out_dir.join(language.code());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        let path = dir.join("index.html");
        write_markup(&path, render_page(&page))?;
        written.push(path);
    }

    let root = out_dir.join("index.html");
    write_markup(&root, render_redirect(preferences.language))?;
    written.push(root);

    Ok(written)
}

fn write_markup(path: &Path, markup: Markup) -> Result<()> {
    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page: {}", path.display()))?;
    debug!(path = %path.display(), "wrote page");
    Ok(())
}
