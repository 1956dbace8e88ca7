//! # Console Reporting Module / 控制台报告模块
//!
//! Prints a projected page to the terminal with colors: hero, total
//! experience, projects, experience and contacts.
//!
//! 在终端中以彩色打印投影后的页面：首屏、总经验、项目、经历和联系方式。

use colored::*;

use crate::core::page::PageView;
use crate::core::projection::{ExperienceView, ProjectView};

/// Prints the whole page.
///
/// # Output Format / 输出格式
/// ```text
/// Inne | Andy
/// Backend Developer
/// Working on creating and maintaining web services, ...
/// Total experience: 3 years 2 months
/// ✓ Looking for new opportunities — reach me via the Contacts section
///
/// --- Projects ---
///   🌐 Blog [Rust, Go]
///      https://blog.inne.space/en
///      ...
/// ```
pub fn print_page(page: &PageView<'_>) {
    println!("{}", page.heading.bold());
    println!("{}", page.role.cyan());
    println!("{}", page.intro.dimmed());

    if let Some(summary) = &page.summary {
        println!("{}: {}", summary.label.bold(), summary.duration);
        println!("{}", format!("✓ {}", summary.job_search_status).green());
    }

    println!("\n{}", format!("--- {} ---", page.projects_label).bold());
    for project in &page.projects {
        print_project(project);
    }

    println!("\n{}", format!("--- {} ---", page.experience_label).bold());
    for entry in &page.experience {
        print_experience(entry);
    }

    println!("\n{}", format!("--- {} ---", page.contacts_label).bold());
    for contact in page.contacts {
        println!("  - {:<10} {}", contact.label, contact.url.blue());
    }

    println!("\n{}", page.footer.dimmed());
}

fn print_project(project: &ProjectView<'_>) {
    let glyph = project.icon.map(|icon| icon.glyph()).unwrap_or(" ");
    let tags = if project.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", project.tags.join(", "))
    };

    if project.disabled {
        println!("  {} {}{}", glyph, project.title.dimmed(), tags.dimmed());
    } else {
        println!("  {} {}{}", glyph, project.title.bold(), tags.dimmed());
        println!("     {}", project.url.blue());
    }
    if let Some(reason) = project.disabled_reason {
        println!("     {}", reason.yellow());
    }
    println!("     {}", project.description);
}

fn print_experience(entry: &ExperienceView<'_>) {
    println!("  {} · {}", entry.position.bold(), entry.company);
    let period = if entry.is_current {
        entry.period.green()
    } else {
        entry.period.dimmed()
    };
    println!("     {}", period);
    if !entry.tags.is_empty() {
        println!("     {}", format!("[{}]", entry.tags.join(", ")).dimmed());
    }
    for line in &entry.bullets {
        println!("     • {}", line);
    }
}
