//! # Command-Line Interface / 命令行接口
//!
//! Builds the clap command tree with localized help, turns the global flags
//! into an [`AppContext`] and dispatches to the subcommands.

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::language::Language;
use crate::infra::logging::init_logging;
use crate::infra::t;

pub mod commands;
pub mod context;

pub use context::AppContext;

/// Pre-parses the command line arguments to find the UI language.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--ui-lang <VALUE>` argument.
fn pre_parse_ui_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|arg| arg == "--ui-lang")
        .and_then(|pos| args.get(pos + 1).cloned())
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("inne-space")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("ui-lang")
                .long("ui-lang")
                .help(t!("cli_ui_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help(t!("arg_store", locale = locale).to_string())
                .value_name("STORE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("locale-hint")
                .long("locale-hint")
                .help(t!("arg_locale_hint", locale = locale).to_string())
                .value_name("LOCALE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("prefers-dark")
                .long("prefers-dark")
                .help(t!("arg_prefers_dark", locale = locale).to_string())
                .global(true)
                .conflicts_with("prefers-light")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prefers-light")
                .long("prefers-light")
                .help(t!("arg_prefers_light", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("render")
                .about(t!("cmd_render_about", locale = locale).to_string())
                .arg(content_arg(locale))
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .help(t!("arg_out", locale = locale).to_string())
                        .value_name("OUT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("show")
                .about(t!("cmd_show_about", locale = locale).to_string())
                .arg(content_arg(locale))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("arg_json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("lang")
                .about(t!("cmd_lang_about", locale = locale).to_string())
                .arg(
                    Arg::new("language")
                        .help(t!("arg_language_value", locale = locale).to_string())
                        .value_name("LANGUAGE")
                        .required(true)
                        .value_parser(["en", "uk", "ru"]),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about(t!("cmd_theme_about", locale = locale).to_string())
                .arg(
                    Arg::new("theme")
                        .help(t!("arg_theme_value", locale = locale).to_string())
                        .value_name("THEME")
                        .required(true)
                        .value_parser(["light", "dark", "toggle"]),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help(t!("arg_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn content_arg(locale: &str) -> Arg {
    Arg::new("content")
        .long("content")
        .help(t!("arg_content", locale = locale).to_string())
        .value_name("CONTENT")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

/// Reads the global flags into an [`AppContext`].
fn context_from_matches(matches: &ArgMatches, locale: String) -> Result<AppContext> {
    let prefers_dark = if matches.get_flag("prefers-dark") {
        Some(true)
    } else if matches.get_flag("prefers-light") {
        Some(false)
    } else {
        None
    };

    AppContext::new(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        matches.get_one::<String>("store").map(String::as_str),
        matches.get_one::<String>("locale-hint").cloned(),
        prefers_dark,
        locale,
    )
}

pub async fn run() -> Result<()> {
    // Pre-parse the UI language and initialize i18n first.
    let requested = pre_parse_ui_language();
    let locale = crate::init_ui_locale(requested.as_deref());

    let matches = build_cli(&locale).get_matches();
    init_logging(matches.get_flag("verbose"));

    let ctx = context_from_matches(&matches, locale)?;

    match matches.subcommand() {
        Some(("render", sub)) => {
            let content = sub.get_one::<PathBuf>("content").cloned();
            let out = sub.get_one::<PathBuf>("out").cloned();
            commands::render::execute(&ctx, content, out).await?;
        }
        Some(("show", sub)) => {
            let content = sub.get_one::<PathBuf>("content").cloned();
            let json = sub.get_flag("json");
            commands::show::execute(&ctx, content, json).await?;
        }
        Some(("lang", sub)) => {
            // Restricted to valid codes by the value parser.
            let code = sub.get_one::<String>("language").map(String::as_str).unwrap_or("en");
            let language = Language::from_code(code).unwrap_or_default();
            commands::prefs::set_language(&ctx, language)?;
        }
        Some(("theme", sub)) => {
            let choice = sub.get_one::<String>("theme").map(String::as_str).unwrap_or("toggle");
            commands::prefs::set_theme(&ctx, choice.parse()?)?;
        }
        Some(("init", sub)) => {
            let dir = sub
                .get_one::<PathBuf>("dir")
                .cloned()
                .unwrap_or_else(|| ctx.config.content_dir.clone());
            let force = sub.get_flag("force");

            // Show language detection message if it was auto-detected
            if requested.is_none() {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &ctx.locale, lang = &ctx.locale)
                );
            }
            commands::init::execute(&dir, force, &ctx.locale)?;
        }
        _ => {
            // `subcommand_required` makes clap print help before we get here.
        }
    }
    Ok(())
}
