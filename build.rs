//! # Build Script for the Translation Table
//!
//! Reads `i18n/strings.toml`, where every key holds one `en`/`uk`/`ru`
//! triple, and generates a sorted static slice of `(key, Localized<&str>)`
//! pairs that `core::translations` includes at compile time.
//!
//! The build fails when an entry misses one of the three languages or carries
//! an empty string, so the lookup never has to deal with a partial entry.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// One row of the table as written in the TOML source.
/// Unknown languages are rejected so a typo such as `ua = ...` cannot slip through.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Entry {
    en: String,
    uk: String,
    ru: String,
}

/// The whole file: key -> entry. `BTreeMap` keeps the keys sorted, which the
/// lookup relies on for binary search.
#[derive(Debug, Deserialize)]
struct Table(BTreeMap<String, Entry>);

fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest_path = Path::new(&out_dir).join("translations.rs");

    let source_path = Path::new("i18n").join("strings.toml");
    let content = fs::read_to_string(&source_path)?;
    let table: Table = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", source_path, e));

    let mut code = String::new();
    writeln!(
        &mut code,
        "pub(crate) static TRANSLATIONS: &[(&str, Localized<&'static str>)] = &["
    )
    .unwrap();

    for (key, entry) in &table.0 {
        for (lang, value) in [("en", &entry.en), ("uk", &entry.uk), ("ru", &entry.ru)] {
            if value.trim().is_empty() {
                panic!("Translation '{}' has an empty '{}' value", key, lang);
            }
        }
        // `{:?}` on a str yields a valid, escaped Rust string literal.
        writeln!(
            &mut code,
            "    ({:?}, Localized {{ en: {:?}, uk: {:?}, ru: {:?} }}),",
            key, entry.en, entry.uk, entry.ru
        )
        .unwrap();
    }
    writeln!(&mut code, "];").unwrap();

    fs::write(&dest_path, code)?;
    println!("cargo:rerun-if-changed=i18n/strings.toml");

    Ok(())
}
