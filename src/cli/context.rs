//! Per-invocation state shared by the subcommands: site configuration,
//! system hints and the location of the preference store.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::preferences::PreferenceController;
use crate::infra::config::{expand_path, SiteConfig};
use crate::infra::store::FileStore;
use crate::infra::system::SystemHints;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: SiteConfig,
    pub hints: SystemHints,
    pub store_path: PathBuf,
    /// Locale of the tool's own messages.
    pub locale: String,
}

impl AppContext {
    /// Loads the configuration and detects the system hints. Explicit flags
    /// win over the configuration file and over detection.
    pub fn new(
        config_path: Option<&Path>,
        store_override: Option<&str>,
        locale_hint: Option<String>,
        prefers_dark: Option<bool>,
        locale: String,
    ) -> Result<Self> {
        let config = SiteConfig::load(config_path)?;
        let store_path = match store_override {
            Some(raw) => expand_path(raw),
            None => config.resolved_store_path(),
        };
        let hints = SystemHints::detect().with_overrides(locale_hint, prefers_dark);

        Ok(Self {
            config,
            hints,
            store_path,
            locale,
        })
    }

    /// Opens the preference store and resolves the startup preferences.
    pub fn open_preferences(&self) -> Result<PreferenceController<FileStore>> {
        let store = FileStore::open(&self.store_path)?;
        Ok(PreferenceController::load(
            store,
            &self.hints.locale,
            self.hints.prefers_dark,
        ))
    }
}
