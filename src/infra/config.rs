//! # Site Configuration Module / 站点配置模块
//!
//! Optional `inne.toml` with the locations of the content documents, the
//! output directory and the preference store. Every field has a default,
//! so an empty or missing file is a valid configuration.
//!
//! 可选的 `inne.toml`，描述内容文档位置、输出目录和偏好存储路径。
//! 每个字段都有默认值，因此空文件或缺失文件都是合法配置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "inne.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the configuration documents.
    pub content_dir: PathBuf,
    /// File name of the projects document inside `content_dir`.
    pub projects_document: String,
    /// File name of the experience document inside `content_dir`.
    pub experience_document: String,
    /// Where `render` writes the static pages.
    pub output_dir: PathBuf,
    /// Preference store file. `~` is expanded.
    pub store_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            projects_document: "projects.yaml".to_string(),
            experience_document: "experience.yaml".to_string(),
            output_dir: PathBuf::from("dist"),
            store_path: "~/.config/inne-space/preferences.toml".to_string(),
        }
    }
}

impl SiteConfig {
    /// Loads the configuration.
    ///
    /// With an explicit path the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is used if present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The preference store path with `~` and environment variables expanded.
    pub fn resolved_store_path(&self) -> PathBuf {
        expand_path(&self.store_path)
    }
}

/// Expands `~` and `$VAR` in a user-supplied path. Unknown variables leave
/// the path untouched.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}
