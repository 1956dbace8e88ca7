//! # Preference File Store / 偏好文件存储
//!
//! A [`KeyValueStore`] kept in a flat TOML table of strings. Every `set`
//! rewrites the file before returning.
//!
//! 以扁平 TOML 字符串表保存的键值存储。每次 `set` 都会在返回前重写文件。

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::preferences::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; so is a
    /// file that is not a table of strings, which is logged and overwritten
    /// on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preference store: {}", path.display()))?;
            toml::from_str(&text).unwrap_or_else(|err| {
                warn!(path = %path.display(), "Ignoring malformed preference store: {err}");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create preference directory: {}", parent.display())
                })?;
            }
        }
        let text = toml::to_string(&self.entries)?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write preference store: {}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.toml")).unwrap();
        assert_eq!(store.get("inne-theme"), None);
    }

    #[test]
    fn malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "inne-theme = [1, 2").unwrap();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("inne-theme"), None);
    }

    #[test]
    fn writes_create_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.toml");
        let mut store = FileStore::open(&path).unwrap();
        store.set("inne-language", "uk").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("inne-language").as_deref(), Some("uk"));
    }
}
