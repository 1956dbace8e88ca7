//! # Document Loading Module / 文档加载模块
//!
//! Reads the `projects` and `experience` documents from a content directory.
//! The format follows the file extension (`.yaml`/`.yml` or `.toml`).
//!
//! Loading is best effort: a document that is missing or does not parse is
//! logged and yields an empty collection, so the rest of the page still renders.
//!
//! 从内容目录读取 `projects` 和 `experience` 文档，格式由扩展名决定。
//! 加载失败时记录日志并返回空集合，页面其余部分仍可渲染。

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::core::models::{Content, ExperienceDocument, ProjectsDocument};

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Some(DocumentFormat::Yaml),
            Some("toml") => Some(DocumentFormat::Toml),
            _ => None,
        }
    }
}

/// Parses a document body in the given format.
pub fn parse_document<T: DeserializeOwned>(text: &str, format: DocumentFormat) -> Result<T> {
    let document = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        DocumentFormat::Toml => toml::from_str(text)?,
    };
    Ok(document)
}

/// A directory the documents are fetched from.
#[derive(Debug, Clone)]
pub struct ContentSource {
    root: PathBuf,
}

impl ContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Reads and parses one document.
    pub async fn fetch<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.path_of(name);
        let Some(format) = DocumentFormat::from_path(&path) else {
            bail!("Unsupported document format: {}", path.display());
        };
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        parse_document(&text, format)
            .with_context(|| format!("Failed to parse document: {}", path.display()))
    }

    /// Like [`fetch`](Self::fetch), but logs a failure and returns `None`.
    pub async fn fetch_or_log<T: DeserializeOwned>(&self, name: &str, what: &str) -> Option<T> {
        match self.fetch(name).await {
            Ok(document) => {
                debug!(document = name, "loaded {what}");
                Some(document)
            }
            Err(err) => {
                error!(document = name, "Error loading {what}: {err:#}");
                None
            }
        }
    }

    /// Loads both documents concurrently. Either one may come back empty.
    pub async fn load_content(&self, projects_document: &str, experience_document: &str) -> Content {
        let (projects, experience) = tokio::join!(
            self.fetch_or_log::<ProjectsDocument>(projects_document, "projects"),
            self.fetch_or_log::<ExperienceDocument>(experience_document, "experience"),
        );

        Content {
            projects: projects.map(|doc| doc.projects).unwrap_or_default(),
            experience: experience.map(|doc| doc.experience).unwrap_or_default(),
        }
    }
}
