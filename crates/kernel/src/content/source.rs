//! Content sources: where CMS document snapshots come from.
//!
//! A source returns already-resolved documents (image URLs, link targets);
//! renderers never fetch anything themselves.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::model::{FooterDocument, NavbarDocument, PageDocument, normalize_path};

/// Failure to read or decode a document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A raw document together with where it came from, for schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub origin: String,
    pub value: Value,
}

impl SourceDocument {
    /// The document's `_type`, if any.
    pub fn doc_type(&self) -> Option<&str> {
        self.value.get("_type").and_then(|t| t.as_str())
    }
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn home_page(&self) -> Result<Option<PageDocument>, SourceError>;

    /// Page by slug; `/` resolves to the home page.
    async fn page(&self, slug: &str) -> Result<Option<PageDocument>, SourceError>;

    async fn navbar(&self) -> Result<Option<NavbarDocument>, SourceError>;

    async fn footer(&self) -> Result<Option<FooterDocument>, SourceError>;

    /// Every document in raw form.
    async fn documents(&self) -> Result<Vec<SourceDocument>, SourceError>;
}

/// URL path a raw page document claims, read without decoding the rest.
fn raw_page_path(value: &Value) -> String {
    let slug = value.get("slug").and_then(|slug| match slug {
        Value::String(s) => Some(s.as_str()),
        other => other.get("current").and_then(Value::as_str),
    });
    normalize_path(slug.unwrap_or("/"))
}

fn decode<T: DeserializeOwned>(origin: &str, value: Value) -> Result<T, SourceError> {
    serde_json::from_value(value).map_err(|source| SourceError::Decode {
        origin: origin.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// File snapshots
// ---------------------------------------------------------------------------

/// Reads a JSON snapshot directory:
///
/// ```text
/// content/
///   home.json
///   navbar.json
///   footer.json
///   pages/*.json
/// ```
#[derive(Debug, Clone)]
pub struct FileContentSource {
    root: PathBuf,
}

impl FileContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read one JSON file; a missing file is `Ok(None)`.
    async fn read_json(&self, path: &Path) -> Result<Option<Value>, SourceError> {
        let origin = path.display().to_string();
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %origin, "content file not found");
                return Ok(None);
            }
            Err(source) => return Err(SourceError::Io { origin, source }),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| SourceError::Decode { origin, source })
    }

    async fn read_document<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, SourceError> {
        let path = self.root.join(name);
        match self.read_json(&path).await? {
            Some(value) => decode(&path.display().to_string(), value).map(Some),
            None => Ok(None),
        }
    }

    /// Every `pages/*.json` file, sorted by file name.
    async fn page_files(&self) -> Result<Vec<PathBuf>, SourceError> {
        let dir = self.root.join("pages");
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(SourceError::Io {
                    origin: dir.display().to_string(),
                    source,
                });
            }
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|source| SourceError::Io {
            origin: dir.display().to_string(),
            source,
        })? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn home_page(&self) -> Result<Option<PageDocument>, SourceError> {
        self.read_document("home.json").await
    }

    async fn page(&self, slug: &str) -> Result<Option<PageDocument>, SourceError> {
        let wanted = normalize_path(slug);
        if wanted == "/" {
            return self.home_page().await;
        }
        for path in self.page_files().await? {
            let value = match self.read_json(&path).await {
                Ok(Some(value)) => value,
                Ok(None) => continue,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable page file");
                    continue;
                }
            };
            if raw_page_path(&value) == wanted {
                return decode(&path.display().to_string(), value).map(Some);
            }
        }
        Ok(None)
    }

    async fn navbar(&self) -> Result<Option<NavbarDocument>, SourceError> {
        self.read_document("navbar.json").await
    }

    async fn footer(&self) -> Result<Option<FooterDocument>, SourceError> {
        self.read_document("footer.json").await
    }

    async fn documents(&self) -> Result<Vec<SourceDocument>, SourceError> {
        let mut paths: Vec<PathBuf> = ["home.json", "navbar.json", "footer.json"]
            .iter()
            .map(|name| self.root.join(name))
            .collect();
        paths.extend(self.page_files().await?);

        let mut documents = Vec::new();
        for path in paths {
            if let Some(value) = self.read_json(&path).await? {
                documents.push(SourceDocument {
                    origin: path.display().to_string(),
                    value,
                });
            }
        }
        Ok(documents)
    }
}

// ---------------------------------------------------------------------------
// In-memory snapshots
// ---------------------------------------------------------------------------

/// Snapshot held in memory as raw JSON, decoded on access like file content.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentSource {
    home: Option<Value>,
    pages: Vec<Value>,
    navbar: Option<Value>,
    footer: Option<Value>,
}

impl MemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(mut self, home: Value) -> Self {
        self.home = Some(home);
        self
    }

    pub fn with_page(mut self, page: Value) -> Self {
        self.pages.push(page);
        self
    }

    pub fn with_navbar(mut self, navbar: Value) -> Self {
        self.navbar = Some(navbar);
        self
    }

    pub fn with_footer(mut self, footer: Value) -> Self {
        self.footer = Some(footer);
        self
    }
}

#[async_trait]
impl ContentSource for MemoryContentSource {
    async fn home_page(&self) -> Result<Option<PageDocument>, SourceError> {
        self.home
            .clone()
            .map(|v| decode("memory:home", v))
            .transpose()
    }

    async fn page(&self, slug: &str) -> Result<Option<PageDocument>, SourceError> {
        let wanted = normalize_path(slug);
        if wanted == "/" {
            return self.home_page().await;
        }
        for (i, value) in self.pages.iter().enumerate() {
            if raw_page_path(value) == wanted {
                return decode(&format!("memory:pages[{i}]"), value.clone()).map(Some);
            }
        }
        Ok(None)
    }

    async fn navbar(&self) -> Result<Option<NavbarDocument>, SourceError> {
        self.navbar
            .clone()
            .map(|v| decode("memory:navbar", v))
            .transpose()
    }

    async fn footer(&self) -> Result<Option<FooterDocument>, SourceError> {
        self.footer
            .clone()
            .map(|v| decode("memory:footer", v))
            .transpose()
    }

    async fn documents(&self) -> Result<Vec<SourceDocument>, SourceError> {
        let mut documents = Vec::new();
        let named = [
            ("memory:home", &self.home),
            ("memory:navbar", &self.navbar),
            ("memory:footer", &self.footer),
        ];
        for (origin, value) in named {
            if let Some(value) = value {
                documents.push(SourceDocument {
                    origin: origin.to_string(),
                    value: value.clone(),
                });
            }
        }
        for (i, value) in self.pages.iter().enumerate() {
            documents.push(SourceDocument {
                origin: format!("memory:pages[{i}]"),
                value: value.clone(),
            });
        }
        Ok(documents)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write(dir: &Path, name: &str, value: &Value) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    }

    #[tokio::test]
    async fn file_source_reads_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "home.json", &json!({ "_type": "homePage", "title": "Home", "slug": "/" }));
        write(
            dir.path(),
            "pages/about.json",
            &json!({ "_type": "page", "title": "About", "slug": { "current": "/about" } }),
        );
        write(dir.path(), "navbar.json", &json!({ "_type": "navbar", "label": "Main" }));

        let source = FileContentSource::new(dir.path());
        assert_eq!(
            source.home_page().await.unwrap().unwrap().title.as_deref(),
            Some("Home")
        );
        assert_eq!(
            source.page("about").await.unwrap().unwrap().title.as_deref(),
            Some("About")
        );
        assert_eq!(
            source.page("/").await.unwrap().unwrap().title.as_deref(),
            Some("Home")
        );
        assert!(source.page("/missing").await.unwrap().is_none());
        assert!(source.footer().await.unwrap().is_none());
        assert_eq!(source.documents().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("navbar.json"), b"{ not json").unwrap();
        let source = FileContentSource::new(dir.path());
        let err = source.navbar().await.unwrap_err();
        assert!(matches!(err, SourceError::Decode { .. }));
    }

    #[tokio::test]
    async fn broken_sibling_page_does_not_hide_others() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("pages")).unwrap();
        std::fs::write(dir.path().join("pages/a-broken.json"), b"{ not json").unwrap();
        write(
            dir.path(),
            "pages/b-invalid.json",
            &json!({ "_type": "page", "title": 42, "slug": "/pricing" }),
        );
        write(
            dir.path(),
            "pages/c-about.json",
            &json!({ "_type": "page", "title": "About", "slug": { "current": "/about" } }),
        );

        let source = FileContentSource::new(dir.path());
        assert_eq!(
            source.page("/about").await.unwrap().unwrap().title.as_deref(),
            Some("About")
        );
        assert!(source.page("/missing").await.unwrap().is_none());
        // The matching document itself is still an error.
        assert!(matches!(
            source.page("/pricing").await.unwrap_err(),
            SourceError::Decode { .. }
        ));
    }

    #[tokio::test]
    async fn missing_directory_is_empty() {
        let source = FileContentSource::new("/nonexistent/vetrina-content");
        assert!(source.home_page().await.unwrap().is_none());
        assert!(source.page("/about").await.unwrap().is_none());
        assert!(source.documents().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_source_resolves_pages() {
        let source = MemoryContentSource::new()
            .with_home(json!({ "_type": "homePage", "title": "Home" }))
            .with_page(json!({ "_type": "page", "title": "Pricing", "slug": "/pricing" }));
        assert_eq!(
            source.page("/pricing/").await.unwrap().unwrap().title.as_deref(),
            Some("Pricing")
        );
        assert!(source.navbar().await.unwrap().is_none());

        let source = source.with_page(json!({ "_type": "page", "title": ["bad"], "slug": "/broken" }));
        assert!(source.page("/pricing").await.unwrap().is_some());
        assert!(source.page("/broken").await.is_err());
        let docs = source.documents().await.unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].doc_type(), Some("homePage"));
    }
}
