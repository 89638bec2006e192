//! File-backed preferences with atomic writes.
//!
//! Each namespace lives in `<dir>/<namespace>.json`, a flat JSON object of
//! string values:
//!
//! ```json
//! { "notes": "[{\"title\":\"Groceries\",\"description\":\"Milk, eggs\"}]" }
//! ```

use std::collections::BTreeMap;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{StorageBackend, StorageError, StorageResult};

type Document = BTreeMap<String, String>;

/// Preferences stored as one JSON document per namespace under a directory.
#[derive(Debug, Clone)]
pub struct FilePrefs {
    dir: PathBuf,
}

impl FilePrefs {
    /// Creates a backend rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the document path for a namespace.
    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{namespace}.json"))
    }

    /// Reads a namespace document. A missing file is an empty document.
    fn read_document(&self, path: &Path) -> StorageResult<Document> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(StorageError::Io {
                    path: path.into(),
                    source: e,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|e| StorageError::Malformed {
            path: path.into(),
            source: e,
        })
    }
}

impl StorageBackend for FilePrefs {
    fn read(&self, namespace: &str, key: &str) -> StorageResult<Option<String>> {
        let path = self.namespace_path(namespace);
        let mut document = self.read_document(&path)?;
        Ok(document.remove(key))
    }

    /// Rewrites the namespace document with `key` set.
    ///
    /// Other keys in the document are kept. An undecodable document is
    /// replaced rather than blocking every future write.
    fn write(&mut self, namespace: &str, key: &str, value: &str) -> StorageResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io {
            path: self.dir.clone(),
            source: e,
        })?;

        let path = self.namespace_path(namespace);
        let mut document = match self.read_document(&path) {
            Ok(document) => document,
            Err(StorageError::Malformed { path, source }) => {
                warn!(path = %path.display(), error = %source, "replacing malformed preferences file");
                Document::new()
            }
            Err(e) => return Err(e),
        };
        document.insert(key.to_string(), value.to_string());

        let content = serde_json::to_string_pretty(&document).map_err(StorageError::Serialize)?;
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::Io {
            path: path.clone(),
            source: e,
        })?;

        temp.write_all(content.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| StorageError::Io {
                path: path.clone(),
                source: e,
            })?;

        temp.persist(&path).map_err(|e| StorageError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        debug!(path = %path.display(), key, bytes = content.len(), "wrote preferences");
        Ok(())
    }
}
