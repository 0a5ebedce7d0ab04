use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::app::error::{PersistenceError, Result};
use crate::domain::Article;
use crate::store::StorageAdapter;

/// File-backed adapter storing the whole board as one JSON document.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }
}

impl StorageAdapter for JsonStore {
    fn load(&self) -> Vec<Article> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), "could not read article data: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(articles) => articles,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    "article data is corrupt, starting with an empty board: {e}"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, articles: &[Article]) -> std::result::Result<(), PersistenceError> {
        let raw = serde_json::to_string_pretty(articles)?;

        // Write through a sibling temp file so a crash mid-write cannot
        // truncate the existing document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|source| PersistenceError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
