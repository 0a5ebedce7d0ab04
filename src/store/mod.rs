pub mod json;
pub mod memory;

use chrono::Utc;
use tracing::{debug, warn};

use crate::app::error::{LensError, PersistenceError, Result};
use crate::domain::{is_reaction_symbol, Article};

pub use json::JsonStore;
pub use memory::MemoryStore;

/// Persistence boundary for the article board.
///
/// The store treats the backing storage as a single opaque document:
/// `save` fully overwrites it, `load` reads it back. Missing or corrupt
/// data is never fatal on load; adapters log and return an empty board.
pub trait StorageAdapter {
    fn load(&self) -> Vec<Article>;
    fn save(&self, articles: &[Article]) -> std::result::Result<(), PersistenceError>;
}

/// Single source of truth for the article sequence.
///
/// Articles are kept newest-first. Every mutation persists immediately
/// through the adapter; a failed save keeps the in-memory mutation and is
/// surfaced via [`ArticleStore::take_save_warning`] instead of rolling back.
pub struct ArticleStore {
    adapter: Box<dyn StorageAdapter>,
    articles: Vec<Article>,
    last_id: i64,
    save_warning: Option<PersistenceError>,
}

impl ArticleStore {
    pub fn open(adapter: Box<dyn StorageAdapter>) -> Self {
        let articles = adapter.load();
        let last_id = articles.iter().map(|a| a.id).max().unwrap_or(0);
        debug!(count = articles.len(), "loaded article board");
        Self {
            adapter,
            articles,
            last_id,
            save_warning: None,
        }
    }

    /// Fresh article id: current wall-clock milliseconds, bumped past the
    /// previous id when the clock repeats or runs backwards. Strictly
    /// increasing within a store lifetime, never reused.
    fn next_id(&mut self) -> i64 {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// Create a new article and insert it at the front of the board.
    ///
    /// Title and content are trimmed and must be non-empty; the image URL
    /// is optional (empty string means no image). Returns the stored
    /// article.
    pub fn create(&mut self, title: &str, image: &str, content: &str) -> Result<Article> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(LensError::Validation("article title must not be empty".into()));
        }
        if content.is_empty() {
            return Err(LensError::Validation(
                "article content must not be empty".into(),
            ));
        }

        let article = Article::new(
            self.next_id(),
            title.to_string(),
            image.trim().to_string(),
            content.to_string(),
        );
        self.articles.insert(0, article.clone());
        self.persist();
        debug!(id = article.id, title = %article.title, "created article");
        Ok(article)
    }

    /// Remove the article with the given id. Returns whether anything was
    /// removed; a missing id is a no-op, not an error.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.articles.len();
        self.articles.retain(|a| a.id != id);
        let removed = self.articles.len() != before;
        if removed {
            self.persist();
            debug!(id, "deleted article");
        }
        removed
    }

    /// Increment the count for `symbol` on the article with the given id.
    ///
    /// Unknown symbols are rejected without touching the board. A missing
    /// id yields `Ok(None)`. Returns the updated article on success.
    pub fn react(&mut self, id: i64, symbol: &str) -> Result<Option<Article>> {
        if !is_reaction_symbol(symbol) {
            return Err(LensError::Validation(format!(
                "unknown reaction symbol: {symbol}"
            )));
        }

        let Some(article) = self.articles.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        let count = article.reactions.entry(symbol.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let updated = article.clone();
        self.persist();
        Ok(Some(updated))
    }

    /// Read-only view of the canonical sequence, newest-first.
    pub fn snapshot(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: i64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Take the most recent persistence failure, if any, for the UI layer
    /// to surface. The in-memory board is already up to date.
    pub fn take_save_warning(&mut self) -> Option<PersistenceError> {
        self.save_warning.take()
    }

    fn persist(&mut self) {
        if let Err(e) = self.adapter.save(&self.articles) {
            warn!("failed to persist articles: {e}");
            self.save_warning = Some(e);
        }
    }
}
