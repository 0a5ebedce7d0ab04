use std::sync::{Arc, Mutex};

use crate::app::error::PersistenceError;
use crate::domain::Article;
use crate::store::StorageAdapter;

/// In-memory adapter for tests and `--ephemeral` runs.
///
/// Clones share the same backing document, so a test can keep a handle
/// and observe what the store persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    document: Arc<Mutex<Vec<Article>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            document: Arc::new(Mutex::new(articles)),
        }
    }

    /// The currently persisted sequence.
    pub fn saved(&self) -> Vec<Article> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Article>> {
        match self.document.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl StorageAdapter for MemoryStore {
    fn load(&self) -> Vec<Article> {
        self.lock().clone()
    }

    fn save(&self, articles: &[Article]) -> Result<(), PersistenceError> {
        *self.lock() = articles.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_replaces_document() {
        let store = MemoryStore::new();
        let article = Article::new(1, "Math".into(), String::new(), "Calculus".into());

        store.save(std::slice::from_ref(&article)).unwrap();
        assert_eq!(store.load(), vec![article]);

        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clones_share_backing_document() {
        let store = MemoryStore::new();
        let handle = store.clone();
        let article = Article::new(1, "Math".into(), String::new(), "Calculus".into());

        store.save(std::slice::from_ref(&article)).unwrap();
        assert_eq!(handle.saved().len(), 1);
    }
}
