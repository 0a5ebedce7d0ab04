use std::path::PathBuf;

use crate::app::error::{LensError, Result};
use crate::config::Config;
use crate::store::{ArticleStore, JsonStore, MemoryStore};

/// Wires the article store and configuration together for the CLI and TUI.
pub struct AppContext {
    pub store: ArticleStore,
    pub config: Config,
}

impl AppContext {
    /// Open the board backed by the JSON data file. Path precedence:
    /// explicit argument, then `board.data_path` from the config, then the
    /// platform data directory.
    pub fn new(data_path: Option<PathBuf>, config: Config) -> Result<Self> {
        let path = match data_path.or_else(|| config.board.data_path.clone()) {
            Some(p) => p,
            None => Self::default_data_path()?,
        };

        let adapter = JsonStore::new(path)?;
        Ok(Self {
            store: ArticleStore::open(Box::new(adapter)),
            config,
        })
    }

    /// Board that lives only for this process, for tests and `--ephemeral`.
    pub fn ephemeral(config: Config) -> Self {
        Self {
            store: ArticleStore::open(Box::new(MemoryStore::new())),
            config,
        }
    }

    fn default_data_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| LensError::Config("Could not find data directory".into()))?;
        Ok(data_dir.join("studentlens").join("articles.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortKey, ViewFilter};
    use crate::query;

    // The §8-style end-to-end flow: create, query per view, react, re-query.
    #[test]
    fn test_board_flow_end_to_end() {
        let mut ctx = AppContext::ephemeral(Config::default());

        let a = ctx.store.create("Math", "", "Intro to calculus").unwrap();
        let b = ctx.store.create("History", "", "WWII overview").unwrap();

        let snapshot = ctx.store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, b.id, "newest-first storage order");

        let hits = query::run(snapshot, &ViewFilter::new("math", SortKey::Newest));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, a.id);

        ctx.store.react(a.id, "❤️").unwrap().unwrap();
        let ranked = query::run(ctx.store.snapshot(), &ViewFilter::new("", SortKey::MostReacted));
        assert_eq!(ranked[0].id, a.id);
        assert_eq!(ranked[1].id, b.id);
    }

    // Two views filter the same snapshot independently.
    #[test]
    fn test_views_are_independent() {
        let mut ctx = AppContext::ephemeral(Config::default());
        ctx.store.create("Math", "", "calculus").unwrap();
        ctx.store.create("History", "", "rome").unwrap();

        let home = ViewFilter::new("math", SortKey::Newest);
        let all = ViewFilter::default();

        assert_eq!(query::run(ctx.store.snapshot(), &home).len(), 1);
        assert_eq!(query::run(ctx.store.snapshot(), &all).len(), 2);
    }
}
