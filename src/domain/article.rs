use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fixed set of reaction symbols a reader can apply to an article.
///
/// Closed set: `ArticleStore::react` rejects anything outside it.
pub const REACTION_SYMBOLS: [&str; 10] =
    ["🔥", "❤️", "😂", "😮", "😢", "👏", "👍", "🎓", "💡", "✨"];

/// Returns true if `symbol` is one of the allowed reaction symbols.
pub fn is_reaction_symbol(symbol: &str) -> bool {
    REACTION_SYMBOLS.contains(&symbol)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Millisecond timestamp at creation, bumped when needed so ids are
    /// strictly increasing within a store lifetime. Never reused.
    pub id: i64,
    pub title: String,
    /// Optional image URL; empty string means "no image".
    #[serde(default)]
    pub image: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Per-symbol reaction counts; absent symbol means zero.
    #[serde(default)]
    pub reactions: BTreeMap<String, u32>,
}

impl Article {
    pub fn new(id: i64, title: String, image: String, content: String) -> Self {
        Self {
            id,
            title,
            image,
            content,
            created_at: Utc::now(),
            reactions: BTreeMap::new(),
        }
    }

    /// Sum of all reaction counts, the `most-reacted` sort key.
    pub fn reaction_total(&self) -> u64 {
        self.reactions.values().map(|&c| u64::from(c)).sum()
    }

    pub fn count_for(&self, symbol: &str) -> u32 {
        self.reactions.get(symbol).copied().unwrap_or(0)
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_total_empty() {
        let article = Article::new(1, "Title".into(), String::new(), "Body".into());
        assert_eq!(article.reaction_total(), 0);
    }

    #[test]
    fn test_reaction_total_sums_all_symbols() {
        let mut article = Article::new(1, "Title".into(), String::new(), "Body".into());
        article.reactions.insert("🔥".into(), 2);
        article.reactions.insert("❤️".into(), 3);
        assert_eq!(article.reaction_total(), 5);
        assert_eq!(article.count_for("🔥"), 2);
        assert_eq!(article.count_for("👍"), 0);
    }

    #[test]
    fn test_symbol_set_is_closed() {
        assert!(is_reaction_symbol("🔥"));
        assert!(is_reaction_symbol("✨"));
        assert!(!is_reaction_symbol("🚀"));
        assert!(!is_reaction_symbol(""));
    }

    #[test]
    fn test_serde_round_trip_preserves_every_field() {
        let mut article = Article::new(42, "Math".into(), "http://img".into(), "Calculus".into());
        article.reactions.insert("🎓".into(), 7);
        article.reactions.insert("💡".into(), 1);

        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":1,"title":"T","content":"C","created_at":"2024-05-01T12:00:00Z"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.image, "");
        assert!(article.reactions.is_empty());
        assert!(!article.has_image());
    }
}
