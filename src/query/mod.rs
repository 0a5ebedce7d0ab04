//! Pure filter+sort pipeline over a board snapshot.
//!
//! Every view runs its own [`ViewFilter`] through [`run`] against the same
//! snapshot, so independent views stay consistent with the store without
//! sharing any filter state.

use crate::domain::{Article, SortKey, ViewFilter};

/// Apply `filter` to a snapshot and return the matching articles in order.
///
/// Filtering is a case-insensitive substring match on title or content;
/// an empty search term matches everything. Sorting is stable, so ties
/// (equal timestamps, equal reaction totals) keep their snapshot order.
pub fn run(articles: &[Article], filter: &ViewFilter) -> Vec<Article> {
    let mut results: Vec<Article> = articles
        .iter()
        .filter(|a| matches(a, &filter.search))
        .cloned()
        .collect();

    match filter.sort {
        SortKey::Newest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => results.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::MostReacted => {
            results.sort_by(|a, b| b.reaction_total().cmp(&a.reaction_total()))
        }
    }

    results
}

fn matches(article: &Article, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let term = search.to_lowercase();
    article.title.to_lowercase().contains(&term) || article.content.to_lowercase().contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn article(id: i64, title: &str, content: &str, age_secs: i64) -> Article {
        let mut a = Article::new(id, title.into(), String::new(), content.into());
        a.created_at = Utc::now() - Duration::seconds(age_secs);
        a
    }

    fn ids(articles: &[Article]) -> Vec<i64> {
        articles.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(run(&[], &ViewFilter::default()).is_empty());
    }

    #[test]
    fn test_filter_matches_title_or_content_case_insensitive() {
        let articles = vec![
            article(1, "Alpha", "first", 30),
            article(2, "Beta", "second", 20),
            article(3, "gamma Alpha", "third", 10),
            article(4, "Delta", "about ALPHA rays", 5),
        ];

        let hits = run(&articles, &ViewFilter::new("alpha", SortKey::Oldest));
        assert_eq!(ids(&hits), vec![1, 3, 4]);

        let hits = run(&articles, &ViewFilter::new("ALPHA", SortKey::Oldest));
        assert_eq!(ids(&hits), vec![1, 3, 4]);
    }

    #[test]
    fn test_empty_search_matches_all() {
        let articles = vec![article(1, "Alpha", "x", 10), article(2, "Beta", "y", 5)];
        assert_eq!(run(&articles, &ViewFilter::default()).len(), 2);
    }

    #[test]
    fn test_sort_newest_and_oldest() {
        let articles = vec![
            article(1, "t1", "x", 30),
            article(2, "t2", "x", 20),
            article(3, "t3", "x", 10),
        ];

        let newest = run(&articles, &ViewFilter::new("", SortKey::Newest));
        assert_eq!(ids(&newest), vec![3, 2, 1]);

        let oldest = run(&articles, &ViewFilter::new("", SortKey::Oldest));
        assert_eq!(ids(&oldest), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_most_reacted_by_total() {
        let mut a1 = article(1, "t1", "x", 30);
        a1.reactions.insert("🔥".into(), 3);
        a1.reactions.insert("❤️".into(), 2);
        let mut a2 = article(2, "t2", "x", 20);
        a2.reactions.insert("👍".into(), 1);
        let mut a3 = article(3, "t3", "x", 10);
        a3.reactions.insert("😂".into(), 3);

        let sorted = run(&[a1, a2, a3], &ViewFilter::new("", SortKey::MostReacted));
        assert_eq!(ids(&sorted), vec![1, 3, 2]);
    }

    #[test]
    fn test_most_reacted_ties_keep_snapshot_order() {
        let articles = vec![
            article(1, "t1", "x", 30),
            article(2, "t2", "x", 20),
            article(3, "t3", "x", 10),
        ];

        let sorted = run(&articles, &ViewFilter::new("", SortKey::MostReacted));
        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn test_run_does_not_mutate_input() {
        let articles = vec![article(1, "t1", "x", 10), article(2, "t2", "x", 5)];
        let before = articles.clone();
        let _ = run(&articles, &ViewFilter::new("t", SortKey::Newest));
        assert_eq!(articles, before);
    }
}
