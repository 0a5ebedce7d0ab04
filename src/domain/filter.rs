use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::app::LensError;

/// Ordering applied to query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Descending by creation time.
    #[default]
    Newest,
    /// Ascending by creation time.
    Oldest,
    /// Descending by total reaction count.
    MostReacted,
}

impl SortKey {
    pub fn cycle(self) -> Self {
        match self {
            SortKey::Newest => SortKey::Oldest,
            SortKey::Oldest => SortKey::MostReacted,
            SortKey::MostReacted => SortKey::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::MostReacted => "most-reacted",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Unrecognized sort keys are rejected here, at the string boundary; the
// query engine itself only ever sees a valid `SortKey`.
impl FromStr for SortKey {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "most-reacted" => Ok(SortKey::MostReacted),
            other => Err(LensError::Validation(format!("unknown sort key: {other}"))),
        }
    }
}

/// Search and ordering state for one view of the board.
///
/// Each view (home feed, full listing) owns an independent instance;
/// filters are in-memory only and reset on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Case-insensitive substring matched against title or content.
    /// Empty means match-all.
    pub search: String,
    pub sort: SortKey,
}

impl ViewFilter {
    pub fn new(search: impl Into<String>, sort: SortKey) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_matches_all_newest() {
        let filter = ViewFilter::default();
        assert_eq!(filter.search, "");
        assert_eq!(filter.sort, SortKey::Newest);
    }

    #[test]
    fn test_sort_key_parses_known_values() {
        assert_eq!("newest".parse::<SortKey>().unwrap(), SortKey::Newest);
        assert_eq!("oldest".parse::<SortKey>().unwrap(), SortKey::Oldest);
        assert_eq!(
            "most-reacted".parse::<SortKey>().unwrap(),
            SortKey::MostReacted
        );
    }

    #[test]
    fn test_sort_key_rejects_unknown_value() {
        let err = "popular".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_cycle_visits_all_keys() {
        let start = SortKey::Newest;
        assert_eq!(start.cycle(), SortKey::Oldest);
        assert_eq!(start.cycle().cycle(), SortKey::MostReacted);
        assert_eq!(start.cycle().cycle().cycle(), start);
    }
}
