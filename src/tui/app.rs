use crate::config::BoardConfig;
use crate::domain::{Article, ViewFilter};
use crate::query;

/// The two independent list views of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Articles,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            View::Home => View::Articles,
            View::Articles => View::Home,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Articles => "All Articles",
        }
    }
}

/// Keyboard handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    /// `/` pressed; keystrokes edit the active view's search term live.
    Search,
    /// `d` pressed; waiting for `y` to delete the given article id.
    ConfirmDelete(i64),
}

pub struct TuiApp {
    pub view: View,
    home_filter: ViewFilter,
    articles_filter: ViewFilter,
    /// Query results for the active view, refreshed after every mutation
    /// or filter change.
    pub results: Vec<Article>,
    pub selected: usize,
    pub detail_scroll: u16,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub status_message: Option<String>,
    home_page_size: usize,
}

impl TuiApp {
    pub fn new(board: &BoardConfig) -> Self {
        Self {
            view: View::Home,
            home_filter: ViewFilter::new("", board.default_sort),
            articles_filter: ViewFilter::new("", board.default_sort),
            results: Vec::new(),
            selected: 0,
            detail_scroll: 0,
            input_mode: InputMode::Browse,
            should_quit: false,
            status_message: None,
            home_page_size: board.home_page_size,
        }
    }

    pub fn filter(&self) -> &ViewFilter {
        match self.view {
            View::Home => &self.home_filter,
            View::Articles => &self.articles_filter,
        }
    }

    pub fn filter_mut(&mut self) -> &mut ViewFilter {
        match self.view {
            View::Home => &mut self.home_filter,
            View::Articles => &mut self.articles_filter,
        }
    }

    /// Re-run the active view's filter against a fresh store snapshot.
    pub fn refresh(&mut self, snapshot: &[Article]) {
        self.results = query::run(snapshot, self.filter());
        if self.view == View::Home {
            self.results.truncate(self.home_page_size);
        }
        if self.selected >= self.results.len() {
            self.selected = self.results.len().saturating_sub(1);
        }
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.results.get(self.selected)
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.detail_scroll = 0;
        }
    }

    pub fn move_down(&mut self) {
        if !self.results.is_empty() && self.selected < self.results.len() - 1 {
            self.selected += 1;
            self.detail_scroll = 0;
        }
    }

    pub fn switch_view(&mut self, snapshot: &[Article]) {
        self.view = self.view.next();
        self.selected = 0;
        self.detail_scroll = 0;
        self.refresh(snapshot);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortKey;

    fn article(id: i64, title: &str) -> Article {
        Article::new(id, title.into(), String::new(), "body".into())
    }

    #[test]
    fn test_views_keep_separate_filters() {
        let mut app = TuiApp::new(&BoardConfig::default());
        app.filter_mut().search = "math".into();

        app.view = View::Articles;
        assert_eq!(app.filter().search, "");

        app.view = View::Home;
        assert_eq!(app.filter().search, "math");
    }

    #[test]
    fn test_refresh_clamps_selection() {
        let mut app = TuiApp::new(&BoardConfig::default());
        app.refresh(&[article(1, "a"), article(2, "b")]);
        app.selected = 1;

        app.refresh(&[article(1, "a")]);
        assert_eq!(app.selected, 0);

        app.refresh(&[]);
        assert_eq!(app.selected, 0);
        assert!(app.selected_article().is_none());
    }

    #[test]
    fn test_home_view_is_capped_to_page_size() {
        let board = BoardConfig {
            home_page_size: 2,
            ..BoardConfig::default()
        };
        let mut app = TuiApp::new(&board);
        let articles: Vec<Article> = (1..=5).map(|i| article(i, "t")).collect();

        app.refresh(&articles);
        assert_eq!(app.results.len(), 2);

        app.switch_view(&articles);
        assert_eq!(app.view, View::Articles);
        assert_eq!(app.results.len(), 5);
    }

    #[test]
    fn test_filter_changes_flow_into_results() {
        let mut app = TuiApp::new(&BoardConfig::default());
        let articles = vec![article(1, "Alpha"), article(2, "Beta")];

        app.filter_mut().search = "beta".into();
        app.refresh(&articles);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].id, 2);

        app.filter_mut().search.clear();
        app.filter_mut().sort = SortKey::Oldest;
        app.refresh(&articles);
        assert_eq!(app.results.len(), 2);
    }
}
