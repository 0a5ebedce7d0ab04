//! # The Student Lens
//!
//! A local, single-user article board for students: write short articles,
//! browse and search them, react with a fixed set of symbols, and look up
//! static per-country education statistics.
//!
//! ## Architecture
//!
//! ```text
//! Store (canonical articles) → Query (filter + sort) → UI (CLI / TUI)
//!            ↕
//!    StorageAdapter (JSON file / in-memory)
//! ```
//!
//! Every mutation goes through [`store::ArticleStore`], which persists
//! immediately through its adapter; each view then re-runs its own
//! [`domain::ViewFilter`] through [`query::run`] against a fresh snapshot,
//! so independent views never drift from the store.
//!
//! ## Quick Start
//!
//! ```bash
//! # Publish an article
//! lens post --title "Math" --content "Intro to calculus"
//!
//! # List, filtered and sorted
//! lens list --search math --sort most-reacted
//!
//! # React and delete
//! lens react 1717000000000 🔥
//! lens delete 1717000000000
//!
//! # Launch the TUI
//! lens tui
//! ```

/// Application context and error handling.
///
/// [`app::AppContext`] wires the store and configuration together for the
/// CLI and TUI.
pub mod app;

/// Static per-country education statistics behind the map view.
pub mod atlas;

/// Command-line interface using clap.
///
/// Subcommands: `post`, `delete`, `react`, `list`, `country`, `tui`.
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/studentlens/config.toml`: board behavior and
/// TUI colors (named or hex).
pub mod config;

/// Core domain models.
///
/// - [`domain::Article`]: an article with reactions
/// - [`domain::ViewFilter`] / [`domain::SortKey`]: per-view search and sort state
pub mod domain;

/// Pure filter+sort query pipeline over board snapshots.
pub mod query;

/// Article persistence.
///
/// - [`store::StorageAdapter`]: load/save boundary
/// - [`store::ArticleStore`]: canonical article sequence and mutations
/// - [`store::JsonStore`] / [`store::MemoryStore`]: adapters
pub mod store;

/// Terminal user interface.
///
/// Two tabs (Home, All Articles) with independent search and sort, a
/// detail pane, and a status bar. Keybindings: j/k navigate, Tab switches
/// view, `/` searches, `s` cycles sort, digits react, `d` deletes, q quits.
pub mod tui;
