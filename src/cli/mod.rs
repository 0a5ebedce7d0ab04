pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::SortKey;

#[derive(Parser)]
#[command(name = "lens")]
#[command(about = "The Student Lens - a local article board", long_about = None)]
pub struct Cli {
    /// Path to the article data file
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Keep articles in memory only (nothing is written to disk)
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a new article
    Post {
        /// Article title
        #[arg(short, long)]
        title: String,
        /// Article body
        #[arg(short, long)]
        content: String,
        /// Optional image URL
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// Delete an article permanently
    Delete {
        /// Id of the article to delete
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a reaction to an article
    React {
        /// Id of the article
        id: i64,
        /// Reaction symbol, e.g. 🔥 or ❤️
        symbol: String,
    },
    /// List articles
    List {
        /// Only show articles whose title or content contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sort order
        #[arg(long, value_enum, default_value_t)]
        sort: SortKey,
    },
    /// Show education statistics for a country
    Country {
        /// Country name, e.g. "Japan"; omit to list known countries
        name: Option<String>,
    },
    /// Launch the TUI
    Tui,
}
