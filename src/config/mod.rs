//! Configuration for The Student Lens.
//!
//! Read from `~/.config/studentlens/config.toml` at startup. A default
//! file with comments is created on first run; missing fields fall back
//! to defaults.

pub mod colors;

pub use colors::ColorConfig;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::SortKey;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board: BoardConfig,
    pub colors: ColorConfig,
}

/// Board behavior settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Override for the article data file. Defaults to the platform data
    /// directory when unset.
    pub data_path: Option<PathBuf>,
    /// Initial sort for every view.
    pub default_sort: SortKey,
    /// How many articles the TUI home tab shows.
    pub home_page_size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            default_sort: SortKey::Newest,
            home_page_size: 10,
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating a commented
    /// default file if none exists. An invalid file is an error; missing
    /// fields use defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })
    }

    /// `~/.config/studentlens/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("studentlens").join("config.toml"))
    }

    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        r##"# The Student Lens configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"

[board]
# Where the article data file lives. Uncomment to override the platform
# data directory.
# data_path = "/path/to/articles.json"

# Initial sort for every view: "newest", "oldest" or "most-reacted".
default_sort = "newest"

# How many articles the home tab shows.
home_page_size = 10

[colors]
border_active = "Cyan"
border_inactive = "DarkGray"
selection_bg = "Cyan"
selection_fg = "Black"
article_date = "Yellow"
reaction_counts = "Magenta"
status_fg = "White"
status_bg = "DarkGray"
"##
        .to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("default config should be valid TOML");

        assert_eq!(config.board.default_sort, SortKey::Newest);
        assert_eq!(config.board.home_page_size, 10);
        assert_eq!(config.colors.border_active, ratatui::style::Color::Cyan);
        assert!(config.board.data_path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[board]
default_sort = "most-reacted"

[colors]
border_active = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("partial config should work");

        assert_eq!(config.board.default_sort, SortKey::MostReacted);
        assert_eq!(
            config.colors.border_active,
            ratatui::style::Color::Rgb(255, 0, 0)
        );
        // Unspecified fields keep defaults.
        assert_eq!(config.board.home_page_size, 10);
        assert_eq!(config.colors.border_inactive, ratatui::style::Color::DarkGray);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("empty config should work");
        assert_eq!(config.board.default_sort, SortKey::Newest);
    }

    #[test]
    fn test_invalid_sort_key_is_rejected() {
        let content = r#"
[board]
default_sort = "popular"
"#;
        assert!(toml::from_str::<Config>(content).is_err());
    }
}
