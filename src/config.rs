//! Walkthrough settings, read from an optional TOML file.
//!
//! Lookup order: the file named by `SYNTAX_TOUR_CONFIG`, then
//! `syntax-tour.toml` in the working directory, then built-in defaults.
//! `SYNTAX_TOUR_POSTS_URL` overrides the posts endpoint afterwards.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "SYNTAX_TOUR_CONFIG";
pub const POSTS_URL_VAR: &str = "SYNTAX_TOUR_POSTS_URL";
pub const DEFAULT_CONFIG_FILE: &str = "syntax-tour.toml";
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub posts_url: String,
    pub log_filter: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl TourConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Resolves the config from the environment and working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_default(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Same lookup as [`TourConfig::load`], with `default_path` standing in
    /// for `./syntax-tour.toml`.
    pub fn load_with_default(default_path: &Path) -> Result<Self, ConfigError> {
        let mut config = match env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(url) = env::var(POSTS_URL_VAR) {
            config.posts_url = url;
        }
        Ok(config)
    }
}
