//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "data/blogs.json";
pub const DEFAULT_WEBSITE_DIR: &str = "website";
pub const DEFAULT_SITE_NAME: &str = "Blogboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Path to the static JSON article dataset.
    pub data_file: PathBuf,
    /// Directory holding the static marketing site, served at `/`.
    pub website_dir: PathBuf,
    /// Site name used when composing page titles for the detail view.
    pub site_name: String,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATA_FILE`: default `data/blogs.json`
    /// - `WEBSITE_DIR`: default `website`
    /// - `SITE_NAME`: default `Blogboard`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse_u16("PORT", DEFAULT_PORT),
            data_file: env_path("DATA_FILE", DEFAULT_DATA_FILE),
            website_dir: env_path("WEBSITE_DIR", DEFAULT_WEBSITE_DIR),
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string()),
        }
    }
}

fn env_parse_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
