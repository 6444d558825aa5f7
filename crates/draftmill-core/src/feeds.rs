//! Feed registry seed configuration.
//!
//! `config/feeds.yaml` lists the RSS/Atom feeds to seed into the registry
//! table on first run. The registry itself (activity flags, error counts) is
//! owned by the database.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedsFile {
    pub feeds: Vec<FeedConfig>,
}

/// Load and validate the feeds configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_feeds(path: &Path) -> Result<FeedsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FeedsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let feeds_file: FeedsFile = serde_yaml::from_str(&content)?;

    validate_feeds(&feeds_file)?;

    Ok(feeds_file)
}

fn validate_feeds(file: &FeedsFile) -> Result<(), ConfigError> {
    let mut seen_urls = HashSet::new();

    for feed in &file.feeds {
        if feed.name.trim().is_empty() {
            return Err(ConfigError::InvalidFeeds(
                "feed with empty name".to_string(),
            ));
        }
        if !feed.url.starts_with("http://") && !feed.url.starts_with("https://") {
            return Err(ConfigError::InvalidFeeds(format!(
                "feed '{}' has a non-http url: {}",
                feed.name, feed.url
            )));
        }
        if !seen_urls.insert(feed.url.as_str()) {
            return Err(ConfigError::InvalidFeeds(format!(
                "duplicate feed url: {}",
                feed.url
            )));
        }
    }

    Ok(())
}
