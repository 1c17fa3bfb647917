use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BRAND_NAME, DEFAULT_PIXEL_RATIO, SHARE_FILE_EXTENSION, SHARE_FILE_PREFIX,
};

/// What to do when a mobile device reports it cannot share the snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedSharePolicy {
    #[default]
    FallbackToDownload,
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub brand_name: String,
    pub website_url: String,
    pub pixel_ratio: f64,
    pub cache_bust: bool,
    pub file_prefix: String,
    pub unsupported_share: UnsupportedSharePolicy,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            website_url: String::new(),
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            cache_bust: true,
            file_prefix: SHARE_FILE_PREFIX.to_string(),
            unsupported_share: UnsupportedSharePolicy::default(),
        }
    }
}

impl ShareConfig {
    pub fn with_website_url(mut self, website_url: impl Into<String>) -> Self {
        self.website_url = website_url.into();
        self
    }

    /// `bet-<invite code>.png`
    pub fn snapshot_filename(&self, invite_code: &str) -> String {
        format!("{}{}{}", self.file_prefix, invite_code, SHARE_FILE_EXTENSION)
    }

    pub fn share_title(&self) -> String {
        self.brand_name.clone()
    }

    /// Caption sent with the native share sheet. `current_path` is the router
    /// path, whose leading slash is dropped because `website_url` ends in one.
    pub fn share_text(&self, current_path: &str) -> String {
        let path = current_path.strip_prefix('/').unwrap_or(current_path);
        format!(
            "I won my bet on {}! - {}{}",
            self.brand_name, self.website_url, path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShareConfig::default();
        assert_eq!(config.pixel_ratio, 3.0);
        assert!(config.cache_bust);
        assert_eq!(config.unsupported_share, UnsupportedSharePolicy::FallbackToDownload);
    }

    #[test]
    fn test_snapshot_filename() {
        assert_eq!(ShareConfig::default().snapshot_filename("ABC123"), "bet-ABC123.png");
    }

    #[test]
    fn test_share_text_strips_leading_slash() {
        let config = ShareConfig::default().with_website_url("https://example.com/");
        assert_eq!(
            config.share_text("/app/challenge/42"),
            "I won my bet on xyz! - https://example.com/app/challenge/42"
        );
        assert_eq!(config.share_title(), "xyz");
    }

    #[test]
    fn test_partial_config_deserializes_over_defaults() {
        let config: ShareConfig =
            serde_json::from_str(r#"{"pixel_ratio": 2.0, "unsupported_share": "ignore"}"#).unwrap();
        assert_eq!(config.pixel_ratio, 2.0);
        assert_eq!(config.unsupported_share, UnsupportedSharePolicy::Ignore);
        assert_eq!(config.file_prefix, "bet-");
    }
}
