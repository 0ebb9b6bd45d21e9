//! # Configuration
//!
//! Folio configuration lives in `.folio/config.json` next to the preferences file.
//! Missing files and missing keys fall back to the defaults below.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `posts-dir` | `_posts` | Where posts are read from and scaffolded into |
//! | `scroll-threshold` | `50` | Offset in px past which the header goes compact |
//! | `search-trigger` | `live` | `live` (every input) or `enter` (Enter/button only) |
//! | `search-meta` | `true` | Match the meta text as well as the title |
//! | `share-fallback` | `http://twitter.com/intent/tweet?url=` | Share URL prefix without a native share |

use crate::components::scroll::{ScrollSpy, DEFAULT_SCROLL_THRESHOLD};
use crate::components::search::{MatchFields, SearchOptions, SearchTrigger};
use crate::components::share::DEFAULT_SHARE_FALLBACK;
use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_POSTS_DIR: &str = "_posts";

pub const CONFIG_KEYS: &[&str] = &[
    "posts-dir",
    "scroll-threshold",
    "search-trigger",
    "search-meta",
    "share-fallback",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct FolioConfig {
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: u32,

    #[serde(default)]
    pub search_trigger: SearchTrigger,

    #[serde(default = "default_true")]
    pub search_meta: bool,

    #[serde(default = "default_share_fallback")]
    pub share_fallback: String,
}

fn default_posts_dir() -> String {
    DEFAULT_POSTS_DIR.to_string()
}

fn default_scroll_threshold() -> u32 {
    DEFAULT_SCROLL_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_share_fallback() -> String {
    DEFAULT_SHARE_FALLBACK.to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            scroll_threshold: default_scroll_threshold(),
            search_trigger: SearchTrigger::default(),
            search_meta: true,
            share_fallback: default_share_fallback(),
        }
    }
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        let config: FolioConfig =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FolioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FolioError::Serialization)?;
        fs::write(config_path, content).map_err(FolioError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "posts-dir" => Some(self.posts_dir.clone()),
            "scroll-threshold" => Some(self.scroll_threshold.to_string()),
            "search-trigger" => Some(self.search_trigger.to_string()),
            "search-meta" => Some(self.search_meta.to_string()),
            "share-fallback" => Some(self.share_fallback.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "posts-dir" => {
                if value.trim().is_empty() {
                    return Err(FolioError::Config("posts-dir cannot be empty".into()));
                }
                self.posts_dir = value.to_string();
            }
            "scroll-threshold" => {
                self.scroll_threshold = value.parse().map_err(|_| {
                    FolioError::Config(format!(
                        "scroll-threshold must be a whole number of pixels, got {}",
                        value
                    ))
                })?;
            }
            "search-trigger" => {
                self.search_trigger = value.parse().map_err(FolioError::Config)?;
            }
            "search-meta" => {
                self.search_meta = value.parse().map_err(|_| {
                    FolioError::Config(format!("search-meta must be true or false, got {}", value))
                })?;
            }
            "share-fallback" => self.share_fallback = value.to_string(),
            other => return Err(FolioError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            trigger: self.search_trigger,
            fields: if self.search_meta {
                MatchFields::TitleAndMeta
            } else {
                MatchFields::Title
            },
        }
    }

    pub fn scroll_spy(&self) -> ScrollSpy {
        ScrollSpy::new(self.scroll_threshold)
    }
}
