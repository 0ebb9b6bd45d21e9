use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Position of an article in the list it was enumerated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleId(pub usize);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// A read-only view of one article entry on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub title: String,
    pub meta: Option<String>,
    // Filled only for records enumerated from a posts directory
    pub path: Option<PathBuf>,
    pub date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl ArticleRecord {
    pub fn new(id: usize, title: impl Into<String>) -> Self {
        Self {
            id: ArticleId(id),
            title: title.into(),
            meta: None,
            path: None,
            date: None,
            tags: Vec::new(),
        }
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Answers collected by the post prompt, in prompt order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAnswers {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    /// Raw answer; split into tokens when the post is rendered.
    pub tags: String,
}

/// Everything needed to render and name a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetails {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    pub tags: String,
    pub date: NaiveDate,
}

impl PostDetails {
    pub fn from_answers(answers: PostAnswers, date: NaiveDate) -> Self {
        Self {
            title: answers.title,
            slug: answers.slug,
            description: answers.description,
            image_url: answers.image_url,
            tags: answers.tags,
            date,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Reads a stored flag. Anything but `"dark"` is light.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("Unknown theme: {} (expected light or dark)", other)),
        }
    }
}
