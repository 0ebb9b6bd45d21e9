use super::ArticleSource;
use crate::error::{FolioError, Result};
use crate::frontmatter::{self, FrontMatter};
use crate::model::ArticleRecord;
use crate::slug::id_to_title;
use chrono::NaiveDate;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const POST_EXTENSIONS: &[&str] = &["md", "markdown"];
const META_SEPARATOR: &str = " · ";

/// The Markdown posts of a blog checkout.
///
/// Files are listed newest first by name, which for `YYYY-MM-DD-slug.md` posts is the
/// order the blog index shows them in.
pub struct PostsDir {
    dir: PathBuf,
}

impl PostsDir {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn post_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(FolioError::Io)? {
            let path = entry.map_err(FolioError::Io)?.path();
            let is_post = path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| POST_EXTENSIONS.contains(&e));
            if is_post {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        Ok(paths)
    }

    fn read_record(&self, id: usize, path: &Path) -> Result<ArticleRecord> {
        let text = fs::read_to_string(path).map_err(FolioError::Io)?;
        let front = match frontmatter::parse(path, &text) {
            Ok((front, _)) => front,
            Err(e) => {
                warn!("{}; falling back to the file name", e);
                FrontMatter::default()
            }
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let (date, slug) = split_dated_stem(stem);

        let title = front
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| id_to_title(slug));
        let tags = front.tags();

        let meta_parts: Vec<String> = front
            .description
            .clone()
            .into_iter()
            .chain((!tags.is_empty()).then(|| tags.join(" ")))
            .filter(|p| !p.trim().is_empty())
            .collect();

        let mut record = ArticleRecord::new(id, title)
            .with_path(path.to_path_buf())
            .with_tags(tags);
        if !meta_parts.is_empty() {
            record = record.with_meta(meta_parts.join(META_SEPARATOR));
        }
        if let Some(date) = date {
            record = record.with_date(date);
        }
        Ok(record)
    }
}

/// Splits `2024-01-02-hello-world` into its date and slug. Stems without a
/// leading date come back whole.
pub fn split_dated_stem(stem: &str) -> (Option<NaiveDate>, &str) {
    if stem.len() >= 10 && stem.is_char_boundary(10) {
        if let Ok(date) = NaiveDate::parse_from_str(&stem[..10], "%Y-%m-%d") {
            let rest = stem[10..].trim_start_matches('-');
            return (Some(date), rest);
        }
    }
    (None, stem)
}

impl ArticleSource for PostsDir {
    fn name(&self) -> &str {
        self.dir.to_str().unwrap_or("posts")
    }

    fn articles(&self) -> Result<Vec<ArticleRecord>> {
        if !self.dir.exists() {
            debug!("Posts directory {} does not exist", self.dir.display());
            return Ok(Vec::new());
        }

        let paths = self.post_paths()?;
        debug!("Found {} posts in {}", paths.len(), self.dir.display());

        let mut records = Vec::with_capacity(paths.len());
        for path in &paths {
            match self.read_record(records.len(), path) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }
        Ok(records)
    }
}
