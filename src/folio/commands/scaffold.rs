//! # Post Scaffolder
//!
//! Turns the prompt's answers into a new Markdown post:
//!
//! 1. [`prepare`] validates the answers, fills the slug from the title when it was
//!    left blank, and stamps today's date.
//! 2. [`scaffold`] renders the front matter and derives `{date}-{slug}.md`. It is
//!    pure, so the output is fully determined by the details.
//! 3. [`write_post`] writes the file. The output directory must already exist, and
//!    an existing post is only replaced when asked to.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::model::{PostAnswers, PostDetails};
use crate::slug::{kebab_case, split_tags};
use chrono::NaiveDate;
use log::debug;
use minijinja::Environment;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const POST_TEMPLATE: &str = include_str!("../templates/post.md.tmp");
const POST_TEMPLATE_NAME: &str = "post.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedPost {
    pub filename: String,
    pub content: String,
}

#[derive(Serialize)]
struct PostTemplateData<'a> {
    title: &'a str,
    description: &'a str,
    image_url: &'a str,
    tags: Vec<String>,
}

/// The slug to use: the answer kebab-cased, or the kebab-cased title when the
/// answer is blank.
pub fn resolve_slug(title: &str, answer: &str) -> String {
    if answer.trim().is_empty() {
        kebab_case(title)
    } else {
        kebab_case(answer)
    }
}

pub fn prepare(answers: PostAnswers, date: NaiveDate) -> Result<PostDetails> {
    if answers.title.trim().is_empty() {
        return Err(FolioError::Api("Title cannot be empty".into()));
    }

    let slug = resolve_slug(&answers.title, &answers.slug);
    if slug.is_empty() {
        return Err(FolioError::Api(format!(
            "Cannot derive a slug from \"{}\"",
            answers.title
        )));
    }

    Ok(PostDetails::from_answers(
        PostAnswers { slug, ..answers },
        date,
    ))
}

pub fn post_filename(details: &PostDetails) -> String {
    format!("{}-{}.md", details.date.format("%Y-%m-%d"), details.slug)
}

pub fn render_post(details: &PostDetails) -> Result<String> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(POST_TEMPLATE_NAME, POST_TEMPLATE)?;

    let data = PostTemplateData {
        title: &details.title,
        description: &details.description,
        image_url: &details.image_url,
        tags: split_tags(&details.tags),
    };
    let content = env.get_template(POST_TEMPLATE_NAME)?.render(&data)?;
    Ok(content)
}

pub fn scaffold(details: &PostDetails) -> Result<ScaffoldedPost> {
    Ok(ScaffoldedPost {
        filename: post_filename(details),
        content: render_post(details)?,
    })
}

/// Writes `post` into `dir`. Fails with [`FolioError::PostExists`] when the file is
/// already there and `overwrite` is false; a missing or read-only directory is an
/// I/O error. A failed write never leaves a partial post behind.
pub fn write_post(dir: &Path, post: &ScaffoldedPost, overwrite: bool) -> Result<PathBuf> {
    let path = dir.join(&post.filename);

    if overwrite {
        replace_post(dir, &path, post)?;
    } else {
        create_post(&path, post)?;
    }

    debug!("Wrote {} bytes to {}", post.content.len(), path.display());
    Ok(path)
}

fn create_post(path: &Path, post: &ScaffoldedPost) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => FolioError::PostExists(path.to_path_buf()),
            _ => FolioError::Io(e),
        })?;

    if let Err(e) = file.write_all(post.content.as_bytes()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(FolioError::Io(e));
    }
    Ok(())
}

// The old post stays intact until the new one is fully on disk.
fn replace_post(dir: &Path, path: &Path, post: &ScaffoldedPost) -> Result<()> {
    let tmp_path = dir.join(format!(".{}-{}.tmp", post.filename, std::process::id()));
    let written = fs::write(&tmp_path, &post.content).and_then(|_| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(FolioError::Io(e));
    }
    Ok(())
}

pub fn run(
    output_dir: &Path,
    answers: PostAnswers,
    date: NaiveDate,
    overwrite: bool,
) -> Result<CmdResult> {
    let details = prepare(answers, date)?;
    let post = scaffold(&details)?;
    let path = write_post(output_dir, &post, overwrite)?;

    let mut result = CmdResult::default().with_created_post(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Created post: {}",
        path.display()
    )));
    Ok(result)
}
