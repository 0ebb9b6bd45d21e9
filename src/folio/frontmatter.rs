//! Front matter of posts on disk.
//!
//! Posts start with a YAML block fenced by `---` lines, the same block the
//! scaffolder writes. Only the fields the index page shows are read; anything else
//! in the block is ignored.

use crate::error::{FolioError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    tags: Option<TagsField>,
}

/// Jekyll accepts tags either as a YAML list or as one space-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum TagsField {
    List(Vec<String>),
    Text(String),
}

impl FrontMatter {
    pub fn tags(&self) -> Vec<String> {
        match &self.tags {
            Some(TagsField::List(list)) => list.clone(),
            Some(TagsField::Text(text)) => crate::slug::split_tags(text),
            None => Vec::new(),
        }
    }
}

/// Splits `text` into the raw YAML block and the body that follows it.
/// Returns `None` when the text does not open with a `---` fence or the
/// fence is never closed.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let first_end = text.find('\n')?;
    if text[..first_end].trim_end() != "---" {
        return None;
    }

    let yaml_start = first_end + 1;
    let mut offset = yaml_start;
    for line in text[yaml_start..].split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let body_start = offset + line.len();
            return Some((&text[yaml_start..offset], &text[body_start..]));
        }
        offset += line.len();
    }
    None
}

/// Parses the front matter of a post. Text without a front matter block yields
/// the default (empty) front matter and the whole text as body.
pub fn parse<'a>(path: &Path, text: &'a str) -> Result<(FrontMatter, &'a str)> {
    let Some((yaml, body)) = split(text) else {
        return Ok((FrontMatter::default(), text));
    };

    if yaml.trim().is_empty() {
        return Ok((FrontMatter::default(), body));
    }

    let front: FrontMatter =
        serde_yaml::from_str(yaml).map_err(|source| FolioError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((front, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "---\ntitle: Hello World\ndescription: >-\n  A test.\nimage: /images/x.png\ntags:\n  - foo\n  - bar\n---\n\n## Intro\n";

    #[test]
    fn splits_block_from_body() {
        let (yaml, body) = split(POST).unwrap();
        assert!(yaml.starts_with("title: Hello World"));
        assert!(yaml.ends_with("- bar\n"));
        assert_eq!(body, "\n## Intro\n");
    }

    #[test]
    fn no_fence_means_no_front_matter() {
        assert!(split("# Just markdown\n").is_none());
        assert!(split("---\ntitle: never closed\n").is_none());
    }

    #[test]
    fn parses_scaffolded_fields() {
        let (front, body) = parse(Path::new("x.md"), POST).unwrap();
        assert_eq!(front.title.as_deref(), Some("Hello World"));
        assert_eq!(front.description.as_deref(), Some("A test."));
        assert_eq!(front.image.as_deref(), Some("/images/x.png"));
        assert_eq!(front.tags(), vec!["foo", "bar"]);
        assert!(body.contains("## Intro"));
    }

    #[test]
    fn accepts_tags_as_a_string() {
        let text = "---\ntitle: T\ntags: rust cli, notes\n---\n";
        let (front, _) = parse(Path::new("x.md"), text).unwrap();
        assert_eq!(front.tags(), vec!["rust", "cli", "notes"]);
    }

    #[test]
    fn empty_block_is_default() {
        let (front, body) = parse(Path::new("x.md"), "---\n---\nbody").unwrap();
        assert_eq!(front, FrontMatter::default());
        assert_eq!(body, "body");
    }

    #[test]
    fn malformed_yaml_names_the_file() {
        let err = parse(Path::new("broken.md"), "---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, FolioError::FrontMatter { .. }));
        assert!(err.to_string().contains("broken.md"));
    }
}
