use crate::commands::{CmdMessage, CmdResult};
use crate::components::contents::{headings_from_markdown, ContentsTable};
use crate::error::Result;
use crate::frontmatter;
use std::fs;
use std::path::Path;

/// Builds the contents table of the post at `path`.
pub fn run(path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path)?;
    let (_, body) = frontmatter::parse(path, &text)?;
    let links = ContentsTable::build(&headings_from_markdown(body));

    let mut result = CmdResult::default();
    if links.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No h2 or h3 headings in {}",
            path.display()
        )));
    }
    Ok(result.with_contents(links))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_table_below_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2024-01-02-hello.md");
        fs::write(
            &path,
            "---\ntitle: Hello\n---\n# Hello\n\n## First Steps\n\n### Going Deeper\n",
        )
        .unwrap();

        let result = run(&path).unwrap();
        let hrefs: Vec<&str> = result.contents.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#first-steps", "#going-deeper"]);
        assert!(result.contents[1].indented);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn reports_post_without_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.md");
        fs::write(&path, "Just a paragraph.\n").unwrap();

        let result = run(&path).unwrap();
        assert!(result.contents.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("nope.md")).is_err());
    }
}
