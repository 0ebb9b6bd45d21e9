use crate::commands::{CmdMessage, CmdResult};
use crate::components::code_label::code_labels_from_markdown;
use crate::error::Result;
use crate::frontmatter;
use std::fs;
use std::path::Path;

pub fn run(path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path)?;
    let (_, body) = frontmatter::parse(path, &text)?;
    let labels = code_labels_from_markdown(body);

    let mut result = CmdResult::default();
    if labels.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No labelled code blocks in {}",
            path.display()
        )));
    }
    Ok(result.with_code_labels(labels))
}
