//! Language badges for code blocks.
//!
//! Highlighted blocks carry a `language-{key}` class. Blocks whose key is in the
//! table below get a badge with the language's display name; anything else is left
//! without one.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag};
use serde::Serialize;

pub const LANGUAGE_CLASS_PREFIX: &str = "language-";
pub const BADGE_CLASS: &str = "code-label";

const LANGUAGES: &[(&str, &str)] = &[
    ("bash", "Bash"),
    ("c", "C"),
    ("cpp", "C++"),
    ("css", "CSS"),
    ("diff", "Diff"),
    ("go", "Go"),
    ("html", "HTML"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("jsx", "JSX"),
    ("markdown", "Markdown"),
    ("md", "Markdown"),
    ("python", "Python"),
    ("py", "Python"),
    ("ruby", "Ruby"),
    ("rust", "Rust"),
    ("rs", "Rust"),
    ("scss", "SCSS"),
    ("sh", "Shell"),
    ("shell", "Shell"),
    ("sql", "SQL"),
    ("toml", "TOML"),
    ("ts", "TypeScript"),
    ("tsx", "TSX"),
    ("typescript", "TypeScript"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLabel {
    /// Position of the block among all code blocks of the document.
    pub block: usize,
    pub language: String,
    pub label: &'static str,
}

pub fn display_name(key: &str) -> Option<&'static str> {
    let key = key.to_lowercase();
    LANGUAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// The badge for a block with the given classes, from the first recognized
/// `language-*` class.
pub fn label_for_classes<S: AsRef<str>>(classes: &[S]) -> Option<(String, &'static str)> {
    classes.iter().find_map(|class| {
        let key = class.as_ref().strip_prefix(LANGUAGE_CLASS_PREFIX)?;
        display_name(key).map(|name| (key.to_string(), name))
    })
}

/// Badges for the fenced code blocks of a Markdown document. The first word of a
/// fence's info string is its language.
pub fn code_labels_from_markdown(text: &str) -> Vec<CodeLabel> {
    let mut labels = Vec::new();
    let mut block = 0;

    for event in Parser::new(text) {
        if let Event::Start(Tag::CodeBlock(kind)) = event {
            let class = match &kind {
                CodeBlockKind::Fenced(info) => info
                    .split_whitespace()
                    .next()
                    .map(|lang| format!("{}{}", LANGUAGE_CLASS_PREFIX, lang)),
                CodeBlockKind::Indented => None,
            };
            if let Some((language, label)) = class.and_then(|c| label_for_classes(&[c])) {
                labels.push(CodeLabel {
                    block,
                    language,
                    label,
                });
            }
            block += 1;
        }
    }

    labels
}
