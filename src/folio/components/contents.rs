//! # Contents Table
//!
//! Builds the in-page navigation of a post from its h2 and h3 headings. Link text is
//! derived from the heading id, not the heading text, the same way the page markup
//! expects (`getting-started` -> `📍 Getting started`). Sub-headings are indented
//! only when the post has at least one h2 to hang them under.

use crate::dom::ClassList;
use crate::slug::{id_to_title, kebab_case};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;
use std::collections::HashMap;

pub const LINK_CLASS: &str = "post-headerLink";
pub const INDENTED_CLASS: &str = "post-headerLink--indented";
pub const LINK_MARKER: &str = "📍";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub id: String,
    pub level: u8,
}

impl Heading {
    pub fn new(id: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentsLink {
    pub href: String,
    pub text: String,
    pub indented: bool,
}

impl ContentsLink {
    pub fn classes(&self) -> ClassList {
        let mut classes = ClassList::from_classes([LINK_CLASS]);
        if self.indented {
            classes.add(INDENTED_CLASS);
        }
        classes
    }
}

pub struct ContentsTable;

impl ContentsTable {
    /// `post_content` is `None` when the page has no post body; the table is
    /// then not built at all.
    pub fn create(post_content: Option<&[Heading]>) -> Option<Vec<ContentsLink>> {
        post_content.map(Self::build)
    }

    pub fn build(headings: &[Heading]) -> Vec<ContentsLink> {
        let listed: Vec<&Heading> = headings
            .iter()
            .filter(|h| h.level == 2 || h.level == 3)
            .collect();
        let has_h2 = listed.iter().any(|h| h.level == 2);

        listed
            .into_iter()
            .map(|h| ContentsLink {
                href: format!("#{}", h.id),
                text: format!("{} {}", LINK_MARKER, id_to_title(&h.id)),
                indented: h.level == 3 && has_h2,
            })
            .collect()
    }
}

fn level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Returns `base`, or `base-N` with the smallest N that no earlier heading took.
/// Both the base and the returned id are recorded as taken.
fn unique_id(seen: &mut HashMap<String, usize>, base: String) -> String {
    let mut count = seen.get(&base).copied().unwrap_or(0);
    let mut id = base.clone();
    while seen.contains_key(&id) {
        count += 1;
        id = format!("{}-{}", base, count);
    }
    seen.insert(base, count);
    seen.entry(id.clone()).or_insert(0);
    id
}

/// Collects the headings of a Markdown body with the ids a renderer would give
/// them: an explicit `{#id}` when present, otherwise the kebab-cased text.
/// Repeated ids get `-1`, `-2`, … suffixes.
pub fn headings_from_markdown(text: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut current: Option<(u8, Option<String>, String)> = None;

    for event in Parser::new_ext(text, Options::ENABLE_HEADING_ATTRIBUTES) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some((level_number(level), id.map(|i| i.to_string()), String::new()));
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, _, buf)) = current.as_mut() {
                    buf.push_str(&t);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, explicit, text)) = current.take() {
                    let base = explicit.unwrap_or_else(|| kebab_case(&text));
                    let id = unique_id(&mut seen, base);
                    headings.push(Heading { id, level });
                }
            }
            _ => {}
        }
    }

    headings
}
