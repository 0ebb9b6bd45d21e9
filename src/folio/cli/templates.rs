//! Output templates, kept as standalone files and embedded at compile time.
//!
//! Templates are minijinja and spell out their line breaks: each loop body ends with
//! its own newline, so the output reads the way the template file does. Layout math
//! (widths, padding) is done in `render.rs` and handed in as plain strings.

pub const ARTICLES_TEMPLATE: &str = include_str!("templates/articles.tmp");
pub const CONTENTS_TEMPLATE: &str = include_str!("templates/contents.tmp");
pub const KEY_VALUES_TEMPLATE: &str = include_str!("templates/key_values.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
