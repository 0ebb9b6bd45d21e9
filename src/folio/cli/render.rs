//! # Rendering
//!
//! Styled terminal output from minijinja templates. Each renderer builds a small
//! serializable view of a [`CmdResult`] part and feeds it to a template from
//! `templates/`. The `style` filter applies the [`FOLIO_STYLES`] palette, or nothing
//! when stdout has no color support.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they need
//! Unicode-aware processing.

use super::styles::{names, FOLIO_STYLES};
use super::templates::{
    ARTICLES_TEMPLATE, CONTENTS_TEMPLATE, KEY_VALUES_TEMPLATE, MESSAGES_TEMPLATE,
};
use chrono::NaiveDate;
use console::Term;
use folio::api::{CmdMessage, MessageLevel};
use folio::components::code_label::CodeLabel;
use folio::components::contents::ContentsLink;
use folio::components::scroll::HeaderState;
use folio::components::share::ShareAction;
use folio::config::{FolioConfig, CONFIG_KEYS};
use folio::dom::ClassList;
use folio::model::ArticleRecord;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const AGE_WIDTH: usize = 14;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Serialize)]
struct ArticleLine {
    index: String,
    title: String,
    padding: String,
    age: String,
    indent: String,
    meta: Option<String>,
}

#[derive(Serialize)]
struct ArticlesData {
    articles: Vec<ArticleLine>,
}

#[derive(Serialize)]
struct ContentsLine {
    indent: &'static str,
    text: String,
    href: String,
}

#[derive(Serialize)]
struct ContentsData {
    links: Vec<ContentsLine>,
}

#[derive(Serialize)]
struct KeyValue {
    key: String,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct KeyValuesData {
    entries: Vec<KeyValue>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn use_color() -> bool {
    Term::stdout().features().colors_supported()
}

fn register_style_filter(env: &mut Environment<'static>, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        FOLIO_STYLES.apply(&name, &value.to_string(), use_color)
    });
}

fn render_with_color<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_style_filter(&mut env, use_color);
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

pub fn render_article_list(articles: &[ArticleRecord], today: NaiveDate) -> String {
    render_article_list_internal(articles, today, use_color())
}

fn render_article_list_internal(
    articles: &[ArticleRecord],
    today: NaiveDate,
    use_color: bool,
) -> String {
    let lines = articles
        .iter()
        .map(|article| {
            let index = format!("{:>4}.", article.id.to_string());
            let fixed = index.width() + 1 + AGE_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed);
            let title = truncate_to_width(&article.title, available);
            let padding = " ".repeat(available.saturating_sub(title.width()));
            ArticleLine {
                indent: " ".repeat(index.width() + 1),
                index,
                title,
                padding,
                age: article
                    .date
                    .map(|date| format_age(date, today))
                    .unwrap_or_default(),
                meta: article.meta.clone(),
            }
        })
        .collect();

    render_with_color(
        ARTICLES_TEMPLATE,
        &ArticlesData { articles: lines },
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_contents(links: &[ContentsLink]) -> String {
    render_contents_internal(links, use_color())
}

fn render_contents_internal(links: &[ContentsLink], use_color: bool) -> String {
    let lines = links
        .iter()
        .map(|link| ContentsLine {
            indent: if link.indented { "    " } else { "  " },
            text: link.text.clone(),
            href: link.href.clone(),
        })
        .collect();

    render_with_color(CONTENTS_TEMPLATE, &ContentsData { links: lines }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn render_key_values(pairs: Vec<(String, String)>, use_color: bool) -> String {
    let key_width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let entries = pairs
        .into_iter()
        .map(|(key, value)| KeyValue {
            padding: " ".repeat(key_width.saturating_sub(key.width())),
            key,
            value,
        })
        .collect();

    render_with_color(KEY_VALUES_TEMPLATE, &KeyValuesData { entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_code_labels(labels: &[CodeLabel]) -> String {
    render_code_labels_internal(labels, use_color())
}

fn render_code_labels_internal(labels: &[CodeLabel], use_color: bool) -> String {
    let pairs = labels
        .iter()
        .map(|l| {
            (
                format!("block {}", l.block + 1),
                format!("{} ({})", l.label, l.language),
            )
        })
        .collect();
    render_key_values(pairs, use_color)
}

pub fn render_share(action: &ShareAction) -> String {
    render_share_internal(action, use_color())
}

fn render_share_internal(action: &ShareAction, use_color: bool) -> String {
    let kind = match action {
        ShareAction::Native { .. } => "share",
        ShareAction::Fallback { .. } => "open",
    };
    render_key_values(vec![(kind.to_string(), action.url().to_string())], use_color)
}

pub fn render_header(header: &HeaderState) -> String {
    render_header_internal(header, use_color())
}

fn render_header_internal(header: &HeaderState, use_color: bool) -> String {
    let classes = |list: &ClassList| list.iter().collect::<Vec<_>>().join(" ");
    let state = if header.compact { "compact" } else { "full" };
    let pairs = vec![
        ("header".to_string(), state.to_string()),
        ("threshold".to_string(), format!("{}px", header.threshold)),
        ("content".to_string(), classes(&header.header)),
        ("container".to_string(), classes(&header.container)),
    ];
    render_key_values(pairs, use_color)
}

pub fn render_config(config: &FolioConfig) -> String {
    render_config_internal(config, use_color())
}

fn render_config_internal(config: &FolioConfig, use_color: bool) -> String {
    let pairs = CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| (key.to_string(), value)))
        .collect();
    render_key_values(pairs, use_color)
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let messages_data = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    render_with_color(
        MESSAGES_TEMPLATE,
        &MessagesData {
            messages: messages_data,
        },
        use_color,
    )
    .unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// How long ago a post was published, right-aligned to [`AGE_WIDTH`].
fn format_age(date: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(date).num_days();
    let age = if days <= 0 {
        "today".to_string()
    } else {
        let formatter = timeago::Formatter::new();
        formatter.convert(Duration::from_secs(days as u64 * SECONDS_PER_DAY))
    };
    format!("{:>width$}", age, width = AGE_WIDTH)
}
