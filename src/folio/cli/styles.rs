//! Styles for the folio CLI.
//!
//! Templates name what they show (`time`, `list-title`) and never a color. The names
//! resolve here to `console::Style` values, so a palette change is a change to this
//! file only. The `style` filter registered in `render.rs` looks names up in
//! [`FOLIO_STYLES`] and drops the styling entirely when the terminal has no color.
//!
//! An unknown name is rendered with a `(!?)` prefix so typos in templates show up.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const TIME: &str = "time";
    pub const KEY: &str = "key";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const LIST_INDEX: &str = "list-index";
    pub const LIST_TITLE: &str = "list-title";
}

#[derive(Clone, Default)]
pub struct Styles {
    styles: HashMap<&'static str, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static FOLIO_STYLES: Lazy<Styles> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Styles::new()
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::KEY, Style::new().cyan())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
        .add(names::LIST_INDEX, Style::new().color256(178))
        .add(names::LIST_TITLE, Style::new())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_keeps_text() {
        assert_eq!(FOLIO_STYLES.apply(names::TITLE, "Hello", false), "Hello");
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(FOLIO_STYLES.apply("titel", "Hello", false), "(!?) Hello");
    }

    #[test]
    fn color_mode_wraps_text() {
        let styled = Styles::new()
            .add("x", Style::new().red().force_styling(true))
            .apply("x", "Hello", true);
        assert!(styled.contains("Hello"));
        assert!(styled.contains('\u{1b}'));
    }
}
