use serde::Serialize;

pub const DEFAULT_SHARE_FALLBACK: &str = "http://twitter.com/intent/tweet?url=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShareAction {
    /// Hand the URL to the platform share sheet.
    Native { url: String },
    /// Open this URL in a new window.
    Fallback { url: String },
}

impl ShareAction {
    pub fn url(&self) -> &str {
        match self {
            ShareAction::Native { url } | ShareAction::Fallback { url } => url,
        }
    }
}

/// The share button of a post page.
#[derive(Debug, Clone)]
pub struct SharePost {
    page_url: String,
    fallback: String,
}

impl SharePost {
    /// `None` when the page has no share button.
    pub fn create(button_present: bool, page_url: &str) -> Option<Self> {
        if !button_present {
            return None;
        }
        Some(Self {
            page_url: page_url.trim().to_string(),
            fallback: DEFAULT_SHARE_FALLBACK.to_string(),
        })
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn on_click(&self, native_available: bool) -> ShareAction {
        if native_available {
            ShareAction::Native {
                url: self.page_url.clone(),
            }
        } else {
            ShareAction::Fallback {
                url: format!("{}{}", self.fallback, self.page_url),
            }
        }
    }
}
