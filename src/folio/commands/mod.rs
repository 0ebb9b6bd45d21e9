use crate::components::code_label::CodeLabel;
use crate::components::contents::ContentsLink;
use crate::components::scroll::HeaderState;
use crate::components::share::ShareAction;
use crate::config::FolioConfig;
use crate::error::Result;
use crate::model::{ArticleRecord, ThemeMode};
use std::path::{Path, PathBuf};

pub mod config;
pub mod contents;
pub mod init;
pub mod labels;
pub mod scaffold;
pub mod scroll;
pub mod search;
pub mod share;
pub mod theme;

const FOLIO_DIRNAME: &str = ".folio";

/// Locations of a blog checkout.
#[derive(Debug, Clone)]
pub struct FolioPaths {
    /// The blog's root directory; relative paths in the config resolve against it.
    pub root: PathBuf,
    /// `.folio/` under the root: config and preferences.
    pub folio_dir: PathBuf,
}

impl FolioPaths {
    pub fn new(root: PathBuf) -> Self {
        let folio_dir = root.join(FOLIO_DIRNAME);
        Self { root, folio_dir }
    }

    pub fn config(&self) -> Result<FolioConfig> {
        FolioConfig::load(&self.folio_dir)
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn posts_dir(&self, config: &FolioConfig) -> PathBuf {
        self.resolve(Path::new(&config.posts_dir))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_articles: Vec<ArticleRecord>,
    pub created_posts: Vec<PathBuf>,
    pub theme: Option<ThemeMode>,
    pub contents: Vec<ContentsLink>,
    pub code_labels: Vec<CodeLabel>,
    pub share: Option<ShareAction>,
    pub header: Option<HeaderState>,
    pub config: Option<FolioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_articles(mut self, articles: Vec<ArticleRecord>) -> Self {
        self.listed_articles = articles;
        self
    }

    pub fn with_created_post(mut self, path: PathBuf) -> Self {
        self.created_posts.push(path);
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_contents(mut self, contents: Vec<ContentsLink>) -> Self {
        self.contents = contents;
        self
    }

    pub fn with_code_labels(mut self, labels: Vec<CodeLabel>) -> Self {
        self.code_labels = labels;
        self
    }

    pub fn with_share(mut self, share: ShareAction) -> Self {
        self.share = Some(share);
        self
    }

    pub fn with_header(mut self, header: HeaderState) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = Some(config);
        self
    }
}
