//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every folio operation. It resolves paths and loads configuration, then
//! dispatches to `commands/*.rs` and hands back a [`CmdResult`].
//!
//! It writes nothing to stdout or stderr and returns data, not strings.
//!
//! ## Generic Over Collaborators
//!
//! `FolioApi<P: PreferenceStore, A: ArticleSource>`:
//! - Production: `FolioApi<FileStore, PostsDir>`
//! - Testing: `FolioApi<InMemoryStore, StaticSource>`
//!
//! API tests check dispatch and argument plumbing; command behavior is tested in the
//! command modules.

use crate::commands;
use crate::error::Result;
use crate::model::PostAnswers;
use crate::source::ArticleSource;
use crate::store::PreferenceStore;
use chrono::NaiveDate;
use std::path::Path;

pub struct FolioApi<P: PreferenceStore, A: ArticleSource> {
    prefs: P,
    source: A,
    paths: commands::FolioPaths,
}

impl<P: PreferenceStore, A: ArticleSource> FolioApi<P, A> {
    pub fn new(prefs: P, source: A, paths: commands::FolioPaths) -> Self {
        Self {
            prefs,
            source,
            paths,
        }
    }

    /// Scaffolds a post dated `date` into `output_dir`, or into the configured posts
    /// directory when none is given.
    pub fn new_post(
        &self,
        output_dir: Option<&Path>,
        answers: PostAnswers,
        date: NaiveDate,
        overwrite: bool,
    ) -> Result<commands::CmdResult> {
        let dir = match output_dir {
            Some(dir) => self.paths.resolve(dir),
            None => self.paths.posts_dir(&self.paths.config()?),
        };
        commands::scaffold::run(&dir, answers, date, overwrite)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        let options = self.paths.config()?.search_options();
        commands::search::run(&self.source, query, options)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        self.search("")
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<commands::CmdResult> {
        commands::theme::run(&mut self.prefs, action)
    }

    pub fn contents(&self, post: &Path) -> Result<commands::CmdResult> {
        commands::contents::run(&self.paths.resolve(post))
    }

    pub fn code_labels(&self, post: &Path) -> Result<commands::CmdResult> {
        commands::labels::run(&self.paths.resolve(post))
    }

    pub fn share(&self, page_url: &str, native_available: bool) -> Result<commands::CmdResult> {
        let fallback = self.paths.config()?.share_fallback;
        commands::share::run(page_url, native_available, &fallback)
    }

    /// How the header looks at `offset` pixels with the configured threshold.
    pub fn scroll(&self, offset: f64) -> Result<commands::CmdResult> {
        commands::scroll::run(&self.paths.config()?, offset)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::FolioPaths {
        &self.paths
    }

    pub fn source(&self) -> &A {
        &self.source
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::theme::ThemeAction;
pub use commands::{CmdMessage, CmdResult, FolioPaths, MessageLevel};
