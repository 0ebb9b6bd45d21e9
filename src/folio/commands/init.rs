use crate::commands::{CmdMessage, CmdResult, FolioPaths};
use crate::config::FolioConfig;
use crate::error::Result;
use std::fs;

/// Creates `.folio/` with a default config and the posts directory. Existing
/// config is left alone.
pub fn run(paths: &FolioPaths) -> Result<CmdResult> {
    let config = paths.config()?;
    if !paths.folio_dir.join("config.json").exists() {
        config.save(&paths.folio_dir)?;
    }

    let posts_dir = paths.posts_dir(&config);
    fs::create_dir_all(&posts_dir)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized folio at {}",
        paths.folio_dir.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "Posts go in {}",
        posts_dir.display()
    )));
    Ok(result)
}
