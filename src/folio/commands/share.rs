use crate::commands::CmdResult;
use crate::components::share::SharePost;
use crate::error::{FolioError, Result};

/// What the share button does for `page_url`, given whether the platform offers a
/// native share sheet.
pub fn run(page_url: &str, native_available: bool, fallback: &str) -> Result<CmdResult> {
    if page_url.trim().is_empty() {
        return Err(FolioError::Api("Page URL cannot be empty".into()));
    }

    let action = SharePost::create(true, page_url)
        .map(|share| share.with_fallback(fallback).on_click(native_available))
        .ok_or_else(|| FolioError::Api("Share button unavailable".into()))?;
    Ok(CmdResult::default().with_share(action))
}
