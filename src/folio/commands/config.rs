//! `folio config`: reads or changes `.folio/config.json`.
//!
//! The key is checked against [`CONFIG_KEYS`] before the file is loaded. An unknown
//! key or a value the key rejects is returned as [`FolioError::Config`], so nothing
//! is saved and the CLI exits non-zero.

use crate::commands::{CmdMessage, CmdResult, FolioPaths};
use crate::config::CONFIG_KEYS;
use crate::error::{FolioError, Result};
use log::debug;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

fn known_key(key: &str) -> Result<&'static str> {
    CONFIG_KEYS
        .iter()
        .copied()
        .find(|k| *k == key)
        .ok_or_else(|| {
            FolioError::Config(format!(
                "Unknown config key: {} (expected one of {})",
                key,
                CONFIG_KEYS.join(", ")
            ))
        })
}

pub fn run(paths: &FolioPaths, action: ConfigAction) -> Result<CmdResult> {
    let key = match &action {
        ConfigAction::ShowAll => None,
        ConfigAction::ShowKey(key) | ConfigAction::Set(key, _) => Some(known_key(key)?),
    };

    let mut config = paths.config()?;
    let mut result = CmdResult::default();

    match (key, action) {
        (Some(key), ConfigAction::Set(_, value)) => {
            config.set(key, &value)?;
            config.save(&paths.folio_dir)?;
            debug!("Saved {} = {}", key, value);

            let shown = config.get(key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
        (Some(key), _) => {
            result.add_message(CmdMessage::info(config.get(key).unwrap_or_default()));
        }
        (None, _) => {}
    }

    Ok(result.with_config(config))
}
