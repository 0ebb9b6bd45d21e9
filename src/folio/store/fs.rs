use super::PreferenceStore;
use crate::error::{FolioError, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILENAME: &str = "prefs.json";

/// Preferences persisted as a flat JSON object under the folio directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(PREFS_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(FolioError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let file = self.path();
        if !file.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(file).map_err(FolioError::Io)?;
        let prefs = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(prefs)
    }

    fn save(&self, prefs: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(prefs).map_err(FolioError::Serialization)?;
        fs::write(self.path(), content).map_err(FolioError::Io)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut prefs = self.load()?;
        prefs.insert(key.to_string(), value.to_string());
        debug!("Setting preference {} = {}", key, value);
        self.save(&prefs)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut prefs = self.load()?;
        if prefs.remove(key).is_some() {
            self.save(&prefs)?;
        }
        Ok(())
    }
}
