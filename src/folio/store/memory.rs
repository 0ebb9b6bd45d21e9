use super::PreferenceStore;
use crate::error::Result;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    prefs: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.prefs.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.prefs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.prefs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.prefs.remove(key);
        Ok(())
    }
}
