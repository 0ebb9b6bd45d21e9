//! # Preference Storage
//!
//! The only state folio keeps between page loads is the theme flag. It lives in a
//! key-value store behind the [`PreferenceStore`] trait, so the theme logic works the
//! same against a browser's local storage, a file, or memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON object in `.folio/prefs.json`
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! .folio/
//! ├── config.json     # FolioConfig
//! └── prefs.json      # { "theme": "dark" }
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the theme flag is stored.
pub const THEME_KEY: &str = "theme";

/// Abstract interface for string preferences.
pub trait PreferenceStore {
    /// Read a value; `None` when the key was never set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Forget a key. Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for &mut P {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
