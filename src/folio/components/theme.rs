//! # Theme Flag
//!
//! A single persisted preference selects light or dark mode. [`ThemeState`] owns the
//! preference store and is shared by reference between the two page behaviors:
//!
//! - [`PreThemeSwitcher`] applies the stored mode before first paint
//! - [`ThemeSwitcher`] flips it when the theme button is clicked
//!
//! Applying a mode swaps two mutually exclusive classes on the root element and,
//! when the button is on the page, sets its glyph.

use crate::dom::ClassList;
use crate::error::Result;
use crate::model::ThemeMode;
use crate::store::{PreferenceStore, THEME_KEY};
use log::debug;

pub const LIGHT_CLASS: &str = "light-mode";
pub const DARK_CLASS: &str = "dark-mode";
pub const LIGHT_GLYPH: &str = "🌙";
pub const DARK_GLYPH: &str = "☀️";

/// How a mode shows on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub add: &'static str,
    pub remove: &'static str,
    pub glyph: &'static str,
}

impl Appearance {
    pub fn apply(&self, root: &mut ClassList, button_label: Option<&mut String>) {
        root.add(self.add);
        root.remove(self.remove);
        if let Some(label) = button_label {
            *label = self.glyph.to_string();
        }
    }
}

impl ThemeMode {
    /// The button shows the mode a click switches to.
    pub fn appearance(self) -> Appearance {
        match self {
            ThemeMode::Dark => Appearance {
                add: DARK_CLASS,
                remove: LIGHT_CLASS,
                glyph: DARK_GLYPH,
            },
            ThemeMode::Light => Appearance {
                add: LIGHT_CLASS,
                remove: DARK_CLASS,
                glyph: LIGHT_GLYPH,
            },
        }
    }
}

/// The persisted theme flag.
pub struct ThemeState<P: PreferenceStore> {
    store: P,
}

impl<P: PreferenceStore> ThemeState<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }

    /// The stored mode; light when nothing (or something unknown) is stored.
    pub fn current(&self) -> Result<ThemeMode> {
        let flag = self.store.get(THEME_KEY)?;
        Ok(ThemeMode::from_flag(flag.as_deref()))
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        debug!("Theme set to {}", mode);
        self.store.set(THEME_KEY, mode.as_str())
    }

    /// Dark becomes light, anything else becomes dark. Returns the new mode.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.current()?.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn into_store(self) -> P {
        self.store
    }
}

/// Applies the stored mode when the page loads.
#[derive(Debug, Default)]
pub struct PreThemeSwitcher;

impl PreThemeSwitcher {
    pub fn apply<P: PreferenceStore>(
        &self,
        state: &ThemeState<P>,
        root: &mut ClassList,
        button_label: Option<&mut String>,
    ) -> Result<ThemeMode> {
        let mode = state.current()?;
        mode.appearance().apply(root, button_label);
        Ok(mode)
    }
}

/// The theme button.
#[derive(Debug, Default)]
pub struct ThemeSwitcher {
    pre: PreThemeSwitcher,
}

impl ThemeSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click<P: PreferenceStore>(
        &self,
        state: &mut ThemeState<P>,
        root: &mut ClassList,
        button_label: Option<&mut String>,
    ) -> Result<ThemeMode> {
        state.toggle()?;
        self.pre.apply(state, root, button_label)
    }
}
