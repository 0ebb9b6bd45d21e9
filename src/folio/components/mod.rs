//! # Page Components
//!
//! Each component reacts to one kind of page event and runs to completion before the
//! next one, so none of them hold locks or share mutable state. Whatever they need
//! from the page is passed in (see [`crate::dom`]); an optional piece of markup that
//! is absent disables the component, it never errors.
//!
//! - [`search`]: article search/filter over the index list
//! - [`theme`]: light/dark flag, applied before render and on button clicks
//! - [`experimental`]: the four-click experimental mode on the theme button
//! - [`scroll`]: compact header past a scroll threshold
//! - [`contents`]: in-page contents table from post headings
//! - [`code_label`]: language badges on code blocks
//! - [`share`]: native share or fallback share URL

pub mod code_label;
pub mod contents;
pub mod experimental;
pub mod scroll;
pub mod search;
pub mod share;
pub mod theme;
