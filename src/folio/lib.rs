//! # Folio Architecture
//!
//! Folio holds the reader-facing behaviors of a static blog (search, theme flag,
//! contents table, code labels, share button, compact header) and the post
//! scaffolder used by authors. It is a **library that happens to have a CLI client**:
//! every behavior is plain Rust over explicit interfaces, and the page, the
//! preference store and the prompt are collaborators handed in from outside.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Scaffolding, search over posts, theme flag, config       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components (components/*.rs)                               │
//! │  - Page behaviors over the stand-ins in dom.rs              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Collaborators                                              │
//! │  - source/: ArticleSource (PostsDir, StaticSource)          │
//! │  - store/:  PreferenceStore (FileStore, InMemoryStore)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Page components never look anything up on their own: the article list,
//! the class lists and the preference store are passed in at construction or per
//! event. A missing piece of page markup is modelled as `None` and disables the
//! component without an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each CLI command
//! - [`components`]: Search engine and the one-shot page behaviors
//! - [`dom`]: Class lists and list views standing in for page elements
//! - [`source`]: Article enumeration
//! - [`store`]: Key-value preference storage
//! - [`model`]: Core data types (`ArticleRecord`, `PostDetails`, `ThemeMode`)
//! - [`slug`]: Kebab-case, tag splitting and heading-id helpers
//! - [`frontmatter`]: Front matter parsing for posts on disk
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod frontmatter;
pub mod model;
pub mod slug;
pub mod source;
pub mod store;
