//! # CLI Behavior
//!
//! This is **one possible UI client** for folio. The CLI is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`folio`)
//!
//! Running `folio` with no arguments lists the posts, like `folio list`.
//!
//! ## Scaffolding (`folio new`)
//!
//! Asks for title, slug, description, image URL and tags, one line each, then writes
//! `{YYYY-MM-DD}-{slug}.md` into the posts directory. Answers are read from stdin, so
//! `folio new < answers.txt` works too. An existing post is never replaced without
//! `--force`.
//!
//! ## Logging
//!
//! Log output goes to stderr through `env_logger`. The level comes from `FOLIO_LOG`
//! (default `warn`); `-v` raises it to `debug`.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `prompt`: Interactive questions for `folio new`
//! - `render`: Output formatting (lists, key/value tables, messages)
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod prompt;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
