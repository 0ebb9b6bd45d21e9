//! # Folio CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/folio/cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Post prompts (prompt.rs)                                 │
//! │  - Dispatch + context wiring (commands.rs)                  │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (folio::api)                                     │
//! │  - Resolves paths, loads config                             │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns argument parsing,
//! logging setup, prompting, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - Command and component logic: unit tests next to the code in the library.
//! - CLI rendering: canned data fed to the templates in `render.rs`.
//! - End to end: `tests/cli_integration.rs` drives the built binary in a temp dir.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
