//! # CLI Layer
//!
//! The only place in folio that knows about stdout, stderr, stdin and logging setup.
//!
//! 1. **Argument Parsing**: shell arguments to typed commands via clap
//! 2. **Context Setup**: builds the API over `.folio/` and the posts directory
//! 3. **API Dispatch**: calls the matching `FolioApi` method
//! 4. **Output Formatting**: turns the `CmdResult` into terminal output
//!
//! Business logic is not tested here; that's the command layer's job.

use super::prompt::Prompter;
use super::render::{
    print_messages, render_article_list, render_code_labels, render_config, render_contents,
    render_header, render_share,
};
use super::setup::{
    print_grouped_help, print_help_for_command, subcommand_name, Cli, Commands, ThemeArg,
};
use chrono::Utc;
use clap::Parser;
use folio::api::{ConfigAction, FolioApi, FolioPaths, ThemeAction};
use folio::error::Result;
use folio::model::ThemeMode;
use folio::source::posts::PostsDir;
use folio::store::fs::FileStore;
use log::debug;
use std::io;
use std::path::PathBuf;

const LOG_ENV: &str = "FOLIO_LOG";

struct AppContext {
    api: FolioApi<FileStore, PostsDir>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(subcommand_name(command)),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    if let Some(Commands::Help { command }) = &cli.command {
        match command {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New { output_dir, force }) => handle_new(&ctx, output_dir, force),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Search { query }) => handle_search(&ctx, query.join(" ")),
        Some(Commands::Theme { action }) => handle_theme(&mut ctx, action),
        Some(Commands::Toc { file }) => handle_toc(&ctx, file),
        Some(Commands::Labels { file }) => handle_labels(&ctx, file),
        Some(Commands::Share { url, native }) => handle_share(&ctx, url, native),
        Some(Commands::Scroll { offset }) => handle_scroll(&ctx, offset),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Help { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().filter_or(LOG_ENV, default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let paths = FolioPaths::new(cwd);
    let config = paths.config()?;

    let posts_dir = paths.posts_dir(&config);
    debug!("Blog root {}, posts in {}", paths.root.display(), posts_dir.display());

    let store = FileStore::new(paths.folio_dir.clone());
    let source = PostsDir::new(posts_dir);
    Ok(AppContext {
        api: FolioApi::new(store, source, paths),
    })
}

fn handle_new(ctx: &AppContext, output_dir: Option<PathBuf>, force: bool) -> Result<()> {
    let stdin = io::stdin();
    let answers = Prompter::new(stdin.lock(), io::stdout()).ask_post()?;
    let today = Utc::now().date_naive();

    let result = ctx
        .api
        .new_post(output_dir.as_deref(), answers, today, force)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print!(
        "{}",
        render_article_list(&result.listed_articles, Utc::now().date_naive())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    let result = ctx.api.search(&query)?;
    print!(
        "{}",
        render_article_list(&result.listed_articles, Utc::now().date_naive())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, action: ThemeArg) -> Result<()> {
    let action = match action {
        ThemeArg::Show => ThemeAction::Show,
        ThemeArg::Toggle => ThemeAction::Toggle,
        ThemeArg::Light => ThemeAction::Set(ThemeMode::Light),
        ThemeArg::Dark => ThemeAction::Set(ThemeMode::Dark),
    };

    let result = ctx.api.theme(action)?;
    if result.messages.is_empty() {
        if let Some(mode) = result.theme {
            println!("{}", mode);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_toc(ctx: &AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.contents(&file)?;
    print!("{}", render_contents(&result.contents));
    print_messages(&result.messages);
    Ok(())
}

fn handle_labels(ctx: &AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.code_labels(&file)?;
    print!("{}", render_code_labels(&result.code_labels));
    print_messages(&result.messages);
    Ok(())
}

fn handle_share(ctx: &AppContext, url: String, native: bool) -> Result<()> {
    let result = ctx.api.share(&url, native)?;
    if let Some(action) = &result.share {
        print!("{}", render_share(action));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_scroll(ctx: &AppContext, offset: f64) -> Result<()> {
    let result = ctx.api.scroll(offset)?;
    if let Some(header) = &result.header {
        print!("{}", render_header(header));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let showing_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if showing_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
