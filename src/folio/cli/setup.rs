use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    bin_name = "folio",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Blog companion: post scaffolding and page behaviors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Author,
    Reader,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Author => "Author Commands:",
            CommandGroup::Reader => "Page Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "new" | "list" | "search" => Some(CommandGroup::Author),
            "theme" | "toc" | "labels" | "share" | "scroll" => Some(CommandGroup::Reader),
            "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Author, CommandGroup::Reader, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("folio {version}\n"));
    output.push_str("Blog companion: post scaffolding and page behaviors\n");
    output.push('\n');
    output.push_str("Usage: folio [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output (debug logging)\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn subcommand_name(command: &Commands) -> &'static str {
    match command {
        Commands::New { .. } => "new",
        Commands::List => "list",
        Commands::Search { .. } => "search",
        Commands::Theme { .. } => "theme",
        Commands::Toc { .. } => "toc",
        Commands::Labels { .. } => "labels",
        Commands::Share { .. } => "share",
        Commands::Scroll { .. } => "scroll",
        Commands::Config { .. } => "config",
        Commands::Init => "init",
        Commands::Help { .. } => "help",
    }
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Show,
    Toggle,
    Light,
    Dark,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new post (asks for title, slug, description, image, tags)
    #[command(alias = "n", display_order = 1)]
    New {
        /// Directory to write the post into (defaults to the configured posts dir)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Replace a post with the same file name
        #[arg(short, long)]
        force: bool,
    },

    /// List posts, newest first
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Filter posts by title and description
    #[command(display_order = 3)]
    Search {
        /// Query words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Show or change the stored light/dark preference
    #[command(display_order = 10)]
    Theme {
        #[arg(value_enum, default_value_t = ThemeArg::Show)]
        action: ThemeArg,
    },

    /// Print the contents table of a post
    #[command(display_order = 11)]
    Toc { file: PathBuf },

    /// Print the language badges of a post's code blocks
    #[command(display_order = 12)]
    Labels { file: PathBuf },

    /// Print what the share button does for a page URL
    #[command(display_order = 13)]
    Share {
        url: String,

        /// Act as if a native share sheet is available
        #[arg(long)]
        native: bool,
    },

    /// Show whether the header is compact at a scroll offset
    #[command(display_order = 14)]
    Scroll {
        /// Scroll offset in pixels
        #[arg(allow_negative_numbers = true)]
        offset: f64,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., posts-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create .folio/ and the posts directory
    #[command(display_order = 31)]
    Init,

    /// Print help for folio or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
