//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  chat-catalog models                    List models with context size and prices
  chat-catalog models --query claude     Only models whose tag contains \"claude\"
  chat-catalog model gpt-5               Context size and prices for one model
  chat-catalog languages                 List code highlighting languages
  chat-catalog new-chat --title Notes    Print a new default chat as JSON
  chat-catalog new-chat -m gpt-5-mini    New chat using another model
  chat-catalog config                    Show the resolved chat defaults
  chat-catalog completions bash          Generate bash completions

ENVIRONMENT:
  DEFAULT_SYSTEM_MESSAGE   Replaces the built-in system message (also read from .env)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Model catalog and default chat settings",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List supported models with context size and prices
    Models {
        /// Filter models by tag
        #[arg(long)]
        query: Option<String>,
    },
    /// Show context size and prices for one model
    Model {
        /// Model tag (e.g. gemini-2.5-pro)
        tag: String,
    },
    /// List languages available for code highlighting
    Languages {
        /// Only report whether this tag is supported
        tag: Option<String>,
    },
    /// Print a new chat built from the current defaults
    NewChat {
        /// Chat title (defaults to "New Chat")
        #[arg(short, long)]
        title: Option<String>,
        /// Folder the chat belongs to
        #[arg(short, long)]
        folder: Option<String>,
        /// Model tag to use instead of the default (e.g. claude-3.5-haiku)
        #[arg(short, long)]
        model: Option<String>,
        /// System message to use instead of the configured default ("" for none)
        #[arg(long)]
        system: Option<String>,
    },
    /// Show the default system message and chat config
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
