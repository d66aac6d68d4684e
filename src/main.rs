//! # chat-catalog
//!
//! Catalog of supported chat models (context limits and prices), the default
//! chat settings, and the factory that builds new chats from them.

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);
    log::debug!("{} {}", core::app::NAME, core::app::VERSION);

    // Resolved once; everything after this reads the resolved value
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result: Result<(), Box<dyn std::error::Error>> = match args.command {
        Commands::Models { query } => {
            run::run_models(query.as_deref());
            Ok(())
        }
        Commands::Model { tag } => run::run_model(&tag).map_err(Into::into),
        Commands::Languages { tag } => {
            if !run::run_languages(tag.as_deref()) {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::NewChat {
            title,
            folder,
            model,
            system,
        } => run::run_new_chat(
            &config,
            run::NewChatArgs {
                title: title.as_deref(),
                folder: folder.as_deref(),
                model: model.as_deref(),
                system: system.as_deref(),
            },
        ),
        Commands::Config => run::run_config(&config),
        Commands::Completions { shell } => {
            run::run_completions(shell);
            Ok(())
        }
    };

    // Print with Display, not Debug
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
