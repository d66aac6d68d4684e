//! Command handlers: logger init and one function per subcommand.

use std::error::Error;
use std::io;

use clap::CommandFactory;

use crate::cli::{self, Args};
use crate::core::chat::generate_default_chat;
use crate::core::config::{Config, SystemMessageSource};
use crate::core::defaults::{DefaultsSource, DefaultsStore};
use crate::core::languages::{CODE_LANGUAGE_SUBSET, bundled_grammar, is_supported};
use crate::core::models::{self, ModelCost, ModelId, ModelIdError, UnitPrice};

/// Initialize env_logger on stderr so command output on stdout stays clean.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

fn format_price(p: &UnitPrice) -> String {
    format!("${} / {} tokens", p.price, p.unit)
}

fn format_cost(c: &ModelCost) -> String {
    format!(
        "prompt {}, completion {}",
        format_price(&c.prompt),
        format_price(&c.completion)
    )
}

/// Print the catalog, one model per line.
pub fn run_models(query: Option<&str>) {
    let selected = models::filter_models(query.unwrap_or(""));
    if selected.is_empty() {
        log::info!("No model matches {:?}", query);
        return;
    }
    for model in selected {
        let (Some(context), Some(cost)) = (models::max_tokens(model), models::cost(model)) else {
            log::warn!("{} is missing from the catalog tables", model);
            continue;
        };
        let marker = if model == models::DEFAULT_MODEL {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<20} {:<8} context {:>10}  {}{}",
            model.as_str(),
            model.vendor(),
            context,
            format_cost(cost),
            marker
        );
    }
}

/// Print context size and prices for one model tag.
pub fn run_model(tag: &str) -> Result<(), ModelIdError> {
    let unknown = || ModelIdError::UnknownModel(tag.to_string());
    let context = models::max_tokens_for(tag).ok_or_else(unknown)?;
    let cost = models::cost_for(tag).ok_or_else(unknown)?;
    println!("model:      {}", tag);
    println!("context:    {} tokens", context);
    println!("prompt:     {}", format_price(&cost.prompt));
    println!("completion: {}", format_price(&cost.completion));
    Ok(())
}

/// Print each highlighting language and the grammar that renders it.
/// With a tag, report only that tag; returns false when it is not supported.
pub fn run_languages(tag: Option<&str>) -> bool {
    if let Some(tag) = tag {
        if !is_supported(tag) {
            eprintln!("'{}' is not a supported highlighting language", tag);
            return false;
        }
        print_language(tag);
        return true;
    }
    for tag in CODE_LANGUAGE_SUBSET {
        print_language(tag);
    }
    true
}

fn print_language(tag: &str) {
    match bundled_grammar(tag) {
        Some(grammar) => println!("{:<14} {}", tag, grammar),
        None => println!("{:<14} (plain text)", tag),
    }
}

/// Options for `new-chat`, straight from the command line.
pub struct NewChatArgs<'a> {
    pub title: Option<&'a str>,
    pub folder: Option<&'a str>,
    pub model: Option<&'a str>,
    pub system: Option<&'a str>,
}

/// Print a new chat as pretty JSON.
///
/// `model` and `system` adjust the defaults before the chat is created, the way a user
/// setting would.
pub fn run_new_chat(config: &Config, args: NewChatArgs<'_>) -> Result<(), Box<dyn Error>> {
    let mut store = DefaultsStore::seeded(config);
    if let Some(tag) = args.model {
        let model: ModelId = tag.parse()?;
        store.default_chat_config_mut().model = model;
    }
    if let Some(system) = args.system {
        store.set_default_system_message(system);
    }
    let chat = generate_default_chat(&store, args.title, args.folder);
    println!("{}", serde_json::to_string_pretty(&chat)?);
    Ok(())
}

/// Show where the default system message came from and the default chat config.
pub fn run_config(config: &Config) -> Result<(), Box<dyn Error>> {
    let store = DefaultsStore::seeded(config);
    let source = match config.system_message_source {
        SystemMessageSource::Builtin => "built-in",
        SystemMessageSource::Environment => "DEFAULT_SYSTEM_MESSAGE",
    };
    println!("System message ({}):", source);
    let message = store.default_system_message();
    if message.is_empty() {
        println!("  (empty, new chats start without a system message)");
    } else {
        for line in message.lines() {
            println!("  {}", line);
        }
    }
    println!();
    println!("Chat config:");
    println!(
        "{}",
        serde_json::to_string_pretty(store.default_chat_config())?
    );
    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn run_completions(shell: clap_complete::Shell) {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    cli::generate(shell, &mut cmd, name, &mut io::stdout());
}
