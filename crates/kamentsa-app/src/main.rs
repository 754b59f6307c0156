use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kamentsa_config::Config;
use kamentsa_config::log::LogConfig;
use kamentsa_core::language::TextValidator;
use kamentsa_lang::KamentsaProcessor;
use serde_json::json;
use tokio::signal;

pub mod events;
pub mod io;
pub mod state;


use self::events::{Request, handle_request};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "kamentsa", about = "Kamëntsá-Spanish lexicon validation and search")]
#[command(version)]
struct Cli {
    /// JSON config file; environment variables are used when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Lexicon file, overrides the configured one
    #[arg(long, global = true, env = "KAMENTSA_DICTIONARY_PATH")]
    dictionary: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check orthography and quality of a text
    Validate {
        text: String,
        /// Reference text for the relevance bonus
        #[arg(long)]
        context: Option<String>,
        /// Also print every quality factor
        #[arg(long)]
        explain: bool,
    },
    /// Find the first entry matching a query
    Search { query: String },
    /// Corrections and close headwords for a word
    Suggest { word: String },
    /// Spanish translation of a headword
    Translate { word: String },
    /// Look up each word of a text
    Lookup { text: String },
    /// Answer JSON-line requests from stdin
    Batch,
    /// Show lexicon metadata
    Info,
}

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    // stdout carries command output
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::new(),
    };
    if let Some(path) = &cli.dictionary {
        config.dictionary.path = Some(path.clone());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.log);

    // Reading the lexicon is the only blocking I/O
    let processor = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || KamentsaProcessor::from_config(&config))
            .await
            .context("Lexicon loader task failed")?
    };
    let state = Arc::new(AppState::new(config, processor));

    match cli.command {
        Command::Validate {
            text,
            context,
            explain,
        } => {
            let result = state.processor.validate_text(&text, context.as_deref());
            let output = if explain {
                json!({
                    "result": result,
                    "quality": state.processor.explain(&text, context.as_deref()),
                })
            } else {
                serde_json::to_value(result)?
            };
            print_json(&output)?;
        }
        Command::Search { query } => print_json(&handle_request(&state, Request::Search { query })?)?,
        Command::Suggest { word } => {
            print_json(&handle_request(&state, Request::Suggest { text: word })?)?
        }
        Command::Translate { word } => {
            print_json(&handle_request(&state, Request::Translate { word })?)?
        }
        Command::Lookup { text } => print_json(&handle_request(&state, Request::Lookup { text })?)?,
        Command::Info => print_json(&handle_request(&state, Request::Info)?)?,
        Command::Batch => {
            let reader = tokio::io::BufReader::new(tokio::io::stdin());
            let writer = tokio::io::stdout();

            tokio::select! {
                result = io::run_batch(Arc::clone(&state), reader, writer) => {
                    let stats = result?;
                    tracing::info!(
                        "Batch finished: {} handled, {} rejected",
                        stats.handled,
                        stats.rejected
                    );
                }
                _ = signal::ctrl_c() => {
                    tracing::info!("Shutdown requested");
                }
            }
        }
    }

    Ok(())
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
