// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use paper_desk::utils::logging::{format_error, format_success};
use paper_desk::{ApiResponse, Config, ViewerService};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "paper_desk")]
#[command(version = "0.1.0")]
#[command(about = "Document viewer backend for scanned exam papers", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered papers grouped by exam sitting
    List,

    /// Extract and reconstruct the text of one paper
    Content {
        doc_id: String,
    },

    /// One-off dictionary lookup
    Lookup {
        word: String,
    },

    /// Vocabulary list operations
    Vocab {
        #[command(subcommand)]
        command: VocabCommands,
    },

    /// Per-document essay draft
    Essay {
        #[command(subcommand)]
        command: EssayCommands,
    },

    /// Per-document annotation strokes
    Annotations {
        #[command(subcommand)]
        command: AnnotationCommands,
    },
}

#[derive(Subcommand)]
enum VocabCommands {
    /// Add a word, fetching its definition
    Add { word: String },

    /// Page through the saved list, newest first
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// Remove an entry by id
    Remove { id: String },
}

#[derive(Subcommand)]
enum EssayCommands {
    /// Print the saved draft
    Show { doc_id: String },

    /// Replace the draft with a file's contents
    Save {
        doc_id: String,

        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum AnnotationCommands {
    /// Print the saved strokes
    Show { doc_id: String },

    /// Replace the strokes with a JSON file's contents
    Save {
        doc_id: String,

        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    paper_desk::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Exam paper viewer backend");

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let service = ViewerService::new(config)
        .await
        .context("Failed to initialize backend services")?;

    match cli.command {
        Commands::List => {
            print_envelope(&service.list_documents())?;
        }
        Commands::Content { doc_id } => {
            print_envelope(&service.get_content(&doc_id))?;
        }
        Commands::Lookup { word } => {
            print_envelope(&service.lookup_word(&word).await)?;
        }
        Commands::Vocab { command } => match command {
            VocabCommands::Add { word } => {
                print_envelope(&service.add_vocabulary(&word).await)?;
            }
            VocabCommands::List { page, limit } => {
                print_envelope(&service.list_vocabulary(page, limit).await)?;
            }
            VocabCommands::Remove { id } => {
                print_envelope(&service.delete_vocabulary(&id).await)?;
            }
        },
        Commands::Essay { command } => match command {
            EssayCommands::Show { doc_id } => {
                print_envelope(&service.get_essay(&doc_id).await)?;
            }
            EssayCommands::Save { doc_id, file } => {
                let content = std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                print_envelope(&service.save_essay(&doc_id, &content).await)?;
            }
        },
        Commands::Annotations { command } => match command {
            AnnotationCommands::Show { doc_id } => {
                print_envelope(&service.get_annotations(&doc_id).await)?;
            }
            AnnotationCommands::Save { doc_id, file } => {
                let contents = std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                let strokes: Vec<Value> = serde_json::from_str(&contents)
                    .with_context(|| format!("{} is not a JSON stroke array", file.display()))?;
                print_envelope(&service.save_annotations(&doc_id, &strokes).await)?;
            }
        },
    }

    Ok(())
}

fn print_envelope<T: Serialize>(response: &ApiResponse<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);

    if response.is_success() {
        eprintln!("{}", format_success("ok"));
    } else {
        eprintln!("{}", format_error(&format!("failed with code {}", response.code)));
    }

    Ok(())
}
