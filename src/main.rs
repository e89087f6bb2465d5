use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use docchat::OutputFormat;
use docchat::commands;
use docchat::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docchat")]
#[command(about = "CLI client for the DocChat document question-answering service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question about the loaded document
    Ask {
        #[arg(help = "Question text; omitted, the loaded example's suggested question is used")]
        question: Option<String>,
        #[arg(long, help = "Take the suggested question from this example")]
        example: Option<String>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Upload a local document into the session
    Upload {
        #[arg(help = "Path to the document (.txt, .pdf, .docx, .md)")]
        path: PathBuf,
    },
    /// Built-in example documents
    Example(ExampleArgs),
    /// Session state
    Session(SessionArgs),
    /// Configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ExampleArgs {
    #[command(subcommand)]
    action: ExampleAction,
}

#[derive(Subcommand)]
enum ExampleAction {
    /// List the examples catalog
    List {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Load an example document into the session
    Load {
        #[arg(help = "Example ID (see 'example list')")]
        id: String,
    },
}

#[derive(Args)]
struct SessionArgs {
    #[command(subcommand)]
    action: SessionAction,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Show the current session and loaded document
    Show,
    /// Clear the session
    Reset,
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = config::load().unwrap_or_else(|_| {
        // Missing config file is fine; defaults point at localhost
        eprintln!("Warning: no config found, using defaults. Run 'docchat config set ...'");
        config::Config::default()
    });

    match &cli.command {
        Commands::Ask {
            question,
            example,
            format,
        } => {
            tokio::runtime::Runtime::new()?.block_on(commands::ask::ask(
                &config,
                question.clone(),
                example.clone(),
                *format,
            ))?;
        }
        Commands::Upload { path } => {
            tokio::runtime::Runtime::new()?.block_on(commands::document::upload(&config, path))?;
        }
        Commands::Example(example_args) => match &example_args.action {
            ExampleAction::List { format } => commands::examples::list(*format)?,
            ExampleAction::Load { id } => {
                tokio::runtime::Runtime::new()?
                    .block_on(commands::document::load_example(&config, id))?;
            }
        },
        Commands::Session(session_args) => match &session_args.action {
            SessionAction::Show => commands::session::show(&config)?,
            SessionAction::Reset => commands::session::reset(&config)?,
        },
        Commands::Config(config_args) => match &config_args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
