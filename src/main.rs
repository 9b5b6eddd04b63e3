mod commands;
mod render;
mod utils;

use anyhow::Result;
use calnotes_core::HttpClient;
use calnotes_core::config::ClientConfig;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calnotes")]
#[command(about = "Keep short notes on calendar days")]
struct Cli {
    /// Notes API base URL (overrides config file and CALNOTES_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive notes app (default)
    App,
    /// List the notes of a day
    List {
        /// Day to list (YYYY-MM-DD, today, tomorrow, yesterday)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Add a note
    Add {
        /// Note title
        title: String,

        /// Note description
        #[arg(long, default_value = "")]
        description: String,

        /// Day the note belongs to (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Change the title, description or day of a note
    Edit {
        /// Note id (shown by `calnotes list`)
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Move the note to another day
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note id (shown by `calnotes list`)
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    let client = connect(cli.api_url)?;

    match cli.command.unwrap_or(Commands::App) {
        Commands::App => commands::app::run(&client).await,
        Commands::List { date } => {
            let date = resolve_day(date.as_deref())?;
            commands::list::run(&client, date).await
        }
        Commands::Add {
            title,
            description,
            date,
        } => {
            let date = resolve_day(date.as_deref())?;
            commands::add::run(&client, title, description, date).await
        }
        Commands::Edit {
            id,
            title,
            description,
            date,
        } => {
            let date = date.as_deref().map(|d| resolve_day(Some(d))).transpose()?;
            commands::edit::run(&client, id, title, description, date).await
        }
        Commands::Delete { id } => commands::delete::run(&client, id).await,
    }
}

/// Build the API client from config, with `--api-url` taking precedence.
fn connect(api_url: Option<String>) -> Result<HttpClient> {
    let api_url = match api_url {
        Some(url) => url,
        None => ClientConfig::load()?.api_url,
    };
    tracing::debug!(%api_url, "using notes API");
    Ok(HttpClient::new(api_url))
}

/// Parse a day argument, defaulting to today.
fn resolve_day(input: Option<&str>) -> Result<NaiveDate> {
    let today = calnotes_core::date::today();
    match input {
        Some(s) => Ok(calnotes_core::date::parse_day(s, today)?),
        None => Ok(today),
    }
}
