use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use calnotes_server::AppState;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 5000;

#[derive(Parser)]
#[command(name = "calnotes-server")]
#[command(about = "Serve the calnotes notes API from a SQLite database")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// SQLite database file (created if missing)
    #[arg(long, default_value = "notes.db")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calnotes_server=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    let state = AppState::open(&args.database)
        .with_context(|| format!("Failed to open database {}", args.database.display()))?;
    tracing::info!(database = %args.database.display(), "using database");

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("calnotes-server listening on http://{}", addr);

    calnotes_server::serve(listener, state).await?;

    Ok(())
}
