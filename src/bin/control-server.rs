//! Control server: status page plus a shutdown button.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use ping_pong::config::load_control_config;
use ping_pong::control;
use ping_pong::http::HttpServer;
use ping_pong::lifecycle::{spawn_signal_listener, Shutdown};
use ping_pong::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "control-server")]
#[command(about = "Server with a manual shutdown button", long_about = None)]
struct Cli {
    /// TOML config file. Every setting has a default.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();
    let cli = Cli::parse();

    let mut config = load_control_config(cli.config.as_deref())
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind.to_string();
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "server started");

    let shutdown = Shutdown::new();
    let signals = spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(control::router(shutdown.clone()), config.shutdown.grace_period());
    let outcome = server.run(listener, shutdown).await?;
    signals.abort();

    tracing::info!(?outcome, "Shutdown complete");
    Ok(())
}
