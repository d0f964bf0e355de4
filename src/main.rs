//! Relay node.
//!
//! Reads its identity from `POD_NAME`, `NAMESPACE` and `SERVICE_NAME`,
//! serves `/ping` (and `/finish` on ordinal zero), and shuts down
//! gracefully on SIGINT/SIGTERM.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use ping_pong::config::{load_relay_config, NodeEnv};
use ping_pong::http::HttpServer;
use ping_pong::lifecycle::{spawn_signal_listener, Shutdown};
use ping_pong::observability::{logging, metrics};
use ping_pong::relay::{self, HttpTransport, NodeIdentity, PeerDirectory, RelayNode};

#[derive(Parser)]
#[command(name = "relay-node")]
#[command(about = "Ping-pong relay node", long_about = None)]
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

    let mut config = load_relay_config(cli.config.as_deref())
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind.to_string();
    }

    let env = NodeEnv::from_env().inspect_err(|e| tracing::error!(error = %e, "Missing pod identity"))?;
    let identity = NodeIdentity::parse(&env.pod_name)
        .inspect_err(|e| tracing::error!(error = %e, "Invalid pod identity"))?;

    tracing::info!(
        pod = %identity,
        index = identity.ordinal(),
        namespace = %env.namespace,
        service = %env.service_name,
        "Starting pod"
    );

    let peers = PeerDirectory::new(&identity, &env, &config.peers);
    let transport = HttpTransport::new(config.peers.request_timeout())?;
    let node = Arc::new(RelayNode::new(
        identity,
        peers,
        Arc::new(transport),
        config.relay.hop_delay(),
        config.relay.max_message_bytes,
    ));

    if config.observability.metrics_enabled {
        // Validated at load time.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let signals = spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(relay::router(node), config.shutdown.grace_period());
    server.run(listener, shutdown).await?;
    signals.abort();

    tracing::info!("Shutdown complete");
    Ok(())
}
