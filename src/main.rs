//! seedkv - A single-node in-memory key-value store over HTTP
//!
//! Usage: `seedkv [PORT] [--host ADDR] [--handlers stub|live]`

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seedkv::{server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seedkv=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_args();
    info!(
        "Configuration loaded: host={}, port={}, handlers={}",
        config.host, config.port, config.handlers
    );

    server::run(config).await
}
