//! CLI entry point for the usergraph HTTP API.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use usergraph_core::config::{Settings, DEFAULT_CONFIG_PREFIX};
use usergraph_graph::{GraphClient, GraphConfig};
use usergraph_server::AppState;

#[derive(Parser)]
#[command(name = "usergraph-server")]
#[command(about = "HTTP API over the User label of a Neo4j graph")]
struct Cli {
    /// Config file prefix (default: usergraph).
    #[arg(short, long, default_value = DEFAULT_CONFIG_PREFIX)]
    config: String,

    /// Override the listen address from config (e.g., 127.0.0.1:3000).
    #[arg(short, long)]
    bind: Option<String>,

    /// Also run the interactive menu against this server.
    #[arg(long)]
    console: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .json()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    let graph_config = GraphConfig::from(settings.neo4j);
    let graph = GraphClient::connect(&graph_config).await?;
    match graph.ping().await {
        Ok(value) => tracing::info!(uri = %graph_config.uri, value, "Connected to Neo4j"),
        Err(e) => {
            tracing::warn!(uri = %graph_config.uri, error = %e, "Neo4j connectivity check failed")
        }
    }

    let bind = cli.bind.unwrap_or(settings.server.bind);
    let listener = TcpListener::bind(&bind).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Server listening");

    let state = AppState::new(graph);

    if cli.console {
        let server = tokio::spawn(usergraph_server::serve(listener, state));
        let base_url = format!("http://{addr}");
        tokio::task::spawn_blocking(move || usergraph_console::run_stdio(&base_url)).await??;
        server.abort();
        return Ok(());
    }

    usergraph_server::serve(listener, state).await?;
    Ok(())
}
