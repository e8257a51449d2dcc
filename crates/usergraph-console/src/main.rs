//! CLI entry point for the usergraph interactive menu.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use usergraph_core::config::{Settings, DEFAULT_CONFIG_PREFIX};

#[derive(Parser)]
#[command(name = "usergraph-console")]
#[command(about = "Interactive text menu for the usergraph HTTP API")]
struct Cli {
    /// Config file prefix (default: usergraph).
    #[arg(short, long, default_value = DEFAULT_CONFIG_PREFIX)]
    config: String,

    /// Override the API base URL from config.
    #[arg(short, long)]
    url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Menu output owns stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;
    let base_url = cli.url.unwrap_or(settings.console.base_url);

    usergraph_console::run_stdio(&base_url)?;
    Ok(())
}
