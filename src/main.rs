use anyhow::{Context, Result};
use clap::Parser;
use codeagentix_server::{logging, CodeAgentServer, ServiceConfig};
use std::net::SocketAddr;
use std::path::PathBuf;

/// CodeAgentix backend: LLM-backed code generation, simulated execution,
/// and refactoring over HTTP.
#[derive(Debug, Parser)]
#[command(name = "codeagentix-server", version, about)]
struct Cli {
    /// TOML configuration file; environment variables override its values
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides BIND_ADDR and the config file)
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.json_logs).context("failed to install tracing subscriber")?;

    let mut config =
        ServiceConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    CodeAgentServer::start(config).await
}
