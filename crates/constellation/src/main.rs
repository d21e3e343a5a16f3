use anyhow::{Context, Result};
use clap::Parser;
use constellation_models::config::BrainConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "constellation", about = "Constellation brain optimization cycle")]
struct Cli {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// API token placed in the Authorization header
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Print the full cycle report instead of the summary counts
    #[arg(long)]
    report: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Stage progress is logged at info; RUST_LOG overrides
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config_str = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {path}"))?;
            toml::from_str::<BrainConfig>(&config_str)
                .with_context(|| "Failed to parse config")?
        }
        None => BrainConfig::default(),
    };

    let brain = constellation::build_brain(&config, cli.token);
    tracing::debug!(
        collectors = brain.collector_count(),
        authenticated = brain.credentials().has_token(),
        "Brain ready"
    );

    let report = constellation::think(&brain)
        .await
        .map_err(|e| anyhow::anyhow!("Optimization cycle failed: {e}"))?;

    let output = match (cli.report, cli.pretty) {
        (true, true) => serde_json::to_string_pretty(&report)?,
        (true, false) => serde_json::to_string(&report)?,
        (false, true) => serde_json::to_string_pretty(&report.summary())?,
        (false, false) => serde_json::to_string(&report.summary())?,
    };
    println!("{output}");

    Ok(())
}
