use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hookhouse")]
#[command(about = "Webhook to ClickHouse event bridge", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if std::env::var("HOOKHOUSE_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("HOOKHOUSE_CONFIG", config);
    }

    backend_bootstrap::run_standalone().await
}
