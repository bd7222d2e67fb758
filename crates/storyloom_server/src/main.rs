use anyhow::Result;
use clap::Parser;
use storyloom_models::create_storyteller;
use storyloom_server::{ApiState, ServerConfig, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Storyloom interactive fiction API server", long_about = None)]
struct Args {
    /// Socket address to bind (overrides STORYLOOM_ADDR)
    #[arg(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env();
    if let Some(addr) = args.addr {
        config = config.with_addr(addr);
    }

    let storyteller = create_storyteller(&config.provider);
    info!(
        provider = storyteller.provider_name(),
        model = storyteller.model_name(),
        addr = %config.addr,
        "Starting Storyloom API server"
    );

    let router = create_router(ApiState::new(storyteller));
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
