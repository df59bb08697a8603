use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cosmos_core::Mode;
use cosmos_llm::GeminiClient;
use cosmos_server::config::ServerConfig;
use cosmos_server::InnerAppState;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    config.validate()?;
    let addr = config.addr()?;

    let loader = config.loader();
    let default_instructions = loader.load(Mode::Default);
    info!(
        "system instructions loaded: {} characters",
        default_instructions.chars().count()
    );

    let generator = GeminiClient::new(config.gemini_api_key.clone(), config.model.clone())
        .with_base_url(&config.gemini_base_url);
    info!("model: {}", generator.model());

    let state = Arc::new(InnerAppState {
        generator: Arc::new(generator),
        loader,
    });

    let listener = TcpListener::bind(addr).await?;
    info!("cosmos-server listening on http://{addr}");

    cosmos_server::serve(listener, state, &config.static_dir).await
}
