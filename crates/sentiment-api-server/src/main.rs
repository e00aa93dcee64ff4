use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sentiment_api_server::{
    build_router,
    config::Settings,
    services::{HuggingFaceClient, SentimentService},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::load()?;

    // Initialize logging
    init_tracing(&settings.logging.format);

    info!("🤖 Starting AI-Powered Sentiment Analysis API");
    info!(
        "Using: {} ({})",
        settings.provider.model_label, settings.provider.model
    );

    // Initialize services
    let sentiment_service = match HuggingFaceClient::from_config(&settings.provider) {
        Some(client) => {
            info!("✅ API token configured for {}", client.model());
            SentimentService::with_provider(Arc::new(client))
        }
        None => {
            warn!(
                "⚠️ No {} API token configured, /process_text will fail. \
                 Set APP__PROVIDER__API_TOKEN or HUGGINGFACE_API_TOKEN",
                settings.provider.name
            );
            SentimentService::unconfigured()
        }
    };

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    let app = build_router(AppState::new(settings, sentiment_service));

    info!("🎯 Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sentiment_api_server=debug"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if format.eq_ignore_ascii_case("pretty") {
        builder.pretty().init();
    } else {
        builder.json().init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
