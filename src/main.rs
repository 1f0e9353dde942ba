use std::sync::Arc;

use anyhow::Context;
use healthcare_chatbot::{
    config::AppConfig, routes, services::gemini::GeminiClient, state::AppState,
};
use tower_http::cors::CorsLayer;
use tracing::{Level, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_max_level(if config.debug { Level::DEBUG } else { Level::INFO })
        .init();

    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set, every model call will fail");
    }

    let client = GeminiClient::new(config.gemini.clone()).context("building Gemini client")?;
    info!(model = client.model(), "Gemini client ready");

    let state = Arc::new(AppState::new(Arc::new(client)));

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("binding {}:{}", config.host, config.port))?;

    info!(
        "🩺 Dr.Chat running at http://{}",
        listener.local_addr().context("reading local address")?
    );
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
