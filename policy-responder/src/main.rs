//! Policy Responder Service - Main Entry Point

use anyhow::{Context, Result};
use policy_responder::{create_app, AppState, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse_config();

    init_tracing(config.log_json);

    info!("Starting Policy Responder Service (mock mode)");

    let state = AppState::new(&config);
    let app = create_app(state);

    let bind_addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!("Policy Responder listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .context("Server failed to start")?;

    Ok(())
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,policy_responder=debug,tower_http=info"));

    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
