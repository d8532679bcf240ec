// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use clap::Parser;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use viva::api::http::app_router;
use viva::config::VivaConfig;
use viva::state::AppState;

#[derive(Parser)]
#[command(name = "viva")]
#[command(about = "Voice interview assistant backend", long_about = None)]
struct Cli {
    /// Listen port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind host (overrides VIVA_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Directory holding the static client UI
    #[arg(long)]
    static_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = VivaConfig::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }

    // Set up logging before any async work
    let level = if cli.debug {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting viva backend");
    info!("Model: {}", config.model);
    info!("API key: {}", config.masked_api_key());
    if config.openai_api_key.is_none() {
        // Non-fatal: requests will fail at call time until the key is set.
        warn!("OPENAI_API_KEY is not set. Set it in your environment before deploying.");
    }

    let app_state = Arc::new(AppState::from_config(&config)?);

    let cors = if config.cors_origin == "*" {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = app_router(app_state, &config.static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
