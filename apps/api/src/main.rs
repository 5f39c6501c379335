mod config;
mod errors;
mod linkedin;
mod mail;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::linkedin::LinkedInClient;
use crate::mail::transport::LettreMailer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting recruit-relay v{}", env!("CARGO_PKG_VERSION"));

    let publisher = LinkedInClient::new(
        config.linkedin_ugc_posts_url.clone(),
        config.linkedin_author_urn.clone(),
    );
    info!(
        "LinkedIn relay: {} as {}",
        config.linkedin_ugc_posts_url, config.linkedin_author_urn
    );

    let cors = cors_layer(&config)?;

    let state = AppState {
        config: config.clone(),
        mailer: Arc::new(LettreMailer),
        publisher: Arc::new(publisher),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Any origin unless `CORS_ALLOWED_ORIGIN` pins a single one.
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    match &config.cors_allowed_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .with_context(|| format!("CORS_ALLOWED_ORIGIN is not a valid origin: {origin}"))?;
            info!("CORS restricted to {:?}", origin);
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any))
        }
        None => Ok(CorsLayer::permissive()),
    }
}
