//! Travel Claim Engine HTTP server.
//!
//! Environment:
//! - `TRAVEL_CLAIM_CONFIG_DIR`: rate schedule directory; the built-in
//!   fiscal-year 2568 tables are used when unset.
//! - `TRAVEL_CLAIM_BIND`: listen address, default `127.0.0.1:8080`.
//! - `RUST_LOG`: log filter, default `info`.

use std::env;

use anyhow::Context;
use tracing::info;

use travel_claim_engine::api::{AppState, create_router};
use travel_claim_engine::config::ConfigLoader;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match env::var("TRAVEL_CLAIM_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(&dir)
            .with_context(|| format!("loading rate schedule from {}", dir))?,
        Err(_) => ConfigLoader::builtin(),
    };
    info!(
        schedule = %config.metadata().code,
        version = %config.metadata().version,
        effective_date = %config.metadata().effective_date,
        "Rate schedule ready"
    );

    let bind = env::var("TRAVEL_CLAIM_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {}", bind))?;
    info!(address = %bind, "Travel claim engine listening");

    axum::serve(listener, create_router(AppState::new(config)))
        .await
        .context("server terminated")?;

    Ok(())
}
