//! Barfly relay process.
//!
//! Environment:
//! - `PORT`: listen port on `0.0.0.0` (default `10000`)
//! - `RELAY_IDLE_SESSION_TTL_SECS`: drop sessions with no connections
//!   after this many seconds (unset: keep them for the process lifetime)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::time::Duration;

use barfly::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_PORT: u16 = 10000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.trim().parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };

    let mut registry_config = RegistryConfig::default();
    if let Ok(raw) = std::env::var("RELAY_IDLE_SESSION_TTL_SECS") {
        let secs: u64 = raw.trim().parse()?;
        registry_config.idle_session_ttl = Some(Duration::from_secs(secs));
    }

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(%addr, "starting Barfly relay");

    let server = RelayServer::builder()
        .bind(&addr)
        .registry_config(registry_config)
        .build()
        .await?;

    server.run().await?;
    Ok(())
}
