//! `RelayServer` builder and accept loop.
//!
//! Ties the layers together: transport -> protocol -> router -> registry.

use std::sync::Arc;
use std::time::Instant;

use barfly_router::Router;
use barfly_session::{RegistryConfig, SessionRegistry};
use barfly_transport::WebSocketTransport;
use tokio::sync::Mutex;

use crate::handler::handle_connection;
use crate::RelayError;

/// Shared state handed to every connection task.
///
/// The registry sits behind one lock; routing a frame holds it only for
/// the synchronous fan-out, never across socket I/O.
pub(crate) struct ServerState {
    pub(crate) registry: Mutex<SessionRegistry>,
    pub(crate) router: Router,
}

/// Builder for configuring and starting a relay.
///
/// # Example
///
/// ```rust,no_run
/// use barfly::prelude::*;
///
/// # async fn start() -> Result<(), RelayError> {
/// let server = RelayServer::builder()
///     .bind("0.0.0.0:10000")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct RelayServerBuilder {
    bind_addr: String,
    registry_config: RegistryConfig,
}

impl RelayServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:10000".to_string(),
            registry_config: RegistryConfig::default(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the registry configuration (idle-session expiry).
    pub fn registry_config(mut self, config: RegistryConfig) -> Self {
        self.registry_config = config;
        self
    }

    /// Binds the listener. Uses `JsonCodec` and `WebSocketTransport`.
    pub async fn build(self) -> Result<RelayServer, RelayError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;

        let state = Arc::new(ServerState {
            registry: Mutex::new(SessionRegistry::new(self.registry_config)),
            router: Router::default(),
        });

        Ok(RelayServer { transport, state })
    }
}

impl Default for RelayServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound relay server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct RelayServer {
    transport: WebSocketTransport,
    state: Arc<ServerState>,
}

impl RelayServer {
    /// Creates a new builder.
    pub fn builder() -> RelayServerBuilder {
        RelayServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the accept loop, spawning a handler task per connection.
    ///
    /// The WebSocket upgrade runs inside the spawned task, so a peer
    /// that stalls mid-handshake never holds up later connections.
    ///
    /// Also starts the idle-session sweeper when the registry has a TTL.
    /// Runs until the process is terminated.
    pub async fn run(mut self) -> Result<(), RelayError> {
        tracing::info!("Barfly relay running");
        self.spawn_sweeper().await;

        loop {
            match self.transport.accept_pending().await {
                Ok(pending) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        let peer_addr = pending.peer_addr();
                        let conn = match pending.upgrade().await {
                            Ok(conn) => conn,
                            Err(e) => {
                                tracing::debug!(
                                    %peer_addr,
                                    error = %e,
                                    "handshake failed"
                                );
                                return;
                            }
                        };
                        if let Err(e) = handle_connection(conn, state).await {
                            tracing::debug!(
                                error = %e,
                                "connection ended with error"
                            );
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }

    async fn spawn_sweeper(&self) {
        let config = self.state.registry.lock().await.config().clone();
        let Some(ttl) = config.idle_session_ttl else {
            return;
        };
        if config.sweep_interval.is_zero() {
            tracing::warn!("sweep interval is zero, idle-session expiry disabled");
            return;
        }
        tracing::info!(
            ttl_secs = ttl.as_secs(),
            sweep_secs = config.sweep_interval.as_secs(),
            "idle-session expiry enabled"
        );

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config.sweep_interval);
            loop {
                ticker.tick().await;
                let expired = state.registry.lock().await.expire_idle(Instant::now());
                if !expired.is_empty() {
                    tracing::debug!(count = expired.len(), "idle sweep finished");
                }
            }
        });
    }
}
