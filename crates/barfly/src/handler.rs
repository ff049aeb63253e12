//! Per-connection handler.
//!
//! Each accepted connection gets its own Tokio task running this handler
//! plus a writer task. The flow is:
//!   1. Open an outbound channel and spawn the writer draining it
//!   2. Loop: receive text frames -> route them under the registry lock
//!   3. On exit the guard drops the connection from the registry

use std::sync::Arc;

use barfly_router::ConnectionMeta;
use barfly_session::{Frame, Peer};
use barfly_transport::{Connection, ConnectionId, WebSocketConnection};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::server::ServerState;
use crate::RelayError;

/// Drop guard that removes a connection from the registry when its
/// handler exits, including on panic. `Drop` is synchronous, so the
/// async lock is taken in a spawned task.
struct ConnectionGuard {
    conn_id: ConnectionId,
    state: Arc<ServerState>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        let conn_id = self.conn_id;
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let mut registry = state.registry.lock().await;
            if let Some(key) = registry.disconnect(conn_id) {
                tracing::debug!(%conn_id, session = %key, "connection unregistered");
            }
        });
    }
}

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection(
    conn: WebSocketConnection,
    state: Arc<ServerState>,
) -> Result<(), RelayError> {
    let conn = Arc::new(conn);
    let conn_id = conn.id();
    tracing::debug!(%conn_id, "handling new connection");

    let (peer, outbound) = Peer::channel(conn_id);
    let writer = spawn_writer(Arc::clone(&conn), outbound);
    let _guard = ConnectionGuard {
        conn_id,
        state: Arc::clone(&state),
    };

    let mut meta = ConnectionMeta::default();
    let result = loop {
        let text = match conn.recv().await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::info!(%conn_id, "connection closed");
                break Ok(());
            }
            Err(e) => break Err(RelayError::Transport(e)),
        };

        let routed = {
            let mut registry = state.registry.lock().await;
            state.router.route(&mut registry, &peer, &mut meta, &text)
        };
        match routed {
            Ok(outcome) => tracing::trace!(%conn_id, ?outcome, "frame routed"),
            Err(e) => tracing::debug!(%conn_id, error = %e, "frame not routed"),
        }
    };

    writer.abort();
    // _guard drops here -> registry disconnect fires.
    result
}

/// Forwards queued frames to the socket until the channel closes or a
/// send fails.
fn spawn_writer(
    conn: Arc<WebSocketConnection>,
    mut outbound: UnboundedReceiver<Frame>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            if let Err(e) = conn.send(&frame).await {
                tracing::debug!(conn_id = %conn.id(), error = %e, "send failed");
                break;
            }
        }
    })
}
