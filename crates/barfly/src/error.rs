//! Unified error type for the Barfly relay.

use barfly_protocol::ProtocolError;
use barfly_router::RouteError;
use barfly_session::SessionError;
use barfly_transport::TransportError;

/// Top-level error that wraps every crate-specific error, so `?` works
/// across layers when using the `barfly` crate directly.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Bind, accept, send or receive failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// A frame could not be routed.
    #[error(transparent)]
    Route(#[from] RouteError),
}
