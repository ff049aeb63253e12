//! Error types for the routing layer.

use barfly_protocol::ProtocolError;
use barfly_session::SessionError;

/// Why an inbound frame could not be routed.
///
/// None of these are reported to the sender; the handler logs them and
/// keeps reading.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The frame was not a JSON object, or a reply failed to encode.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The registry rejected the session identifiers.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Neither the frame nor the connection's join metadata names a
    /// room and session.
    #[error("no room/session for {kind} message")]
    Unroutable { kind: String },
}
