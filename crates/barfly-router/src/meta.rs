//! Per-connection state captured at join time.

use barfly_protocol::Role;

/// What the relay remembers about a connection after `join`.
///
/// Messages that omit `roomId`/`session` are routed with these values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionMeta {
    /// `None` until the connection joins.
    pub role: Option<Role>,
    pub room_id: Option<String>,
    pub session_id: Option<String>,
    pub client_nonce: Option<String>,
}

impl ConnectionMeta {
    pub fn is_host(&self) -> bool {
        self.role == Some(Role::Host)
    }
}
