//! The session registry: every room, every session, every membership.
//!
//! `SessionRegistry` is a plain owned struct with no interior locking.
//! The server wraps it in a mutex and each inbound message is handled to
//! completion while the lock is held, so session state never interleaves.

use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use barfly_protocol::Role;
use barfly_transport::ConnectionId;

use crate::{Peer, RegistryConfig, Session, SessionError};

/// Identifies a session within the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub room_id: String,
    pub session_id: String,
}

impl SessionKey {
    pub fn new(room_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            session_id: session_id.into(),
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.room_id, self.session_id)
    }
}

/// A room and its sessions.
#[derive(Debug, Default)]
pub struct Room {
    sessions: HashMap<String, Session>,
}

impl Room {
    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.get(session_id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

/// Owns all rooms, sessions, and connection memberships.
///
/// Each connection belongs to at most one session at a time; the
/// membership index records which one so disconnects need only the id.
pub struct SessionRegistry {
    rooms: HashMap<String, Room>,
    memberships: HashMap<ConnectionId, SessionKey>,
    config: RegistryConfig,
}

impl SessionRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            rooms: HashMap::new(),
            memberships: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the session, creating the room and session if needed.
    ///
    /// # Errors
    /// [`SessionError::MissingIdentifier`] if either identifier is empty.
    pub fn get_or_create(
        &mut self,
        room_id: &str,
        session_id: &str,
    ) -> Result<&mut Session, SessionError> {
        validate_ids(room_id, session_id)?;

        let room = self.rooms.entry(room_id.to_owned()).or_insert_with(|| {
            tracing::info!(room_id, "room created");
            Room::default()
        });
        Ok(room
            .sessions
            .entry(session_id.to_owned())
            .or_insert_with(|| {
                tracing::info!(room_id, session_id, "session created");
                Session::new(room_id, session_id)
            }))
    }

    pub fn session(&self, room_id: &str, session_id: &str) -> Option<&Session> {
        self.rooms.get(room_id)?.session(session_id)
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    /// Registers a connection under `role` in the given session.
    ///
    /// If the connection was already a member of some session (a
    /// repeated `join`), it is removed from there first.
    pub fn register_connection(
        &mut self,
        room_id: &str,
        session_id: &str,
        role: Role,
        peer: &Peer,
    ) -> Result<&mut Session, SessionError> {
        validate_ids(room_id, session_id)?;

        self.disconnect(peer.id());
        self.memberships
            .insert(peer.id(), SessionKey::new(room_id, session_id));

        let session = self.get_or_create(room_id, session_id)?;
        session.register_connection(role, peer);
        tracing::info!(
            conn_id = %peer.id(),
            room_id,
            session_id,
            %role,
            "connection joined"
        );
        Ok(session)
    }

    /// Removes a connection from every role set of one session.
    ///
    /// Idempotent; unknown sessions or connections are ignored.
    pub fn remove_connection(
        &mut self,
        room_id: &str,
        session_id: &str,
        id: ConnectionId,
    ) -> bool {
        let removed = self
            .rooms
            .get_mut(room_id)
            .and_then(|room| room.sessions.get_mut(session_id))
            .is_some_and(|session| session.remove_connection(id));
        if self
            .memberships
            .get(&id)
            .is_some_and(|key| key.room_id == room_id && key.session_id == session_id)
        {
            self.memberships.remove(&id);
        }
        removed
    }

    /// Removes a connection from whichever session it joined.
    ///
    /// Returns the session it was removed from, if any.
    pub fn disconnect(&mut self, id: ConnectionId) -> Option<SessionKey> {
        let key = self.memberships.remove(&id)?;
        if let Some(session) = self
            .rooms
            .get_mut(&key.room_id)
            .and_then(|room| room.sessions.get_mut(&key.session_id))
        {
            session.remove_connection(id);
        }
        tracing::debug!(conn_id = %id, session = %key, "connection removed");
        Some(key)
    }

    /// The session a connection is currently registered in.
    pub fn membership(&self, id: ConnectionId) -> Option<&SessionKey> {
        self.memberships.get(&id)
    }

    /// Drops sessions that have had no connections for longer than the
    /// configured TTL, and rooms left empty by that.
    ///
    /// No-op when `idle_session_ttl` is `None`. Returns the removed keys.
    pub fn expire_idle(&mut self, now: Instant) -> Vec<SessionKey> {
        let Some(ttl) = self.config.idle_session_ttl else {
            return Vec::new();
        };

        let mut expired = Vec::new();
        for (room_id, room) in &mut self.rooms {
            room.sessions.retain(|session_id, session| {
                let stale = session.is_idle()
                    && now.saturating_duration_since(session.last_activity()) > ttl;
                if stale {
                    expired.push(SessionKey::new(room_id.as_str(), session_id.as_str()));
                }
                !stale
            });
        }
        self.rooms.retain(|_, room| !room.sessions.is_empty());

        for key in &expired {
            tracing::info!(session = %key, "idle session expired");
        }
        expired
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn session_count(&self) -> usize {
        self.rooms.values().map(Room::session_count).sum()
    }
}

fn validate_ids(room_id: &str, session_id: &str) -> Result<(), SessionError> {
    if room_id.is_empty() {
        return Err(SessionError::MissingIdentifier("roomId"));
    }
    if session_id.is_empty() {
        return Err(SessionError::MissingIdentifier("session"));
    }
    Ok(())
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
