//! A single session (round) inside a room.
//!
//! A session tracks:
//! - WHO is connected, split by role (guest, host, display)
//! - WHICH participants have registered and the alias each was given
//! - the alias allocators for its event types

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::time::{Instant, SystemTime};

use barfly_alias::{EventType, SessionAliases};
use barfly_protocol::Role;
use barfly_transport::ConnectionId;

use crate::{DeliveryReport, Frame, Peer, PeerSender};

/// A registered participant.
///
/// The alias never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub alias: String,
    /// `None` when the first submission carried no recognizable event
    /// type; such participants are aliased `Guest`.
    pub event_type: Option<EventType>,
    pub created_at: SystemTime,
}

impl Person {
    /// The event type as it appears on the wire (`""` if unrecognized).
    pub fn event_type_str(&self) -> &'static str {
        self.event_type.map_or("", |t| t.as_str())
    }
}

/// One session's connections, roster, and allocators.
#[derive(Debug)]
pub struct Session {
    room_id: String,
    session_id: String,
    guests: BTreeMap<ConnectionId, PeerSender>,
    hosts: BTreeMap<ConnectionId, PeerSender>,
    displays: BTreeMap<ConnectionId, PeerSender>,
    people: HashMap<String, Person>,
    aliases: SessionAliases,
    last_activity: Instant,
}

impl Session {
    pub(crate) fn new(room_id: &str, session_id: &str) -> Self {
        Self {
            room_id: room_id.to_owned(),
            session_id: session_id.to_owned(),
            guests: BTreeMap::new(),
            hosts: BTreeMap::new(),
            displays: BTreeMap::new(),
            people: HashMap::new(),
            aliases: SessionAliases::new(),
            last_activity: Instant::now(),
        }
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn role_set(&self, role: Role) -> &BTreeMap<ConnectionId, PeerSender> {
        match role {
            Role::Guest => &self.guests,
            Role::Host => &self.hosts,
            Role::Display => &self.displays,
        }
    }

    /// Adds a connection to the set for `role`.
    pub fn register_connection(&mut self, role: Role, peer: &Peer) {
        let set = match role {
            Role::Guest => &mut self.guests,
            Role::Host => &mut self.hosts,
            Role::Display => &mut self.displays,
        };
        set.insert(peer.id(), peer.sender().clone());
        self.touch();
    }

    /// Removes a connection from all three role sets.
    ///
    /// Returns `true` if it was present in any of them.
    pub fn remove_connection(&mut self, id: ConnectionId) -> bool {
        let removed = [
            self.guests.remove(&id),
            self.hosts.remove(&id),
            self.displays.remove(&id),
        ]
        .into_iter()
        .any(|r| r.is_some());
        self.touch();
        removed
    }

    /// The role a connection is registered under, if any.
    pub fn role_of(&self, id: ConnectionId) -> Option<Role> {
        [Role::Guest, Role::Host, Role::Display]
            .into_iter()
            .find(|role| self.role_set(*role).contains_key(&id))
    }

    /// Connection ids registered under `role`, in ascending order.
    pub fn connections(&self, role: Role) -> impl Iterator<Item = ConnectionId> + '_ {
        self.role_set(role).keys().copied()
    }

    pub fn connection_count(&self) -> usize {
        self.guests.len() + self.hosts.len() + self.displays.len()
    }

    /// Sends `frame` to every connection under each of `roles`.
    ///
    /// Closed connections are skipped and counted; they never stop the
    /// rest of the fan-out.
    pub fn broadcast(&self, roles: &[Role], frame: &Frame) -> DeliveryReport {
        let mut report = DeliveryReport::default();
        for role in roles {
            for (id, sender) in self.role_set(*role) {
                let ok = sender.send(Frame::clone(frame)).is_ok();
                if !ok {
                    tracing::debug!(
                        room_id = %self.room_id,
                        session_id = %self.session_id,
                        conn_id = %id,
                        %role,
                        "skipping closed connection"
                    );
                }
                report.record(ok);
            }
        }
        report
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Looks up a participant, registering them with a fresh alias if
    /// they are new.
    ///
    /// This is the only place aliases are issued, so resubmissions with
    /// the same identity always see the original alias. The boolean is
    /// `true` when the participant was created by this call.
    pub fn register_person(
        &mut self,
        participant_id: &str,
        raw_event_type: &str,
    ) -> (&Person, bool) {
        self.touch();
        match self.people.entry(participant_id.to_owned()) {
            Entry::Occupied(entry) => (&*entry.into_mut(), false),
            Entry::Vacant(entry) => {
                let allocation = self.aliases.allocate(
                    &self.room_id,
                    &self.session_id,
                    raw_event_type,
                );
                tracing::info!(
                    room_id = %self.room_id,
                    session_id = %self.session_id,
                    participant_id,
                    alias = %allocation.alias,
                    "participant registered"
                );
                let person = entry.insert(Person {
                    id: participant_id.to_owned(),
                    alias: allocation.alias,
                    event_type: allocation.event_type,
                    created_at: SystemTime::now(),
                });
                (&*person, true)
            }
        }
    }

    pub fn aliases(&self) -> &SessionAliases {
        &self.aliases
    }

    /// Marks the session as active now.
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    /// A session is idle when no connection of any role is registered.
    pub fn is_idle(&self) -> bool {
        self.connection_count() == 0
    }
}
