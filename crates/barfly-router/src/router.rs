//! Role-based routing of inbound frames.
//!
//! The router is synchronous: given the registry, the sending peer, and
//! its join metadata, it applies one routing rule and queues every
//! resulting frame on the target peers' channels before returning.

use barfly_alias::EventType;
use barfly_protocol::{
    ClientMessage, Codec, Inbound, JoinRequest, JsonCodec, PersonSummary,
    Role, ServerMessage, SubmitAck, Submission,
};
use barfly_session::{DeliveryReport, Frame, Peer, SessionRegistry};
use serde::Serialize;
use serde_json::Value;

use crate::identity::resolve_identity;
use crate::{ConnectionMeta, RouteError};

/// Reason sent back when a submission carries no usable identity.
pub const MISSING_IDENTITY_REASON: &str = "Missing clientNonce/personId";

/// Message sent back when `join` lacks a room or session.
pub const MISSING_JOIN_IDS_MESSAGE: &str = "Missing roomId/session";

const GUESTS: &[Role] = &[Role::Guest];
const HOSTS: &[Role] = &[Role::Host];
const DISPLAYS: &[Role] = &[Role::Display];
const AUDIENCE: &[Role] = &[Role::Guest, Role::Display];
const EVERYONE: &[Role] = &[Role::Guest, Role::Display, Role::Host];

/// What the router did with a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The connection was registered under `role`.
    Joined { role: Role },
    /// `join` without room/session; the sender got an error reply.
    JoinRejected,
    /// The frame was forwarded verbatim.
    Forwarded {
        kind: String,
        report: DeliveryReport,
    },
    /// A submission was accepted. `created` is `false` for resubmissions.
    Submitted {
        participant_id: String,
        alias: String,
        created: bool,
        report: DeliveryReport,
    },
    /// A submission carried no identity; the sender got a failure ack.
    SubmissionRejected,
    /// A non-host sent a message type with no routing rule.
    Dropped { kind: String },
}

/// Applies the relay's routing table.
#[derive(Debug, Clone, Default)]
pub struct Router<C: Codec = JsonCodec> {
    codec: C,
}

impl<C: Codec> Router<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// Decodes one text frame from `peer` and routes it.
    ///
    /// # Errors
    /// [`RouteError::Protocol`] for frames that are not JSON objects and
    /// [`RouteError::Unroutable`] when no room/session can be resolved.
    /// Neither produces a reply.
    pub fn route(
        &self,
        registry: &mut SessionRegistry,
        peer: &Peer,
        meta: &mut ConnectionMeta,
        text: &str,
    ) -> Result<RouteOutcome, RouteError> {
        let inbound = Inbound::decode(&self.codec, text)?;
        self.dispatch(registry, peer, meta, inbound)
    }

    /// Routes an already decoded frame.
    pub fn dispatch(
        &self,
        registry: &mut SessionRegistry,
        peer: &Peer,
        meta: &mut ConnectionMeta,
        inbound: Inbound,
    ) -> Result<RouteOutcome, RouteError> {
        if let ClientMessage::Join(join) = &inbound.message {
            return self.join(registry, peer, meta, &inbound, join);
        }

        let (room_id, session_id) = resolve_session(&inbound, meta)?;
        if let ClientMessage::SubmitPayload(submission) = &inbound.message {
            return self.submit(registry, peer, meta, &room_id, &session_id, submission);
        }

        let session = registry.get_or_create(&room_id, &session_id)?;
        session.touch();

        let kind = inbound.message.kind().to_owned();
        let Some(targets) = forward_targets(&inbound.message, meta.is_host()) else {
            tracing::debug!(
                conn_id = %peer.id(),
                %kind,
                "dropping unrouted message from non-host"
            );
            return Ok(RouteOutcome::Dropped { kind });
        };

        let frame = self.frame(&inbound.raw)?;
        let report = session.broadcast(targets, &frame);
        tracing::debug!(
            conn_id = %peer.id(),
            %room_id,
            %session_id,
            %kind,
            delivered = report.delivered,
            skipped = report.skipped,
            "forwarded"
        );
        Ok(RouteOutcome::Forwarded { kind, report })
    }

    fn join(
        &self,
        registry: &mut SessionRegistry,
        peer: &Peer,
        meta: &mut ConnectionMeta,
        inbound: &Inbound,
        join: &JoinRequest,
    ) -> Result<RouteOutcome, RouteError> {
        let (Some(room_id), Some(session_id)) =
            (inbound.room_id.as_deref(), inbound.session_id.as_deref())
        else {
            self.reply(
                peer,
                &ServerMessage::Error {
                    message: MISSING_JOIN_IDS_MESSAGE.to_owned(),
                },
            )?;
            return Ok(RouteOutcome::JoinRejected);
        };

        registry.register_connection(room_id, session_id, join.role, peer)?;
        *meta = ConnectionMeta {
            role: Some(join.role),
            room_id: Some(room_id.to_owned()),
            session_id: Some(session_id.to_owned()),
            client_nonce: join.client_nonce.clone(),
        };

        self.reply(
            peer,
            &ServerMessage::Joined {
                room_id: room_id.to_owned(),
                session: session_id.to_owned(),
                role: join.role,
            },
        )?;
        Ok(RouteOutcome::Joined { role: join.role })
    }

    fn submit(
        &self,
        registry: &mut SessionRegistry,
        peer: &Peer,
        meta: &ConnectionMeta,
        room_id: &str,
        session_id: &str,
        submission: &Submission,
    ) -> Result<RouteOutcome, RouteError> {
        let identity = resolve_identity(submission, meta.client_nonce.as_deref());
        let Some(participant_id) = identity.participant_id else {
            self.reply(
                peer,
                &ServerMessage::SubmitAck(SubmitAck::rejected(MISSING_IDENTITY_REASON)),
            )?;
            return Ok(RouteOutcome::SubmissionRejected);
        };

        let raw_event_type = submission.event_type.as_deref().unwrap_or_default();
        let session = registry.get_or_create(room_id, session_id)?;
        let (person, created) = session.register_person(&participant_id, raw_event_type);

        // A participant first seen without an event type keeps `Guest` but
        // reports the type from the current submission.
        let event_type = match person.event_type_str() {
            "" => EventType::normalize(raw_event_type)
                .map_or("", |t| t.as_str()),
            known => known,
        };
        let alias = person.alias.clone();
        let person_id = person.id.clone();

        self.reply(
            peer,
            &ServerMessage::SubmitAck(SubmitAck::accepted(
                person_id.as_str(),
                alias.as_str(),
                event_type,
                identity.client_nonce,
            )),
        )?;

        let mut enriched = submission.payload.clone();
        enriched.insert("id".into(), Value::String(person_id.clone()));
        enriched.insert("personId".into(), Value::String(person_id.clone()));
        enriched.insert("alias".into(), Value::String(alias.clone()));
        enriched.insert("eventType".into(), Value::String(event_type.to_owned()));

        let to_hosts = self.frame(&ServerMessage::SubmitPayload { payload: enriched })?;
        let to_displays = self.frame(&ServerMessage::PersonJoined {
            person: PersonSummary {
                id: person_id.clone(),
                alias: alias.clone(),
                event_type: event_type.to_owned(),
            },
        })?;

        let mut report = session.broadcast(HOSTS, &to_hosts);
        report += session.broadcast(DISPLAYS, &to_displays);

        tracing::debug!(
            conn_id = %peer.id(),
            room_id,
            session_id,
            participant_id = %person_id,
            %alias,
            created,
            delivered = report.delivered,
            skipped = report.skipped,
            "submission routed"
        );

        Ok(RouteOutcome::Submitted {
            participant_id: person_id,
            alias,
            created,
            report,
        })
    }

    fn frame<T: Serialize>(&self, value: &T) -> Result<Frame, RouteError> {
        Ok(Frame::from(self.codec.encode(value)?))
    }

    /// Sends a reply to the originating connection only.
    fn reply(&self, peer: &Peer, msg: &ServerMessage) -> Result<(), RouteError> {
        if !peer.send(self.frame(msg)?) {
            tracing::debug!(conn_id = %peer.id(), "reply skipped, connection closed");
        }
        Ok(())
    }
}

/// The (room, session) a non-join frame addresses: its own fields first,
/// then the connection's join metadata.
fn resolve_session(
    inbound: &Inbound,
    meta: &ConnectionMeta,
) -> Result<(String, String), RouteError> {
    let room_id = inbound.room_id.as_ref().or(meta.room_id.as_ref());
    let session_id = inbound.session_id.as_ref().or(meta.session_id.as_ref());
    match (room_id, session_id) {
        (Some(room_id), Some(session_id)) => {
            Ok((room_id.clone(), session_id.clone()))
        }
        _ => Err(RouteError::Unroutable {
            kind: inbound.message.kind().to_owned(),
        }),
    }
}

/// The verbatim-forwarding table. `None` means the frame is not
/// forwarded (join and submissions have their own handling).
pub fn forward_targets(
    message: &ClientMessage,
    sender_is_host: bool,
) -> Option<&'static [Role]> {
    match message {
        ClientMessage::RequestConfig
        | ClientMessage::Vote
        | ClientMessage::RequestRoster
        | ClientMessage::ContactSave => Some(HOSTS),
        ClientMessage::Config => Some(EVERYONE),
        ClientMessage::RosterSync => Some(AUDIENCE),
        ClientMessage::ContactUpdate => Some(GUESTS),
        ClientMessage::Other(_) if sender_is_host => Some(AUDIENCE),
        ClientMessage::Join(_)
        | ClientMessage::SubmitPayload(_)
        | ClientMessage::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_targets_table() {
        assert_eq!(forward_targets(&ClientMessage::Vote, false), Some(HOSTS));
        assert_eq!(forward_targets(&ClientMessage::RequestConfig, false), Some(HOSTS));
        assert_eq!(forward_targets(&ClientMessage::RequestRoster, false), Some(HOSTS));
        assert_eq!(forward_targets(&ClientMessage::ContactSave, false), Some(HOSTS));
        assert_eq!(forward_targets(&ClientMessage::Config, true), Some(EVERYONE));
        assert_eq!(forward_targets(&ClientMessage::RosterSync, true), Some(AUDIENCE));
        assert_eq!(forward_targets(&ClientMessage::ContactUpdate, true), Some(GUESTS));
    }

    #[test]
    fn test_forward_targets_unknown_depends_on_sender() {
        let other = ClientMessage::Other("start_round".into());
        assert_eq!(forward_targets(&other, true), Some(AUDIENCE));
        assert_eq!(forward_targets(&other, false), None);
    }

    #[test]
    fn test_resolve_session_prefers_frame_fields() {
        let inbound =
            Inbound::decode(&JsonCodec, r#"{"type":"vote","session":"S2"}"#).unwrap();
        let meta = ConnectionMeta {
            room_id: Some("R".into()),
            session_id: Some("S1".into()),
            ..ConnectionMeta::default()
        };
        let (room_id, session_id) = resolve_session(&inbound, &meta).unwrap();
        assert_eq!((room_id.as_str(), session_id.as_str()), ("R", "S2"));
    }

    #[test]
    fn test_resolve_session_without_join_is_unroutable() {
        let inbound = Inbound::decode(&JsonCodec, r#"{"type":"vote"}"#).unwrap();
        let err = resolve_session(&inbound, &ConnectionMeta::default()).unwrap_err();
        assert!(matches!(err, RouteError::Unroutable { kind } if kind == "vote"));
    }
}
