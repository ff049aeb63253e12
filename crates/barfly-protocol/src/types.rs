//! Roles and the messages the relay itself produces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::JsonObject;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The three connection roles inside a session.
///
/// Guests submit data, hosts drive the event and receive submissions,
/// displays only receive broadcast summaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Host,
    #[serde(alias = "tv")]
    Display,
}

impl Role {
    /// Resolves a raw role string from a `join` frame.
    ///
    /// Case and surrounding whitespace are ignored. `"tv"` is the name
    /// older display clients use. Anything unrecognized, including the
    /// empty string, is a guest.
    pub fn resolve(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "host" => Self::Host,
            "display" | "tv" => Self::Display,
            _ => Self::Guest,
        }
    }

    /// The canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Host => "host",
            Self::Display => "display",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Outbound messages
// ---------------------------------------------------------------------------

/// Identity summary sent to displays when a participant registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub id: String,
    pub alias: String,
    pub event_type: String,
}

/// Reply to a `submit_payload`, sent to the submitter only.
///
/// Accepted acks carry the identity; rejected acks carry a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAck {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SubmitAck {
    pub fn accepted(
        id: impl Into<String>,
        alias: impl Into<String>,
        event_type: impl Into<String>,
        client_nonce: impl Into<String>,
    ) -> Self {
        Self {
            ok: true,
            id: Some(id.into()),
            alias: Some(alias.into()),
            event_type: Some(event_type.into()),
            client_nonce: Some(client_nonce.into()),
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            alias: None,
            event_type: None,
            client_nonce: None,
            reason: Some(reason.into()),
        }
    }
}

/// Frames originated by the relay.
///
/// Internally tagged on `type`, so `Joined` becomes
/// `{"type":"joined","roomId":...,"session":...,"role":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Reply to a successful `join`.
    ///
    /// `role` is always the canonical name (`guest`, `host` or
    /// `display`). Clients that joined with the legacy `"tv"` role get
    /// `"display"` back, not the string they sent.
    Joined {
        #[serde(rename = "roomId")]
        room_id: String,
        session: String,
        role: Role,
    },

    /// Reply to a rejected `join`.
    Error { message: String },

    /// Reply to a `submit_payload`.
    SubmitAck(SubmitAck),

    /// A guest submission enriched with its identity, sent to hosts.
    SubmitPayload { payload: JsonObject },

    /// Sent to displays when a submission is accepted.
    PersonJoined { person: PersonSummary },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_resolve_known_names() {
        assert_eq!(Role::resolve("host"), Role::Host);
        assert_eq!(Role::resolve(" HOST "), Role::Host);
        assert_eq!(Role::resolve("display"), Role::Display);
        assert_eq!(Role::resolve("TV"), Role::Display);
        assert_eq!(Role::resolve("guest"), Role::Guest);
    }

    #[test]
    fn test_role_resolve_falls_back_to_guest() {
        assert_eq!(Role::resolve(""), Role::Guest);
        assert_eq!(Role::resolve("admin"), Role::Guest);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Display).unwrap(), "display");
        let role: Role = serde_json::from_value(json!("tv")).unwrap();
        assert_eq!(role, Role::Display);
    }

    #[test]
    fn test_joined_json_format() {
        let msg = ServerMessage::Joined {
            room_id: "R".into(),
            session: "S".into(),
            role: Role::Host,
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({"type": "joined", "roomId": "R", "session": "S", "role": "host"})
        );
    }

    #[test]
    fn test_joined_reports_canonical_role_for_tv() {
        let msg = ServerMessage::Joined {
            room_id: "R".into(),
            session: "S".into(),
            role: Role::resolve("TV"),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "display");
    }

    #[test]
    fn test_error_json_format() {
        let msg = ServerMessage::Error {
            message: "Missing roomId/session".into(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({"type": "error", "message": "Missing roomId/session"})
        );
    }

    #[test]
    fn test_accepted_submit_ack_json_format() {
        let msg = ServerMessage::SubmitAck(SubmitAck::accepted(
            "p1",
            "FondLantern",
            "dating",
            "n-1",
        ));
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "submit_ack",
                "ok": true,
                "id": "p1",
                "alias": "FondLantern",
                "eventType": "dating",
                "clientNonce": "n-1",
            })
        );
    }

    #[test]
    fn test_rejected_submit_ack_omits_identity() {
        let msg =
            ServerMessage::SubmitAck(SubmitAck::rejected("Missing clientNonce/personId"));
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "submit_ack",
                "ok": false,
                "reason": "Missing clientNonce/personId",
            })
        );
    }

    #[test]
    fn test_person_joined_json_format() {
        let msg = ServerMessage::PersonJoined {
            person: PersonSummary {
                id: "p1".into(),
                alias: "ApexCoach".into(),
                event_type: "networking".into(),
            },
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "person_joined");
        assert_eq!(value["person"]["eventType"], "networking");
        assert_eq!(value["person"]["alias"], "ApexCoach");
    }
}
