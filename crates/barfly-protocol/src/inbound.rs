//! Inbound frame classification.
//!
//! Every inbound frame is a JSON object with a `type` tag. The relay only
//! interprets a handful of fields; everything else travels verbatim, so
//! the original object is kept alongside the typed view.

use serde_json::Value;

use crate::{Codec, ProtocolError, Role};

/// A JSON object as it arrived on the wire.
pub type JsonObject = serde_json::Map<String, Value>;

/// Returns the first usable value among `keys`, trimmed.
///
/// Strings and numbers are accepted; other JSON types count as absent.
/// An empty string, `0`, or a missing key falls through to the next key.
/// The chosen value is trimmed afterwards and `None` is returned if
/// nothing remains.
pub fn text_field(obj: &JsonObject, keys: &[&str]) -> Option<String> {
    let raw = keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Fields of a `join` frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    pub role: Role,
    /// `clientNonce`, else `voterNonce`.
    pub client_nonce: Option<String>,
}

/// Fields of a `submit_payload` frame needed for alias allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// The nested `payload` object (empty if absent or not an object).
    pub payload: JsonObject,
    /// Raw event-type tag: `payload.eventType`, else `eventType`, else
    /// `payload.type`.
    pub event_type: Option<String>,
    /// `payload.id`, else `payload.personId`.
    pub payload_id: Option<String>,
    /// `payload.clientNonce`.
    pub payload_nonce: Option<String>,
    /// Message-level `clientNonce`.
    pub message_nonce: Option<String>,
}

/// The closed set of message kinds the router knows about.
///
/// Unrecognized tags land in [`ClientMessage::Other`] with the tag kept
/// for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientMessage {
    Join(JoinRequest),
    RequestConfig,
    /// `config` or `event_config`.
    Config,
    SubmitPayload(Submission),
    Vote,
    RequestRoster,
    /// `roster_sync` or `people_sync`.
    RosterSync,
    ContactSave,
    /// `contact_saved_ack` or `contact_release`.
    ContactUpdate,
    Other(String),
}

impl ClientMessage {
    fn classify(tag: &str, obj: &JsonObject) -> Self {
        match tag {
            "join" => Self::Join(JoinRequest {
                role: Role::resolve(
                    &text_field(obj, &["role", "_role"]).unwrap_or_default(),
                ),
                client_nonce: text_field(obj, &["clientNonce", "voterNonce"]),
            }),
            "request_config" => Self::RequestConfig,
            "config" | "event_config" => Self::Config,
            "submit_payload" => {
                let payload = match obj.get("payload") {
                    Some(Value::Object(map)) => map.clone(),
                    _ => JsonObject::new(),
                };
                let event_type = text_field(&payload, &["eventType"])
                    .or_else(|| text_field(obj, &["eventType"]))
                    .or_else(|| text_field(&payload, &["type"]));
                Self::SubmitPayload(Submission {
                    event_type,
                    payload_id: text_field(&payload, &["id", "personId"]),
                    payload_nonce: text_field(&payload, &["clientNonce"]),
                    message_nonce: text_field(obj, &["clientNonce"]),
                    payload,
                })
            }
            "vote" => Self::Vote,
            "request_roster" => Self::RequestRoster,
            "roster_sync" | "people_sync" => Self::RosterSync,
            "contact_save" => Self::ContactSave,
            "contact_saved_ack" | "contact_release" => Self::ContactUpdate,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The wire tag this message was classified from, for logging.
    pub fn kind(&self) -> &str {
        match self {
            Self::Join(_) => "join",
            Self::RequestConfig => "request_config",
            Self::Config => "config",
            Self::SubmitPayload(_) => "submit_payload",
            Self::Vote => "vote",
            Self::RequestRoster => "request_roster",
            Self::RosterSync => "roster_sync",
            Self::ContactSave => "contact_save",
            Self::ContactUpdate => "contact_update",
            Self::Other(tag) => tag,
        }
    }
}

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Inbound {
    pub message: ClientMessage,
    /// `roomId`, else `room`, else `barId`.
    pub room_id: Option<String>,
    /// `session`.
    pub session_id: Option<String>,
    /// The frame exactly as received, for verbatim forwarding.
    pub raw: JsonObject,
}

impl Inbound {
    /// Decodes and classifies a text frame.
    ///
    /// # Errors
    /// [`ProtocolError::Decode`] if the frame is not JSON,
    /// [`ProtocolError::InvalidMessage`] if it is JSON but not an object.
    pub fn decode(codec: &impl Codec, text: &str) -> Result<Self, ProtocolError> {
        let raw = match codec.decode::<Value>(text)? {
            Value::Object(map) => map,
            _ => {
                return Err(ProtocolError::InvalidMessage(
                    "frame is not a JSON object".into(),
                ));
            }
        };

        let tag = match raw.get("type") {
            Some(Value::String(tag)) => tag.as_str(),
            _ => "",
        };

        Ok(Self {
            message: ClientMessage::classify(tag, &raw),
            room_id: text_field(&raw, &["roomId", "room", "barId"]),
            session_id: text_field(&raw, &["session"]),
            raw,
        })
    }
}
