//! Codec trait and the JSON implementation.
//!
//! Frames on the wire are UTF-8 text, so the codec works in terms of
//! `str`/`String` rather than bytes.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// Converts between Rust values and text frames.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into a text frame.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError>;

    /// Deserializes a text frame.
    fn decode<T: DeserializeOwned>(
        &self,
        text: &str,
    ) -> Result<T, ProtocolError>;
}

/// A [`Codec`] backed by `serde_json`.
///
/// ```rust
/// use barfly_protocol::{Codec, JsonCodec, ServerMessage};
///
/// let codec = JsonCodec;
/// let text = codec
///     .encode(&ServerMessage::Error { message: "nope".into() })
///     .unwrap();
/// assert_eq!(text, r#"{"type":"error","message":"nope"}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError> {
        serde_json::to_string(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        text: &str,
    ) -> Result<T, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }
}
