//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding frames.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The frame is not valid JSON (or not the expected shape).
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The frame parsed but violates the protocol, e.g. it is a JSON
    /// array instead of an object.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
