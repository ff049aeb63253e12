//! Error types for the session layer.

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A room or session identifier was empty.
    #[error("missing {0}")]
    MissingIdentifier(&'static str),
}
