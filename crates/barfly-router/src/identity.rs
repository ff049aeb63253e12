//! Participant identity resolution for submissions.

use barfly_protocol::Submission;

/// Identity fields derived from one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// The roster key, if any source provided one.
    pub participant_id: Option<String>,
    /// The nonce echoed back in the ack (empty if none was available).
    pub client_nonce: String,
}

/// Resolves who a submission belongs to.
///
/// First non-empty wins, in this order:
/// 1. `payload.id` / `payload.personId`
/// 2. `payload.clientNonce`
/// 3. the message-level `clientNonce`
/// 4. the nonce the connection supplied at join time
pub fn resolve_identity(
    submission: &Submission,
    join_nonce: Option<&str>,
) -> ResolvedIdentity {
    let client_nonce = submission
        .payload_nonce
        .as_deref()
        .or(submission.message_nonce.as_deref())
        .or(join_nonce.filter(|n| !n.is_empty()))
        .map(str::to_owned);

    let participant_id = submission
        .payload_id
        .clone()
        .or_else(|| client_nonce.clone());

    ResolvedIdentity {
        participant_id,
        client_nonce: client_nonce.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barfly_protocol::JsonObject;

    fn submission(
        payload_id: Option<&str>,
        payload_nonce: Option<&str>,
        message_nonce: Option<&str>,
    ) -> Submission {
        Submission {
            payload: JsonObject::new(),
            event_type: None,
            payload_id: payload_id.map(Into::into),
            payload_nonce: payload_nonce.map(Into::into),
            message_nonce: message_nonce.map(Into::into),
        }
    }

    #[test]
    fn test_payload_id_wins() {
        let identity =
            resolve_identity(&submission(Some("p1"), Some("n1"), Some("n2")), Some("n3"));
        assert_eq!(identity.participant_id.as_deref(), Some("p1"));
        assert_eq!(identity.client_nonce, "n1");
    }

    #[test]
    fn test_payload_nonce_before_message_nonce() {
        let identity =
            resolve_identity(&submission(None, Some("n1"), Some("n2")), Some("n3"));
        assert_eq!(identity.participant_id.as_deref(), Some("n1"));
    }

    #[test]
    fn test_message_nonce_before_join_nonce() {
        let identity = resolve_identity(&submission(None, None, Some("n2")), Some("n3"));
        assert_eq!(identity.participant_id.as_deref(), Some("n2"));
        assert_eq!(identity.client_nonce, "n2");
    }

    #[test]
    fn test_join_nonce_is_last_resort() {
        let identity = resolve_identity(&submission(None, None, None), Some("n3"));
        assert_eq!(identity.participant_id.as_deref(), Some("n3"));
    }

    #[test]
    fn test_no_identity_available() {
        let identity = resolve_identity(&submission(None, None, None), Some(""));
        assert_eq!(identity.participant_id, None);
        assert_eq!(identity.client_nonce, "");
    }
}
