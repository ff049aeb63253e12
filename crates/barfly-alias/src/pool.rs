//! Event-type categories and the per-session candidate pool.

use std::fmt;

use crate::seed::shuffle_seeded;
use crate::words::{
    DATING_ADJECTIVES, DATING_NOUNS, NETWORKING_ADJECTIVES, NETWORKING_NOUNS,
};

/// Number of candidates in every pool (100 adjectives x 100 nouns).
pub const POOL_SIZE: usize = 10_000;

/// The alias category a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Dating,
    Networking,
}

impl EventType {
    /// Maps a raw event-type tag onto a category.
    ///
    /// Case-insensitive substring match: anything containing `"network"`
    /// is networking, otherwise anything containing `"dating"` is dating.
    pub fn normalize(raw: &str) -> Option<Self> {
        let lower = raw.to_lowercase();
        if lower.contains("network") {
            Some(Self::Networking)
        } else if lower.contains("dating") {
            Some(Self::Dating)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dating => "dating",
            Self::Networking => "networking",
        }
    }

    /// Prefix of the sequential names handed out once the pool runs dry.
    pub fn fallback_prefix(&self) -> &'static str {
        match self {
            Self::Dating => "Love",
            Self::Networking => "Pro",
        }
    }

    fn words(&self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            Self::Dating => (&DATING_ADJECTIVES, &DATING_NOUNS),
            Self::Networking => (&NETWORKING_ADJECTIVES, &NETWORKING_NOUNS),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seed string for a (room, session, event type) triple.
pub fn seed_key(room_id: &str, session_id: &str, event_type: EventType) -> String {
    format!("alias_{room_id}__{session_id}__{event_type}")
}

/// The unshuffled catalog: every adjective joined with every noun, in
/// nested order (all nouns for the first adjective, then the second...).
pub fn base_catalog(event_type: EventType) -> Vec<String> {
    let (adjectives, nouns) = event_type.words();
    let mut out = Vec::with_capacity(adjectives.len() * nouns.len());
    for adjective in adjectives {
        for noun in nouns {
            out.push(format!("{adjective}{noun}"));
        }
    }
    out
}

/// An immutable, deterministically shuffled sequence of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasPool {
    candidates: Vec<String>,
}

impl AliasPool {
    /// Builds the pool for a (room, session, event type) triple.
    ///
    /// Identical inputs always yield an identical ordering.
    pub fn generate(room_id: &str, session_id: &str, event_type: EventType) -> Self {
        let mut candidates = base_catalog(event_type);
        shuffle_seeded(&mut candidates, &seed_key(room_id, session_id, event_type));
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_normalize_substring_match() {
        assert_eq!(EventType::normalize("dating"), Some(EventType::Dating));
        assert_eq!(EventType::normalize("Speed DATING"), Some(EventType::Dating));
        assert_eq!(EventType::normalize("networking"), Some(EventType::Networking));
        assert_eq!(EventType::normalize("biz-Network"), Some(EventType::Networking));
    }

    #[test]
    fn test_normalize_networking_wins_over_dating() {
        assert_eq!(
            EventType::normalize("dating-and-networking"),
            Some(EventType::Networking)
        );
    }

    #[test]
    fn test_normalize_unrecognized() {
        assert_eq!(EventType::normalize(""), None);
        assert_eq!(EventType::normalize("trivia"), None);
    }

    #[test]
    fn test_event_type_wire_names() {
        assert_eq!(EventType::Dating.as_str(), "dating");
        assert_eq!(EventType::Networking.to_string(), "networking");
        for t in [EventType::Dating, EventType::Networking] {
            assert_eq!(EventType::normalize(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_seed_key_format() {
        assert_eq!(
            seed_key("R", "S", EventType::Networking),
            "alias_R__S__networking"
        );
    }

    #[test]
    fn test_base_catalog_nested_order() {
        let catalog = base_catalog(EventType::Dating);
        assert_eq!(catalog.len(), POOL_SIZE);
        assert_eq!(catalog[0], "AdoringArrow");
        assert_eq!(catalog[1], "AdoringAura");
        assert_eq!(catalog[100], "AffectionateArrow");
        assert_eq!(catalog[POOL_SIZE - 1], "BelovedSoulmate");
    }

    #[test]
    fn test_base_catalogs_are_unique() {
        for event_type in [EventType::Dating, EventType::Networking] {
            let catalog = base_catalog(event_type);
            let unique: HashSet<_> = catalog.iter().collect();
            assert_eq!(unique.len(), POOL_SIZE, "{event_type} has duplicates");
        }
    }

    #[test]
    fn test_generated_pool_golden_prefix() {
        let pool = AliasPool::generate("R", "S", EventType::Dating);
        let head: Vec<_> = pool.iter().take(3).collect();
        assert_eq!(head, ["FondLantern", "CaptivatingAura", "MellowOcean"]);

        let pool = AliasPool::generate("R", "S", EventType::Networking);
        let head: Vec<_> = pool.iter().take(3).collect();
        assert_eq!(
            head,
            ["OperationalConnector", "ManagerialCOO", "TimelyGuide"]
        );
    }

    #[test]
    fn test_generated_pool_depends_on_session() {
        let a = AliasPool::generate("R", "S", EventType::Dating);
        let b = AliasPool::generate("R", "S2", EventType::Dating);
        assert_ne!(a, b);
        assert_eq!(b.get(0), Some("BoldRendezvous"));
    }
}
