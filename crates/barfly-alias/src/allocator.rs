//! Alias allocation for one session.

use std::collections::HashSet;

use crate::{AliasPool, EventType};

/// Alias handed out when a submission carries no recognizable event type.
pub const FALLBACK_ALIAS: &str = "Guest";

/// Hands out unused aliases from one (room, session, event type) pool.
///
/// Candidates are consumed front to back. Once the pool is spent the
/// allocator switches to sequential names (`Love<N>` / `Pro<N>`), still
/// never repeating an alias it has issued.
///
/// The allocator does not know who an alias was issued to; callers check
/// their roster before asking for a new one.
#[derive(Debug, Clone)]
pub struct AliasAllocator {
    event_type: EventType,
    pool: AliasPool,
    cursor: usize,
    used: HashSet<String>,
}

impl AliasAllocator {
    /// Generates the shuffled pool for the triple.
    pub fn new(room_id: &str, session_id: &str, event_type: EventType) -> Self {
        Self {
            event_type,
            pool: AliasPool::generate(room_id, session_id, event_type),
            cursor: 0,
            used: HashSet::new(),
        }
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Issues the next unused alias.
    pub fn next_alias(&mut self) -> String {
        while let Some(candidate) = self.pool.get(self.cursor) {
            self.cursor += 1;
            if !self.used.contains(candidate) {
                let alias = candidate.to_owned();
                self.used.insert(alias.clone());
                return alias;
            }
        }

        let prefix = self.event_type.fallback_prefix();
        let mut n = self.used.len() + 1;
        while self.used.contains(&format!("{prefix}{n}")) {
            n += 1;
        }
        let alias = format!("{prefix}{n}");
        tracing::warn!(
            event_type = %self.event_type,
            %alias,
            issued = self.used.len(),
            "alias pool exhausted, using sequential fallback"
        );
        self.used.insert(alias.clone());
        alias
    }

    /// Number of aliases issued so far.
    pub fn issued(&self) -> usize {
        self.used.len()
    }

    /// Pool candidates not yet consumed.
    pub fn remaining(&self) -> usize {
        self.pool.len().saturating_sub(self.cursor)
    }

    /// Returns `true` if `alias` has been issued by this allocator.
    pub fn is_issued(&self, alias: &str) -> bool {
        self.used.contains(alias)
    }
}

/// The outcome of [`SessionAliases::allocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub alias: String,
    /// `None` when the raw tag was not recognized.
    pub event_type: Option<EventType>,
}

/// The (at most two) allocators belonging to one session.
///
/// Each allocator is built the first time its category is requested and
/// reused afterwards.
#[derive(Debug, Clone, Default)]
pub struct SessionAliases {
    dating: Option<AliasAllocator>,
    networking: Option<AliasAllocator>,
}

impl SessionAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues an alias for a raw event-type tag.
    ///
    /// Unrecognized or empty tags get [`FALLBACK_ALIAS`] without touching
    /// any pool.
    pub fn allocate(
        &mut self,
        room_id: &str,
        session_id: &str,
        raw_event_type: &str,
    ) -> Allocation {
        let Some(event_type) = EventType::normalize(raw_event_type) else {
            return Allocation {
                alias: FALLBACK_ALIAS.to_owned(),
                event_type: None,
            };
        };

        let slot = match event_type {
            EventType::Dating => &mut self.dating,
            EventType::Networking => &mut self.networking,
        };
        let allocator = slot.get_or_insert_with(|| {
            tracing::debug!(room_id, session_id, %event_type, "building alias pool");
            AliasAllocator::new(room_id, session_id, event_type)
        });

        Allocation {
            alias: allocator.next_alias(),
            event_type: Some(event_type),
        }
    }

    /// The allocator for a category, if it has been built.
    pub fn allocator(&self, event_type: EventType) -> Option<&AliasAllocator> {
        match event_type {
            EventType::Dating => self.dating.as_ref(),
            EventType::Networking => self.networking.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_aliases_follow_pool_order() {
        let mut allocator = AliasAllocator::new("R", "S", EventType::Dating);
        assert_eq!(allocator.next_alias(), "FondLantern");
        assert_eq!(allocator.next_alias(), "CaptivatingAura");
        assert_eq!(allocator.issued(), 2);
        assert_eq!(allocator.remaining(), 9_998);
        assert!(allocator.is_issued("FondLantern"));
    }

    #[test]
    fn test_unrecognized_event_type_returns_guest_without_allocator() {
        let mut aliases = SessionAliases::new();
        let allocation = aliases.allocate("R", "S", "trivia");
        assert_eq!(allocation.alias, FALLBACK_ALIAS);
        assert_eq!(allocation.event_type, None);
        assert!(aliases.allocator(EventType::Dating).is_none());
        assert!(aliases.allocator(EventType::Networking).is_none());
    }

    #[test]
    fn test_allocators_are_built_lazily_per_category() {
        let mut aliases = SessionAliases::new();
        let allocation = aliases.allocate("R", "S", "Dating Night");
        assert_eq!(allocation.event_type, Some(EventType::Dating));
        assert_eq!(allocation.alias, "FondLantern");
        assert!(aliases.allocator(EventType::Networking).is_none());

        let allocation = aliases.allocate("R", "S", "networking");
        assert_eq!(allocation.alias, "OperationalConnector");
        assert_eq!(
            aliases.allocator(EventType::Dating).map(AliasAllocator::issued),
            Some(1)
        );
    }

    #[test]
    fn test_allocator_reused_across_calls() {
        let mut aliases = SessionAliases::new();
        let first = aliases.allocate("R", "S", "dating").alias;
        let second = aliases.allocate("R", "S", "DATING").alias;
        assert_ne!(first, second);
        assert_eq!(second, "CaptivatingAura");
    }
}
