//! Integration tests for pool determinism and allocator uniqueness.

use std::collections::HashSet;

use barfly_alias::{
    AliasAllocator, AliasPool, EventType, SessionAliases, POOL_SIZE,
};
use rand::Rng;
use rand::distr::Alphanumeric;

fn random_ident(rng: &mut impl Rng) -> String {
    (0..8).map(|_| rng.sample(Alphanumeric) as char).collect()
}

#[test]
fn test_pool_generation_is_deterministic_for_random_triples() {
    let mut rng = rand::rng();
    for _ in 0..5 {
        let room = random_ident(&mut rng);
        let session = random_ident(&mut rng);
        for event_type in [EventType::Dating, EventType::Networking] {
            let a = AliasPool::generate(&room, &session, event_type);
            let b = AliasPool::generate(&room, &session, event_type);
            assert_eq!(a, b, "pool for {room}/{session}/{event_type} differs");
            assert_eq!(a.len(), POOL_SIZE);
        }
    }
}

#[test]
fn test_rebuilt_allocator_reproduces_the_same_sequence() {
    let mut first = AliasAllocator::new("bar-7", "round-2", EventType::Networking);
    let mut second = AliasAllocator::new("bar-7", "round-2", EventType::Networking);
    for _ in 0..250 {
        assert_eq!(first.next_alias(), second.next_alias());
    }
}

#[test]
fn test_pool_aliases_are_unique_until_exhaustion() {
    let mut allocator = AliasAllocator::new("R", "S", EventType::Dating);
    let mut seen = HashSet::new();
    for _ in 0..POOL_SIZE {
        let alias = allocator.next_alias();
        assert!(seen.insert(alias.clone()), "duplicate alias {alias}");
    }
    assert_eq!(allocator.remaining(), 0);
    assert_eq!(allocator.issued(), POOL_SIZE);
}

#[test]
fn test_exhausted_dating_pool_falls_back_to_love_names() {
    let mut allocator = AliasAllocator::new("R", "S", EventType::Dating);
    let pooled: HashSet<String> =
        (0..POOL_SIZE).map(|_| allocator.next_alias()).collect();

    let overflow = allocator.next_alias();
    assert_eq!(overflow, "Love10001");
    assert!(!pooled.contains(&overflow));

    let next = allocator.next_alias();
    assert_eq!(next, "Love10002");
}

#[test]
fn test_exhausted_networking_pool_falls_back_to_pro_names() {
    let mut aliases = SessionAliases::new();
    for _ in 0..POOL_SIZE {
        aliases.allocate("R", "S", "networking");
    }
    let mut fallback = HashSet::new();
    for _ in 0..50 {
        let allocation = aliases.allocate("R", "S", "networking");
        assert!(allocation.alias.starts_with("Pro"));
        assert!(fallback.insert(allocation.alias));
    }
}

#[test]
fn test_categories_in_one_session_are_independent() {
    let mut aliases = SessionAliases::new();
    for _ in 0..POOL_SIZE {
        aliases.allocate("R", "S", "dating");
    }
    // Networking pool is untouched by dating exhaustion.
    let allocation = aliases.allocate("R", "S", "networking");
    assert_eq!(allocation.alias, "OperationalConnector");
}
