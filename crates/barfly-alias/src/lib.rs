//! Alias allocation engine for the Barfly relay.
//!
//! Every participant gets a readable alias (`FondLantern`,
//! `OperationalConnector`) scoped to their room, session, and event type.
//!
//! - [`AliasPool`]: 10,000 candidates per category, shuffled by a seed
//!   derived from the (room, session, event type) triple
//! - [`AliasAllocator`]: hands out unused candidates, then sequential
//!   fallback names once the pool is spent
//! - [`SessionAliases`]: the per-session pair of lazily built allocators

mod allocator;
mod pool;
mod seed;
mod words;

pub use allocator::{AliasAllocator, Allocation, SessionAliases, FALLBACK_ALIAS};
pub use pool::{base_catalog, seed_key, AliasPool, EventType, POOL_SIZE};
pub use seed::{fnv1a32, shuffle_seeded, XorShift32};
