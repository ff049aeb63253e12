//! Room and session state for the Barfly relay.
//!
//! - [`SessionRegistry`]: owns every room and session, plus which
//!   session each connection has joined
//! - [`Session`]: live connections by [`Role`](barfly_protocol::Role),
//!   the participant roster, and the alias allocators
//! - [`Peer`]: the registry's handle on a connection's outbound channel
//!
//! ```text
//! Router (above)  ← looks up sessions, registers people, fans out frames
//!     ↕
//! Session Layer (this crate)
//!     ↕
//! Alias engine + Protocol (below)
//! ```

mod config;
mod error;
mod peer;
mod registry;
mod session;

pub use config::RegistryConfig;
pub use error::SessionError;
pub use peer::{DeliveryReport, Frame, Peer, PeerSender};
pub use registry::{Room, SessionKey, SessionRegistry};
pub use session::{Person, Session};
