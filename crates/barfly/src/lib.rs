//! # Barfly
//!
//! Real-time relay for room-scoped live group events.
//!
//! Clients connect over WebSocket, join a `(room, session)` under a role
//! (guest, host or display) and exchange JSON frames. The relay forwards
//! each frame by type and role, and assigns every participant a
//! deterministic, session-unique alias when they submit a profile.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use barfly::prelude::*;
//!
//! # async fn start() -> Result<(), RelayError> {
//! let server = RelayServer::builder()
//!     .bind("0.0.0.0:10000")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod server;

pub use error::RelayError;
pub use server::{RelayServer, RelayServerBuilder};

pub use barfly_alias as alias;
pub use barfly_protocol as protocol;
pub use barfly_router as router;
pub use barfly_session as session;
pub use barfly_transport as transport;

/// Common imports for running a relay.
pub mod prelude {
    pub use crate::{RelayError, RelayServer, RelayServerBuilder};
    pub use barfly_alias::EventType;
    pub use barfly_protocol::Role;
    pub use barfly_session::RegistryConfig;
}
