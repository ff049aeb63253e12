//! Wire protocol for the Barfly relay.
//!
//! - **Inbound** ([`Inbound`], [`ClientMessage`]): text frames from
//!   guests, hosts, and displays, classified by their `type` tag.
//! - **Outbound** ([`ServerMessage`], [`SubmitAck`]): frames the relay
//!   produces itself. Everything else is forwarded verbatim.
//! - **Codec** ([`Codec`], [`JsonCodec`]): text frame (de)serialization.
//!
//! ```text
//! Transport (text) → Protocol (Inbound) → Router (session + roles)
//! ```

mod codec;
mod error;
mod inbound;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use inbound::{
    text_field, ClientMessage, Inbound, JoinRequest, JsonObject, Submission,
};
pub use types::{PersonSummary, Role, ServerMessage, SubmitAck};
