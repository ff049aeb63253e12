//! Message routing for the Barfly relay.
//!
//! Every inbound frame is classified by its `type` tag and handled by
//! one fixed rule:
//!
//! | Type | Goes to |
//! |---|---|
//! | `join` | registers the connection, replies `joined` |
//! | `request_config`, `vote`, `request_roster`, `contact_save` | hosts |
//! | `config`, `event_config` | guests, displays, hosts |
//! | `roster_sync`, `people_sync` | guests, displays |
//! | `contact_saved_ack`, `contact_release` | guests |
//! | `submit_payload` | alias assigned; ack to sender, enriched copy to hosts, `person_joined` to displays |
//! | anything else from a host | guests, displays |
//! | anything else | dropped |

mod error;
mod identity;
mod meta;
mod router;

pub use error::RouteError;
pub use identity::{resolve_identity, ResolvedIdentity};
pub use meta::ConnectionMeta;
pub use router::{
    forward_targets, RouteOutcome, Router, MISSING_IDENTITY_REASON,
    MISSING_JOIN_IDS_MESSAGE,
};
