//! Wire types for the Cast media namespace.
//!
//! This crate contains the serde-serializable shapes a sender hands to a
//! receiver: media descriptions, load requests and the `LOAD` envelope as it
//! appears on the `urn:x-cast:com.google.cast.media` channel.
//!
//! Types in this crate are pure data. Session handling and content-type
//! inference live in `cast-sender`.

pub mod media;
pub mod messages;

pub use media::*;
pub use messages::*;
