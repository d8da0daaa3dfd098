//! Sender side of a Cast session.
//!
//! The casting SDK is an external collaborator reached through [`CastSdk`] and
//! [`CastSession`]. On top of it this crate provides:
//!
//! - [`SessionCoordinator`]: holds the single active session, if any
//! - [`ContentTypeResolver`]: MIME type inference from a media URL
//! - [`MediaLaunchFlow`]: builds a [`LoadRequest`] and submits it
//! - [`SourceSelector`]: picks the media URL out of a player page
//! - [`CastController`]: owns all of the above and drives startup
//!
//! [`DryRunSdk`] is an in-process SDK that records load requests instead of
//! sending them to a receiver.

pub mod content_type;
pub mod controller;
pub mod dry_run;
pub mod error;
pub mod launch;
pub mod options;
pub mod page;
pub mod sdk;
pub mod session;

pub use cast_protocol as protocol;
pub use cast_protocol::{ApiConfig, LoadMessage, LoadRequest, MediaInfo, ReceiverAvailability};
pub use content_type::{ContentTypeResolver, ExtensionScan};
pub use controller::CastController;
pub use dry_run::DryRunSdk;
pub use error::{Error, Result};
pub use launch::MediaLaunchFlow;
pub use options::SenderOptions;
pub use page::SourceSelector;
pub use sdk::{CastSdk, CastSession, SdkError, SdkErrorCode, SdkEvent};
pub use session::{ConnectionState, SessionCoordinator};
