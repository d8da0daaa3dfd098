//! Media preparation for the cast demo streams.
//!
//! Turns a directory of source videos into one of three castable layouts
//! (progressive MP4, MPEG-DASH, HLS) by driving external `ffmpeg` and
//! `MP4Box` processes.

pub mod error;
pub mod hls;
pub mod prepare;
pub mod tools;

pub use error::{Error, Result};
pub use prepare::{MediaPreparer, PrepareRequest, PreparedMedia, StreamKind};
pub use tools::Tool;
