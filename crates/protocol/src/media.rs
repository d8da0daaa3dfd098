//! Media descriptions carried inside load requests.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Artwork attached to media metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
	/// Absolute URL of the image.
	pub url: String,
}

impl Image {
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into() }
	}
}

/// Kind of metadata attached to a [`MediaInfo`].
///
/// Serialized as the integer code receivers expect in `metadataType`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetadataType {
	#[default]
	Generic,
	Movie,
	TvShow,
	MusicTrack,
	Photo,
}

impl MetadataType {
	/// Returns the numeric wire code.
	pub fn code(self) -> u8 {
		match self {
			MetadataType::Generic => 0,
			MetadataType::Movie => 1,
			MetadataType::TvShow => 2,
			MetadataType::MusicTrack => 3,
			MetadataType::Photo => 4,
		}
	}

	/// Maps a numeric wire code back to a metadata kind.
	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			0 => Some(MetadataType::Generic),
			1 => Some(MetadataType::Movie),
			2 => Some(MetadataType::TvShow),
			3 => Some(MetadataType::MusicTrack),
			4 => Some(MetadataType::Photo),
			_ => None,
		}
	}
}

impl Serialize for MetadataType {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u8(self.code())
	}
}

impl<'de> Deserialize<'de> for MetadataType {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let code = u8::deserialize(deserializer)?;
		MetadataType::from_code(code).ok_or_else(|| D::Error::custom(format!("unknown metadataType {code}")))
	}
}

/// Generic title/subtitle/artwork metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericMediaMetadata {
	pub metadata_type: MetadataType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub images: Vec<Image>,
}

/// How the receiver should treat the stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamType {
	#[default]
	Buffered,
	Live,
	None,
}

/// Description of a single piece of media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
	/// Identifier the receiver loads; for URL-addressed media this is the URL.
	pub content_id: String,
	/// MIME type of the content.
	pub content_type: String,
	#[serde(default)]
	pub stream_type: StreamType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<GenericMediaMetadata>,
}

impl MediaInfo {
	/// Creates a buffered media description with an empty content type.
	pub fn new(content_id: impl Into<String>) -> Self {
		Self {
			content_id: content_id.into(),
			content_type: String::new(),
			stream_type: StreamType::Buffered,
			metadata: None,
		}
	}
}

/// Request asking a session to load (and usually start) a piece of media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRequest {
	pub media: MediaInfo,
	/// Start playback as soon as the media is loaded.
	pub autoplay: bool,
	/// Start offset in seconds.
	pub current_time: f64,
}

impl LoadRequest {
	/// Creates a request that autoplays from the beginning.
	pub fn new(media: MediaInfo) -> Self {
		Self {
			media,
			autoplay: true,
			current_time: 0.0,
		}
	}
}
