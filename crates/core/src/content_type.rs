//! Content-type inference from a media URL's extension.

use serde::{Deserialize, Serialize};

/// Fallback for anything that is not a recognised manifest.
pub const DEFAULT_CONTENT_TYPE: &str = "video/mp4";
/// MPEG-DASH manifest (`.mpd`).
pub const DASH_CONTENT_TYPE: &str = "application/dash+xml";
/// HLS playlist (`.m3u8`).
pub const HLS_CONTENT_TYPE: &str = "application/x-mpegurl";

/// Which part of the URL the extension is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtensionScan {
	/// Drop the query string and fragment before looking for the extension.
	#[default]
	PathOnly,
	/// Use the URL exactly as given, so `a.mp4?t=1.m3u8` reads as `m3u8`.
	Verbatim,
}

/// Maps media URLs to MIME types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentTypeResolver {
	scan: ExtensionScan,
}

impl ContentTypeResolver {
	pub fn new(scan: ExtensionScan) -> Self {
		Self { scan }
	}

	pub fn scan(&self) -> ExtensionScan {
		self.scan
	}

	/// Returns the MIME type for `url`.
	pub fn resolve(&self, url: &str) -> &'static str {
		let subject = match self.scan {
			ExtensionScan::PathOnly => strip_query_and_fragment(url),
			ExtensionScan::Verbatim => url,
		};

		let parts: Vec<&str> = subject.split('.').collect();
		if parts.len() == 1 || (parts.len() == 2 && parts[0].is_empty()) {
			return DEFAULT_CONTENT_TYPE;
		}

		match parts.last().map(|ext| ext.to_lowercase()).as_deref() {
			Some("mpd") => DASH_CONTENT_TYPE,
			Some("m3u8") => HLS_CONTENT_TYPE,
			_ => DEFAULT_CONTENT_TYPE,
		}
	}
}

/// Resolves with the default [`ExtensionScan::PathOnly`] behavior.
pub fn content_type_for(url: &str) -> &'static str {
	ContentTypeResolver::default().resolve(url)
}

fn strip_query_and_fragment(url: &str) -> &str {
	match url.find(['?', '#']) {
		Some(idx) => &url[..idx],
		None => url,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const VERBATIM: ContentTypeResolver = ContentTypeResolver {
		scan: ExtensionScan::Verbatim,
	};

	#[test]
	fn plain_file_names() {
		assert_eq!(content_type_for("video.mp4"), DEFAULT_CONTENT_TYPE);
		assert_eq!(content_type_for("stream.MPD"), DASH_CONTENT_TYPE);
		assert_eq!(content_type_for("playlist.m3u8"), HLS_CONTENT_TYPE);
		assert_eq!(content_type_for("noextension"), DEFAULT_CONTENT_TYPE);
	}

	#[test]
	fn manifests_match_case_insensitively() {
		for url in ["a.mpd", "a.Mpd", "http://host/x/y.MPD"] {
			assert_eq!(content_type_for(url), DASH_CONTENT_TYPE, "{url}");
			assert_eq!(VERBATIM.resolve(url), DASH_CONTENT_TYPE, "{url}");
		}
		for url in ["a.m3u8", "a.M3U8", "http://host/live/index.M3u8"] {
			assert_eq!(content_type_for(url), HLS_CONTENT_TYPE, "{url}");
			assert_eq!(VERBATIM.resolve(url), HLS_CONTENT_TYPE, "{url}");
		}
	}

	#[test]
	fn no_dot_or_single_leading_dot_defaults() {
		assert_eq!(content_type_for(""), DEFAULT_CONTENT_TYPE);
		assert_eq!(content_type_for("mpd"), DEFAULT_CONTENT_TYPE);
		assert_eq!(content_type_for(".mpd"), DEFAULT_CONTENT_TYPE);
		assert_eq!(VERBATIM.resolve(".m3u8"), DEFAULT_CONTENT_TYPE);
	}

	#[test]
	fn other_extensions_default() {
		assert_eq!(content_type_for("clip.webm"), DEFAULT_CONTENT_TYPE);
		assert_eq!(content_type_for("archive.tar.gz"), DEFAULT_CONTENT_TYPE);
		assert_eq!(content_type_for("http://host.example/stream"), DEFAULT_CONTENT_TYPE);
	}

	#[test]
	fn two_leading_dots_still_inspect_extension() {
		assert_eq!(content_type_for("..mpd"), DASH_CONTENT_TYPE);
		assert_eq!(content_type_for("x.y.mpd"), DASH_CONTENT_TYPE);
	}

	#[test]
	fn path_only_ignores_query_and_fragment() {
		assert_eq!(content_type_for("http://h/v.mp4?token=1.m3u8"), DEFAULT_CONTENT_TYPE);
		assert_eq!(content_type_for("http://h/s.mpd?sig=abc"), DASH_CONTENT_TYPE);
		assert_eq!(content_type_for("http://h/p.m3u8#t=10.5"), HLS_CONTENT_TYPE);
	}

	#[test]
	fn verbatim_reads_past_the_query() {
		assert_eq!(VERBATIM.resolve("http://h/v.mp4?token=1.m3u8"), HLS_CONTENT_TYPE);
		assert_eq!(VERBATIM.resolve("http://h/s.mpd?sig=abc"), DEFAULT_CONTENT_TYPE);
	}
}
