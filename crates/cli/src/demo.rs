//! Demo streams and the player page that points at them.
//!
//! The demo server publishes one prepared stream per layout under a common
//! base URL. A rendered page carries the `<source>` element a launch reads.

use cast::content_type::content_type_for;
use cast_runtime::StreamKind;
use url::Url;

use crate::error::{CliError, Result};

pub const DEFAULT_DEMO_BASE_URL: &str = "http://app.localhost:8000/streamer/";

/// Published hash name of the demo stream for `kind`.
pub fn demo_hash(kind: StreamKind) -> &'static str {
	match kind {
		StreamKind::Simple => "53c426c98cdf4ad8ac769177578418ce",
		StreamKind::Dash => "b520bc595ce04d708123abcca6fdbf5e",
		StreamKind::Hls => "e02cd5dbe2dc4885b7a89b5ce6d699fb",
	}
}

/// Absolute URL of the demo stream for `kind` under `base_url`.
///
/// A base without a trailing slash is treated as a directory.
pub fn demo_media_url(base_url: &str, kind: StreamKind) -> Result<String> {
	let mut base = Url::parse(base_url).map_err(|err| CliError::InvalidInput(format!("invalid demo base URL '{base_url}': {err}")))?;
	if !base.path().ends_with('/') {
		let path = format!("{}/", base.path());
		base.set_path(&path);
	}

	let file = format!("{}.{}", demo_hash(kind), kind.extension());
	let url = base
		.join(&file)
		.map_err(|err| CliError::InvalidInput(format!("cannot build demo URL from '{base_url}': {err}")))?;
	Ok(url.into())
}

/// Renders a minimal player page with a `<video>` whose id is `element_id`.
pub fn render_player_page(title: &str, element_id: &str, media_url: &str) -> String {
	let title = escape_html(title);
	let element_id = escape_html(element_id);
	let content_type = content_type_for(media_url);
	let src = escape_html(media_url);

	format!(
		"<!DOCTYPE html>\n\
		<html>\n\
		<head>\n\
		<meta charset=\"utf-8\">\n\
		<title>{title}</title>\n\
		</head>\n\
		<body>\n\
		<h1>{title}</h1>\n\
		<video id=\"{element_id}\" controls>\n\
		<source src=\"{src}\" type=\"{content_type}\">\n\
		</video>\n\
		</body>\n\
		</html>\n"
	)
}

fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use cast::SourceSelector;

	use super::*;

	#[test]
	fn demo_urls_use_published_hashes() {
		assert_eq!(
			demo_media_url(DEFAULT_DEMO_BASE_URL, StreamKind::Simple).unwrap(),
			"http://app.localhost:8000/streamer/53c426c98cdf4ad8ac769177578418ce.mp4"
		);
		assert_eq!(
			demo_media_url(DEFAULT_DEMO_BASE_URL, StreamKind::Dash).unwrap(),
			"http://app.localhost:8000/streamer/b520bc595ce04d708123abcca6fdbf5e.mpd"
		);
		assert_eq!(
			demo_media_url(DEFAULT_DEMO_BASE_URL, StreamKind::Hls).unwrap(),
			"http://app.localhost:8000/streamer/e02cd5dbe2dc4885b7a89b5ce6d699fb.m3u8"
		);
	}

	#[test]
	fn base_without_trailing_slash_is_a_directory() {
		assert_eq!(
			demo_media_url("https://cdn.example.com/media", StreamKind::Hls).unwrap(),
			"https://cdn.example.com/media/e02cd5dbe2dc4885b7a89b5ce6d699fb.m3u8"
		);
	}

	#[test]
	fn invalid_base_is_rejected() {
		let err = demo_media_url("not a url", StreamKind::Dash).unwrap_err();
		assert!(matches!(err, CliError::InvalidInput(_)));
	}

	#[test]
	fn rendered_page_is_readable_by_selector() {
		let url = "http://app.localhost:8000/streamer/b520bc595ce04d708123abcca6fdbf5e.mpd";
		let html = render_player_page("Cast demo", "sample-video-src", url);

		assert!(html.contains("type=\"application/dash+xml\""));
		assert_eq!(SourceSelector::new("sample-video-src").select(&html).as_deref(), Some(url));
	}

	#[test]
	fn page_escapes_attribute_values() {
		let html = render_player_page("A & B", "src", "http://h/v.mp4?a=1&b=\"2\"");
		assert!(html.contains("<title>A &amp; B</title>"));
		assert!(html.contains("src=\"http://h/v.mp4?a=1&amp;b=&quot;2&quot;\""));

		assert_eq!(
			SourceSelector::new("src").select(&html).as_deref(),
			Some("http://h/v.mp4?a=1&b=\"2\"")
		);
	}
}
