//! Media source selection from a player page.
//!
//! The page is plain HTML. The media URL is the `src` of the first `<source>`
//! nested inside the element carrying the configured id, e.g.
//!
//! ```text
//! <video id="sample-video-src"><source src="http://host/a.mpd"></video>
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Element id the demo player pages use.
pub const DEFAULT_SOURCE_ELEMENT_ID: &str = "sample-video-src";

static SOURCE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<source\b[^>]*>").expect("valid source regex"));

static SRC_ATTR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"(?is)\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).expect("valid src regex"));

/// Picks the media URL out of a page.
#[derive(Debug, Clone)]
pub struct SourceSelector {
	element_id: String,
	opening_tag: Regex,
}

impl SourceSelector {
	pub fn new(element_id: impl Into<String>) -> Self {
		let element_id = element_id.into();
		let pattern = format!(
			r#"(?is)<([a-z][a-z0-9-]*)\b[^>]*?\sid\s*=\s*(?:"{id}"|'{id}'|{id})(?:[\s/][^>]*)?>"#,
			id = regex::escape(&element_id)
		);
		let opening_tag = Regex::new(&pattern).expect("escaped element id forms a valid regex");
		Self { element_id, opening_tag }
	}

	pub fn element_id(&self) -> &str {
		&self.element_id
	}

	/// Returns the `src` of the first `<source>` inside the element.
	///
	/// `None` when the element or its first `<source>` is missing, or that
	/// `<source>` has no `src` or an empty one. Later `<source>` elements are
	/// never consulted.
	pub fn select(&self, html: &str) -> Option<String> {
		let open = self.opening_tag.captures(html)?;
		let tag = open.get(1)?.as_str();
		let rest = &html[open.get(0)?.end()..];
		let body_end = find_matching_close(rest, tag).unwrap_or(rest.len());
		let body = &rest[..body_end];

		let source = SOURCE_TAG.find(body)?;
		let Some(src) = SRC_ATTR.captures(source.as_str()) else {
			debug!(target = "cast", element = %self.element_id, "first source element has no src");
			return None;
		};
		let raw = src.get(1).or_else(|| src.get(2)).or_else(|| src.get(3))?.as_str();
		if raw.is_empty() {
			debug!(target = "cast", element = %self.element_id, "source element has an empty src");
			return None;
		}
		Some(decode_entities(raw))
	}
}

impl Default for SourceSelector {
	fn default() -> Self {
		Self::new(DEFAULT_SOURCE_ELEMENT_ID)
	}
}

/// Offset of the `</tag>` closing the element whose body starts `haystack`.
///
/// Nested elements with the same tag name are skipped; self-closing ones do
/// not open a level.
fn find_matching_close(haystack: &str, tag: &str) -> Option<usize> {
	let pattern = format!(r"(?is)<(/?){}\b[^>]*?(/?)>", regex::escape(tag));
	let tags = Regex::new(&pattern).ok()?;

	let mut depth = 0usize;
	for caps in tags.captures_iter(haystack) {
		let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
		let self_closing = caps.get(2).is_some_and(|m| !m.as_str().is_empty());
		if closing {
			if depth == 0 {
				return caps.get(0).map(|m| m.start());
			}
			depth -= 1;
		} else if !self_closing {
			depth += 1;
		}
	}
	None
}

fn decode_entities(value: &str) -> String {
	value
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&amp;", "&")
}
