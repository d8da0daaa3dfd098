//! Building and submitting the load request.

use cast_protocol::{GenericMediaMetadata, Image, LoadRequest, MediaInfo, MetadataType};
use tracing::{error, info};

use crate::content_type::ContentTypeResolver;
use crate::error::{Error, Result};
use crate::session::SessionCoordinator;

pub const MEDIA_TITLE: &str = "Hello World";
pub const MEDIA_SUBTITLE: &str = "Sub Title Here";
pub const MEDIA_THUMBNAIL_URL: &str = "https://goo.gl/ZRMjjO";

/// Turns a media URL into a submitted load request.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaLaunchFlow {
	resolver: ContentTypeResolver,
}

impl MediaLaunchFlow {
	pub fn new(resolver: ContentTypeResolver) -> Self {
		Self { resolver }
	}

	pub fn resolver(&self) -> &ContentTypeResolver {
		&self.resolver
	}

	/// Builds the request for `media_url`: generic metadata, resolved
	/// content type, autoplay from offset 0.
	pub fn build_request(&self, media_url: &str) -> LoadRequest {
		let mut media = MediaInfo::new(media_url);
		media.metadata = Some(GenericMediaMetadata {
			metadata_type: MetadataType::Generic,
			title: Some(MEDIA_TITLE.to_string()),
			subtitle: Some(MEDIA_SUBTITLE.to_string()),
			images: vec![Image::new(MEDIA_THUMBNAIL_URL)],
		});
		media.content_type = self.resolver.resolve(media_url).to_string();

		let mut request = LoadRequest::new(media);
		request.autoplay = true;
		request.current_time = 0.0;
		request
	}

	/// Submits `media_url` through the active session.
	///
	/// Returns the submitted request. Every failure is logged before it is
	/// returned; nothing is retried.
	pub async fn launch(&self, sessions: &SessionCoordinator, media_url: &str) -> Result<LoadRequest> {
		let Some(session) = sessions.active_session() else {
			error!(target = "cast", "no active session found; request a session first");
			return Err(Error::NoActiveSession);
		};

		let request = self.build_request(media_url);
		info!(
			target = "cast",
			url = media_url,
			content_type = %request.media.content_type,
			session_id = session.session_id(),
			"loading media"
		);

		match session.load_media(request.clone()).await {
			Ok(()) => {
				info!(target = "cast", url = media_url, "media loaded successfully");
				Ok(request)
			}
			Err(err) => {
				error!(target = "cast", url = media_url, error = %err, "media loading error");
				Err(Error::MediaLoad(err))
			}
		}
	}
}
