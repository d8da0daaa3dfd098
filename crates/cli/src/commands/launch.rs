//! `castctl launch`: bootstrap, request a session, load one media URL.
//!
//! The receiver side is the in-process dry-run SDK, so the command reports
//! the LOAD messages that would have been sent.

use std::sync::Arc;

use cast::{CastController, CastSdk, DryRunSdk, ExtensionScan};
use tracing::info;

use super::emit;
use crate::cli::LaunchArgs;
use crate::context::CommandContext;
use crate::error::{CliError, Result};
use crate::output::LaunchData;

const DEFAULT_RECEIVER_NAME: &str = "Dry Run Receiver";

pub async fn execute(ctx: &CommandContext, command: &str, args: LaunchArgs) -> Result<()> {
	let mut options = ctx.config().sender_options();
	if let Some(app_id) = args.app_id {
		options = options.with_app_id(app_id);
	}
	if let Some(element_id) = args.element_id {
		options = options.with_source_element_id(element_id);
	}
	if args.verbatim {
		options = options.with_extension_scan(ExtensionScan::Verbatim);
	}
	let app_id = options.app_id.clone();

	let sdk = Arc::new(DryRunSdk::new(args.receiver.as_deref().unwrap_or(DEFAULT_RECEIVER_NAME)));
	let mut controller = CastController::new(Arc::clone(&sdk) as Arc<dyn CastSdk>, options);

	controller.bootstrap().await?;
	controller.request_session().await?;

	let request = match (&args.page, &args.url) {
		(Some(page), _) => {
			let html = std::fs::read_to_string(page).map_err(|source| CliError::PageRead {
				path: page.clone(),
				source,
			})?;
			controller.launch_from_page(&html).await?
		}
		(None, Some(url)) => controller.launch(url).await?,
		(None, None) => return Err(CliError::InvalidInput("either --page or --url is required".into())),
	};

	let session = controller.sessions().active_session().ok_or(cast::Error::NoActiveSession)?;
	info!(
		target = "cast",
		receiver = session.receiver_name(),
		content_type = %request.media.content_type,
		"launch complete"
	);

	let data = LaunchData {
		receiver: session.receiver_name().to_string(),
		session_id: session.session_id().to_string(),
		app_id,
		content_id: request.media.content_id.clone(),
		content_type: request.media.content_type.clone(),
		messages: sdk.submitted(),
	};
	emit(ctx, command, data, Vec::new());
	Ok(())
}
