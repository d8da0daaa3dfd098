use super::*;

fn sample_launch() -> LaunchData {
	LaunchData {
		receiver: "Living Room".into(),
		session_id: "abc123".into(),
		app_id: "90CA4506".into(),
		content_id: "http://app.localhost:8000/streamer/a.mpd".into(),
		content_type: "application/dash+xml".into(),
		messages: Vec::new(),
	}
}

#[test]
fn result_builder_success() {
	let result: CommandResult<LaunchData> = ResultBuilder::new("launch").data(sample_launch()).build();

	assert!(result.ok);
	assert_eq!(result.command, "launch");
	assert_eq!(result.schema_version, Some(SCHEMA_VERSION));
	assert!(result.data.is_some());
	assert!(result.error.is_none());
	assert!(result.timings.is_some());
}

#[test]
fn result_builder_error() {
	let result: CommandResult<LaunchData> = ResultBuilder::new("launch")
		.error_with_details(ErrorCode::NoActiveSession, "no active session found; request a session first", None)
		.build();

	assert!(!result.ok);
	assert!(result.data.is_none());
	assert_eq!(result.error.as_ref().unwrap().code, ErrorCode::NoActiveSession);
	assert!(result.error.as_ref().unwrap().details.is_none());
}

#[test]
fn error_details_serialized() {
	let result: CommandResult<()> = ResultBuilder::new("prepare")
		.error_with_details(
			ErrorCode::ToolNotFound,
			"MP4Box not found",
			Some(serde_json::json!({ "tool": "MP4Box" })),
		)
		.build();

	let json = serde_json::to_value(&result).unwrap();
	assert_eq!(json["ok"], false);
	assert_eq!(json["error"]["code"], "TOOL_NOT_FOUND");
	assert_eq!(json["error"]["details"]["tool"], "MP4Box");
	assert!(json.get("data").is_none());
}

#[test]
fn error_code_display_matches_serde() {
	for code in [ErrorCode::SdkUnavailable, ErrorCode::MediaLoadFailed, ErrorCode::ConfigError] {
		let serialized = serde_json::to_value(code).unwrap();
		assert_eq!(serialized, code.to_string());
	}
	assert_eq!(ErrorCode::MissingSource.to_string(), "MISSING_SOURCE");
}

#[test]
fn output_format_values_match_flag_names() {
	use clap::ValueEnum;

	assert_eq!(OutputFormat::from_str("json", true).unwrap(), OutputFormat::Json);
	assert_eq!(OutputFormat::from_str("TOON", true).unwrap(), OutputFormat::Toon);
	assert!(OutputFormat::from_str("ndjson", true).is_err());
	for format in OutputFormat::value_variants() {
		assert_eq!(format.to_possible_value().unwrap().get_name(), format.to_string());
	}
}

#[test]
fn serialize_uses_camel_case() {
	let result: CommandResult<LaunchData> = ResultBuilder::new("launch").data(sample_launch()).build();

	let json = serde_json::to_string(&result).unwrap();
	assert!(json.contains("\"ok\":true"));
	assert!(json.contains("\"schemaVersion\":1"));
	assert!(json.contains("\"contentType\":\"application/dash+xml\""));
	assert!(json.contains("\"durationMs\""));
}

#[test]
fn artifacts_included() {
	let dir = tempfile::tempdir().unwrap();
	let page = dir.path().join("player.html");
	std::fs::write(&page, "<html></html>").unwrap();

	let result: CommandResult<()> = ResultBuilder::new("demo-page")
		.data(())
		.artifact(Artifact::file(ArtifactType::Page, &page))
		.build();

	assert_eq!(result.artifacts.len(), 1);
	assert_eq!(result.artifacts[0].artifact_type, ArtifactType::Page);
	assert_eq!(result.artifacts[0].size_bytes, Some(13));
}
