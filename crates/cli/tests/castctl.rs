//! End-to-end tests that run the castctl binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

fn castctl() -> PathBuf {
	PathBuf::from(env!("CARGO_BIN_EXE_castctl"))
}

/// Runs castctl with JSON output and a config path inside `dir`.
fn run(dir: &Path, args: &[&str]) -> (Output, Value) {
	let output = Command::new(castctl())
		.current_dir(dir)
		.env_remove("RUST_LOG")
		.arg("-f")
		.arg("json")
		.arg("--config")
		.arg(dir.join("config.json"))
		.args(args)
		.output()
		.expect("failed to execute castctl");

	let stdout = String::from_utf8_lossy(&output.stdout);
	let parsed = serde_json::from_str(&stdout).unwrap_or_else(|_| serde_json::json!({ "raw": stdout }));
	(output, parsed)
}

#[test]
fn resolve_reports_content_types() {
	let dir = tempfile::tempdir().unwrap();
	let (output, json) = run(
		dir.path(),
		&["resolve", "video.mp4", "stream.MPD", "playlist.m3u8", "noextension", "http://h/a.m3u8?token=x"],
	);

	assert!(output.status.success());
	assert_eq!(json["ok"], true);
	assert_eq!(json["command"], "resolve");
	let types: Vec<&str> = json["data"]["resolved"]
		.as_array()
		.unwrap()
		.iter()
		.map(|entry| entry["contentType"].as_str().unwrap())
		.collect();
	assert_eq!(
		types,
		[
			"video/mp4",
			"application/dash+xml",
			"application/x-mpegurl",
			"video/mp4",
			"application/x-mpegurl"
		]
	);
	assert_eq!(json["data"]["scan"], "pathOnly");
}

#[test]
fn resolve_verbatim_reads_query_string() {
	let dir = tempfile::tempdir().unwrap();
	let (_, json) = run(dir.path(), &["resolve", "--verbatim", "http://h/a.mpd?v=1.2"]);
	assert_eq!(json["data"]["scan"], "verbatim");
	assert_eq!(json["data"]["resolved"][0]["contentType"], "video/mp4");
}

#[test]
fn launch_url_submits_load_message() {
	let dir = tempfile::tempdir().unwrap();
	let (output, json) = run(
		dir.path(),
		&["launch", "--url", "http://host/stream.mpd", "--receiver", "Kitchen"],
	);

	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	let data = &json["data"];
	assert_eq!(data["receiver"], "Kitchen");
	assert_eq!(data["appId"], "90CA4506");
	assert_eq!(data["contentType"], "application/dash+xml");

	let messages = data["messages"].as_array().unwrap();
	assert_eq!(messages.len(), 1);
	assert_eq!(messages[0]["type"], "LOAD");
	assert_eq!(messages[0]["sessionId"], data["sessionId"]);
	assert_eq!(messages[0]["autoplay"], true);
	assert_eq!(messages[0]["media"]["contentId"], "http://host/stream.mpd");
}

#[test]
fn demo_page_then_launch_from_page() {
	let dir = tempfile::tempdir().unwrap();
	let page = dir.path().join("pages").join("hls.html");
	let page_arg = page.to_str().unwrap();

	let (output, json) = run(dir.path(), &["demo-page", "hls", "--out", page_arg]);
	assert!(output.status.success());
	assert_eq!(
		json["data"]["mediaUrl"],
		"http://app.localhost:8000/streamer/e02cd5dbe2dc4885b7a89b5ce6d699fb.m3u8"
	);
	assert!(json["data"].get("html").is_none());
	assert_eq!(json["artifacts"][0]["type"], "page");
	assert!(page.is_file());

	let (output, json) = run(dir.path(), &["launch", "--page", page_arg]);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(json["data"]["contentType"], "application/x-mpegurl");
	assert_eq!(
		json["data"]["contentId"],
		"http://app.localhost:8000/streamer/e02cd5dbe2dc4885b7a89b5ce6d699fb.m3u8"
	);
}

#[test]
fn launch_page_without_source_fails() {
	let dir = tempfile::tempdir().unwrap();
	let page = dir.path().join("empty.html");
	std::fs::write(&page, "<html><body><video id=\"sample-video-src\"></video></body></html>").unwrap();

	let (output, json) = run(dir.path(), &["launch", "--page", page.to_str().unwrap()]);
	assert!(!output.status.success());
	assert_eq!(json["ok"], false);
	assert_eq!(json["command"], "launch");
	assert_eq!(json["error"]["code"], "MISSING_SOURCE");
	assert_eq!(json["error"]["details"]["elementId"], "sample-video-src");

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("MISSING_SOURCE"), "stderr: {stderr}");
}

#[test]
fn launch_missing_page_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let (output, json) = run(dir.path(), &["launch", "--page", "does-not-exist.html"]);
	assert!(!output.status.success());
	assert_eq!(json["error"]["code"], "IO_ERROR");
}

#[test]
fn config_values_reach_commands() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(
		dir.path().join("config.json"),
		r#"{ "appId": "ABCD1234", "sourceElementId": "player", "demoBaseUrl": "https://cdn.example.com/media" }"#,
	)
	.unwrap();

	let (_, json) = run(dir.path(), &["demo-page", "simple"]);
	let html = json["data"]["html"].as_str().unwrap();
	assert!(html.contains("id=\"player\""));
	assert!(html.contains("https://cdn.example.com/media/53c426c98cdf4ad8ac769177578418ce.mp4"));

	let page = dir.path().join("simple.html");
	std::fs::write(&page, html).unwrap();
	let (output, json) = run(dir.path(), &["launch", "--page", page.to_str().unwrap()]);
	assert!(output.status.success());
	assert_eq!(json["data"]["appId"], "ABCD1234");
	assert_eq!(json["data"]["contentType"], "video/mp4");
}

#[test]
fn config_init_refuses_to_overwrite() {
	let dir = tempfile::tempdir().unwrap();

	let (output, json) = run(dir.path(), &["config", "init"]);
	assert!(output.status.success());
	assert_eq!(json["command"], "config.init");
	assert!(dir.path().join("config.json").is_file());

	let (output, json) = run(dir.path(), &["config", "init"]);
	assert!(!output.status.success());
	assert_eq!(json["error"]["code"], "CONFIG_ERROR");

	let (output, _) = run(dir.path(), &["config", "init", "--force"]);
	assert!(output.status.success());

	let (_, json) = run(dir.path(), &["config", "show"]);
	assert_eq!(json["data"]["exists"], true);
	assert_eq!(json["data"]["config"]["maxPolls"], 10);
}

#[test]
fn malformed_config_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("config.json"), "{").unwrap();

	let (output, json) = run(dir.path(), &["resolve", "a.mp4"]);
	assert!(!output.status.success());
	assert_eq!(json["error"]["code"], "CONFIG_ERROR");
}

#[test]
fn prepare_without_inputs_fails() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("in");
	std::fs::create_dir_all(&input).unwrap();

	let (output, json) = run(
		dir.path(),
		&[
			"prepare",
			"--stream-type",
			"hls",
			"--input-dir",
			input.to_str().unwrap(),
			"--output-dir",
			dir.path().join("out").to_str().unwrap(),
		],
	);
	assert!(!output.status.success());
	assert_eq!(json["ok"], false);
	let code = json["error"]["code"].as_str().unwrap();
	// ffmpeg may be absent on the test host; either way nothing is prepared
	assert!(code == "INVALID_INPUT" || code == "TOOL_NOT_FOUND", "unexpected code {code}");
}
