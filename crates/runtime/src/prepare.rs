//! Preparation of castable stream layouts.
//!
//! Every run writes into a fresh `<output>/<hash>/` directory, where `hash`
//! is a random hex id that also names the manifest:
//!
//! - `simple`: `<hash>.mp4`, a single H.264/AAC transcode of the first input
//! - `dash`: `<hash>.mpd` plus `<hash>_*` segments, packaged by MP4Box from
//!   a transcode kept under `<output>/temp/<hash>/`
//! - `hls`: one VOD playlist per input plus a `<hash>.m3u8` covering all of
//!   their segments

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::hls::{self, SEGMENT_DURATION, SegmentDurations};
use crate::tools::{FFMPEG, MP4BOX, Tool};

const FPS_OPTS: [&str; 4] = ["-r", "30", "-g", "30"];
const PROFILE_OPTS: [&str; 4] = ["-profile:v", "high", "-level:v", "4.1"];
const CODEC_OPTS: [&str; 4] = ["-codec:v", "libx264", "-codec:a", "aac"];
const DASH_SEGMENT_MS: &str = "4000";

/// Layout to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
	Simple,
	Dash,
	Hls,
}

impl StreamKind {
	pub const ALL: [StreamKind; 3] = [StreamKind::Simple, StreamKind::Dash, StreamKind::Hls];

	pub fn as_str(self) -> &'static str {
		match self {
			StreamKind::Simple => "simple",
			StreamKind::Dash => "dash",
			StreamKind::Hls => "hls",
		}
	}

	/// Extension of the manifest (or file) a receiver is pointed at.
	pub fn extension(self) -> &'static str {
		match self {
			StreamKind::Simple => "mp4",
			StreamKind::Dash => "mpd",
			StreamKind::Hls => "m3u8",
		}
	}
}

impl fmt::Display for StreamKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for StreamKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		StreamKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| Error::InvalidStreamType(s.to_string()))
	}
}

/// Inputs for one preparation run.
#[derive(Debug, Clone)]
pub struct PrepareRequest {
	pub kind: StreamKind,
	pub input_dir: PathBuf,
	pub output_dir: PathBuf,
}

impl PrepareRequest {
	fn validate(&self) -> Result<()> {
		if self.input_dir.as_os_str().is_empty() {
			return Err(Error::InvalidParameter("input dir"));
		}
		if self.output_dir.as_os_str().is_empty() {
			return Err(Error::InvalidParameter("output dir"));
		}
		Ok(())
	}
}

/// Result of a successful run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedMedia {
	pub kind: StreamKind,
	pub hash_name: String,
	pub cache_dir: PathBuf,
	/// File a receiver should load.
	pub manifest: PathBuf,
	/// Source videos that were consumed.
	pub inputs: Vec<PathBuf>,
}

/// Drives ffmpeg (and MP4Box for DASH).
#[derive(Debug, Clone)]
pub struct MediaPreparer {
	ffmpeg: Tool,
	mp4box: Option<Tool>,
}

impl MediaPreparer {
	pub fn new(ffmpeg: Tool, mp4box: Option<Tool>) -> Self {
		Self { ffmpeg, mp4box }
	}

	/// Locates ffmpeg (required) and MP4Box (only needed for DASH).
	pub fn locate() -> Result<Self> {
		Ok(Self::new(Tool::locate(FFMPEG)?, Tool::locate(MP4BOX).ok()))
	}

	pub fn prepare(&self, request: &PrepareRequest) -> Result<PreparedMedia> {
		request.validate()?;
		if request.kind == StreamKind::Dash {
			self.mp4box()?;
		}

		let hash_name = Uuid::new_v4().simple().to_string();
		let cache_dir = request.output_dir.join(&hash_name);
		fs::create_dir_all(&cache_dir)?;
		info!(target = "cast", kind = %request.kind, cache_dir = %cache_dir.display(), "preparing media");

		let (manifest, inputs) = match request.kind {
			StreamKind::Simple => self.prepare_simple(request, &cache_dir, &hash_name)?,
			StreamKind::Dash => self.prepare_dash(request, &cache_dir, &hash_name)?,
			StreamKind::Hls => self.prepare_hls(request, &cache_dir, &hash_name)?,
		};

		Ok(PreparedMedia {
			kind: request.kind,
			hash_name,
			cache_dir,
			manifest,
			inputs,
		})
	}

	fn prepare_simple(&self, request: &PrepareRequest, cache_dir: &Path, hash_name: &str) -> Result<(PathBuf, Vec<PathBuf>)> {
		let input = first_input(&request.input_dir)?;
		let output = cache_dir.join(format!("{hash_name}.mp4"));
		self.ffmpeg.run(transcode_args(&input, &output))?;
		Ok((output, vec![input]))
	}

	fn prepare_dash(&self, request: &PrepareRequest, cache_dir: &Path, hash_name: &str) -> Result<(PathBuf, Vec<PathBuf>)> {
		let mp4box = self.mp4box()?;
		let input = first_input(&request.input_dir)?;
		let temp_dir = request.output_dir.join("temp").join(hash_name);
		fs::create_dir_all(&temp_dir)?;
		let temp_path = temp_dir.join(format!("{hash_name}.mp4"));
		self.ffmpeg.run(transcode_args(&input, &temp_path))?;

		let manifest = cache_dir.join(format!("{hash_name}.mpd"));
		mp4box.run(dash_args(hash_name, &manifest, &temp_path))?;
		Ok((manifest, vec![input]))
	}

	fn prepare_hls(&self, request: &PrepareRequest, cache_dir: &Path, hash_name: &str) -> Result<(PathBuf, Vec<PathBuf>)> {
		let inputs = list_inputs(&request.input_dir)?;
		if inputs.is_empty() {
			return Err(Error::NoInput(request.input_dir.clone()));
		}

		let mut ts_files = Vec::new();
		let mut durations = SegmentDurations::new();
		for input in &inputs {
			let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
			let ts_pattern = cache_dir.join(format!("{stem}_%06d.ts"));
			let playlist = cache_dir.join(format!("{stem}.m3u8"));

			self.ffmpeg.run(hls_args(input, &playlist, &ts_pattern))?;

			ts_files.extend(glob_sorted(cache_dir, &format!("{}_*.ts", glob::Pattern::escape(&stem)))?);
			durations.extend(hls::read_segment_durations(&playlist)?);
		}

		let manifest = hls::write_master_playlist(cache_dir, &ts_files, &durations, hash_name)?;
		Ok((manifest, inputs))
	}
}

impl MediaPreparer {
	fn mp4box(&self) -> Result<&Tool> {
		self.mp4box.as_ref().ok_or(Error::ToolNotFound {
			tool: MP4BOX.name,
			env_var: MP4BOX.env_var,
		})
	}
}

/// ffmpeg arguments for a plain H.264/AAC transcode.
pub fn transcode_args(input: &Path, output: &Path) -> Vec<OsString> {
	let mut args: Vec<OsString> = vec!["-i".into(), input.into()];
	args.extend(encoder_opts());
	args.push(output.into());
	args
}

/// MP4Box arguments for live-profile DASH packaging.
pub fn dash_args(hash_name: &str, manifest: &Path, source: &Path) -> Vec<OsString> {
	let mut args: Vec<OsString> = ["-dash", DASH_SEGMENT_MS, "-rap", "-frag-rap", "-profile", "live", "-url-template", "-segment-name"]
		.into_iter()
		.map(OsString::from)
		.collect();
	args.push(format!("{hash_name}_").into());
	args.push("-out".into());
	args.push(manifest.into());
	args.push(source.into());
	args
}

/// ffmpeg arguments for a transcode segmented into a VOD HLS playlist.
pub fn hls_args(input: &Path, playlist: &Path, ts_pattern: &Path) -> Vec<OsString> {
	let mut args: Vec<OsString> = vec!["-i".into(), input.into()];
	args.extend(encoder_opts());
	args.extend(["-f", "hls", "-hls_playlist_type", "vod", "-hls_segment_filename"].map(OsString::from));
	args.push(ts_pattern.into());
	args.extend(["-hls_list_size", "0", "-hls_time"].map(OsString::from));
	args.push(SEGMENT_DURATION.to_string().into());
	args.extend(["-hls_segment_type", "mpegts", "-hls_flags", "split_by_time"].map(OsString::from));
	args.push(playlist.into());
	args
}

fn encoder_opts() -> impl Iterator<Item = OsString> {
	FPS_OPTS.into_iter().chain(PROFILE_OPTS).chain(CODEC_OPTS).map(OsString::from)
}

fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
	glob_sorted(dir, "*.mp4")
}

fn first_input(dir: &Path) -> Result<PathBuf> {
	list_inputs(dir)?.into_iter().next().ok_or_else(|| Error::NoInput(dir.to_path_buf()))
}

fn glob_sorted(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>> {
	let pattern = format!("{}/{file_pattern}", glob::Pattern::escape(&dir.to_string_lossy()));
	let mut paths = Vec::new();
	for entry in glob::glob(&pattern)? {
		paths.push(entry.map_err(glob::GlobError::into_error)?);
	}
	paths.sort();
	Ok(paths)
}
