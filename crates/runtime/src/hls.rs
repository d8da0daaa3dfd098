//! HLS playlist reading and master playlist generation.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Segment length requested from ffmpeg, in seconds.
pub const SEGMENT_DURATION: u32 = 10;

const EXTINF: &str = "#EXTINF:";

/// Segment file name -> duration in seconds.
pub type SegmentDurations = BTreeMap<String, f64>;

/// Collects `#EXTINF` durations keyed by the segment line that follows them.
pub fn parse_segment_durations(playlist: &str) -> std::result::Result<SegmentDurations, String> {
	let lines: Vec<&str> = playlist.lines().collect();
	let mut durations = SegmentDurations::new();

	let mut i = 0;
	while i < lines.len() {
		let line = lines[i].trim();
		let Some(info) = line.strip_prefix(EXTINF) else {
			i += 1;
			continue;
		};

		let raw = info.split(',').next().unwrap_or_default().trim();
		let duration: f64 = raw.parse().map_err(|_| format!("bad segment duration '{raw}' on line {}", i + 1))?;
		if let Some(segment) = lines.get(i + 1) {
			durations.insert(segment.trim().to_string(), duration);
		}
		i += 2;
	}

	Ok(durations)
}

/// Reads a media playlist written by ffmpeg.
pub fn read_segment_durations(path: &Path) -> Result<SegmentDurations> {
	let text = fs::read_to_string(path)?;
	parse_segment_durations(&text).map_err(|reason| Error::Playlist {
		path: path.to_path_buf(),
		reason,
	})
}

/// Renders a single VOD playlist over `segments` (already ordered).
///
/// Segments without a known duration are listed with [`SEGMENT_DURATION`]
/// written as a whole number.
pub fn render_master_playlist(segments: &[String], durations: &SegmentDurations) -> String {
	let default = f64::from(SEGMENT_DURATION);
	let target = durations.values().copied().fold(None, |max: Option<f64>, d| Some(max.map_or(d, |m| m.max(d))));
	let target = target.unwrap_or(default).round_ties_even() as u64;

	let mut out = String::new();
	out.push_str("#EXTM3U\n");
	out.push_str("#EXT-X-VERSION:3\n");
	out.push_str("#EXT-X-ALLOW-CACHE:YES\n");
	let _ = writeln!(out, "#EXT-X-TARGETDURATION:{target}");
	for segment in segments {
		let _ = match durations.get(segment) {
			Some(duration) => writeln!(out, "{EXTINF}{},", format_duration(*duration)),
			None => writeln!(out, "{EXTINF}{SEGMENT_DURATION},"),
		};
		let _ = writeln!(out, "{segment}");
	}
	out.push_str("#EXT-X-ENDLIST\n");
	out
}

/// Writes `<dir>/<hash_name>.m3u8` listing `ts_files` in path order.
pub fn write_master_playlist(dir: &Path, ts_files: &[PathBuf], durations: &SegmentDurations, hash_name: &str) -> Result<PathBuf> {
	let mut sorted = ts_files.to_vec();
	sorted.sort();
	let names: Vec<String> = sorted
		.iter()
		.filter_map(|path| path.file_name())
		.map(|name| name.to_string_lossy().into_owned())
		.collect();

	let path = dir.join(format!("{hash_name}.m3u8"));
	fs::write(&path, render_master_playlist(&names, durations))?;
	Ok(path)
}

fn format_duration(seconds: f64) -> String {
	if seconds.fract() == 0.0 {
		format!("{seconds:.1}")
	} else {
		seconds.to_string()
	}
}
