//! Video stream probing via ffprobe.

use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::ffmpeg::FFPROBE_BIN;
use crate::error::{Error, Result};

use super::resolve_tool;

/// Stream and container information for a video file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Container duration in seconds.
    pub duration_seconds: f64,
    /// Video frame width in pixels (0 if no video stream).
    pub width: u32,
    /// Video frame height in pixels (0 if no video stream).
    pub height: u32,
    /// Video codec name.
    pub codec: String,
    /// Average frame rate in frames per second.
    pub frame_rate: f64,
}

/// Probe a video file with ffprobe.
///
/// # Errors
///
/// Returns an error if the file does not exist, ffprobe fails or its
/// output cannot be parsed, or the reported duration is not positive.
pub fn probe_video(path: &Path, ffprobe_override: Option<&Path>) -> Result<VideoInfo> {
    if !path.exists() {
        return Err(Error::SourceVideoNotFound {
            path: path.to_path_buf(),
        });
    }

    let ffprobe = resolve_tool(FFPROBE_BIN, ffprobe_override)?;
    debug!("Probing {} with {}", path.display(), ffprobe.display());

    let output = Command::new(&ffprobe)
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
            "-select_streams",
            "v:0",
        ])
        .arg(path)
        .output()?;

    if !output.status.success() {
        return Err(Error::ProbeFailed {
            path: path.to_path_buf(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).map_err(|e| Error::ProbeParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let duration_seconds = json["format"]["duration"]
        .as_str()
        .and_then(|d| d.parse::<f64>().ok())
        .ok_or_else(|| Error::ProbeFailed {
            path: path.to_path_buf(),
            message: "no duration in ffprobe output".to_string(),
        })?;

    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(Error::InvalidDuration {
            value: duration_seconds,
        });
    }

    let stream = json["streams"].as_array().and_then(|s| s.first());

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (width, height) = stream.map_or((0, 0), |s| {
        (
            s["width"].as_u64().unwrap_or(0) as u32,
            s["height"].as_u64().unwrap_or(0) as u32,
        )
    });

    let codec = stream
        .and_then(|s| s["codec_name"].as_str())
        .unwrap_or("unknown")
        .to_string();

    let frame_rate = stream
        .and_then(|s| {
            s["r_frame_rate"]
                .as_str()
                .or_else(|| s["avg_frame_rate"].as_str())
        })
        .map_or(0.0, parse_frame_rate);

    Ok(VideoInfo {
        duration_seconds,
        width,
        height,
        codec,
        frame_rate,
    })
}

/// Parse an ffprobe frame rate string (e.g. `"30000/1001"` or `"30"`).
fn parse_frame_rate(value: &str) -> f64 {
    if let Some((num, den)) = value.split_once('/') {
        let num: f64 = num.parse().unwrap_or(0.0);
        let den: f64 = den.parse().unwrap_or(0.0);
        if den != 0.0 {
            return num / den;
        }
        return 0.0;
    }
    value.parse().unwrap_or(0.0)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_rate_fraction() {
        assert!((parse_frame_rate("30000/1001") - 29.97).abs() < 0.01);
        assert_eq!(parse_frame_rate("25/1"), 25.0);
    }

    #[test]
    fn test_parse_frame_rate_plain() {
        assert_eq!(parse_frame_rate("30"), 30.0);
        assert_eq!(parse_frame_rate("23.976"), 23.976);
    }

    #[test]
    fn test_parse_frame_rate_invalid() {
        assert_eq!(parse_frame_rate("abc"), 0.0);
        assert_eq!(parse_frame_rate("30/0"), 0.0);
    }

    #[test]
    fn test_probe_missing_file_fails() {
        let result = probe_video(Path::new("/nonexistent/video.mp4"), None);
        assert!(matches!(result, Err(Error::SourceVideoNotFound { .. })));
    }
}
