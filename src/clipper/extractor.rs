//! Clip extraction via ffmpeg.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::ffmpeg::{
    AUDIO_BITRATE, AUDIO_CODEC, CRF, FFMPEG_BIN, PRESET, VIDEO_CODEC,
};
use crate::error::{Error, Result};
use crate::media::{MediaAsset, resolve_tool};

use super::ClipWindow;

/// How ffmpeg cuts the clip out of the source.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Keyframe-aligned stream copy (fast, approximate cut points).
    #[default]
    Copy,
    /// Re-encode with libx264 (slow, frame-exact cut points).
    Encode,
}

impl std::fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Encode => write!(f, "encode"),
        }
    }
}

/// Extracts time windows from source videos by invoking ffmpeg.
pub struct ClipExtractor {
    ffmpeg: PathBuf,
    mode: ExtractMode,
}

impl ClipExtractor {
    /// Create a new clip extractor.
    ///
    /// # Errors
    ///
    /// Returns an error if the ffmpeg binary cannot be resolved.
    pub fn new(mode: ExtractMode, ffmpeg_override: Option<&Path>) -> Result<Self> {
        let ffmpeg = resolve_tool(FFMPEG_BIN, ffmpeg_override)?;
        Ok(Self { ffmpeg, mode })
    }

    /// Extract the given window from the source into `output`.
    ///
    /// Runs ffmpeg synchronously. The tool's stderr is captured and carried
    /// unchanged in the error on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExtractionFailed`] if ffmpeg exits non-zero, or an
    /// I/O error if it cannot be spawned.
    pub fn extract(&self, asset: &MediaAsset, window: &ClipWindow, output: &Path) -> Result<()> {
        let start = format_timestamp(window.start);
        let end = format_timestamp(window.end);

        let mut cmd = Command::new(&self.ffmpeg);
        cmd.args(["-hide_banner", "-loglevel", "error", "-y"])
            .args(["-ss", &start, "-to", &end, "-i"])
            .arg(asset.path());

        match self.mode {
            ExtractMode::Copy => {
                cmd.args(["-c", "copy", "-avoid_negative_ts", "make_zero"]);
            }
            ExtractMode::Encode => {
                cmd.args(["-c:v", VIDEO_CODEC, "-preset", PRESET, "-crf", CRF])
                    .args(["-c:a", AUDIO_CODEC, "-b:a", AUDIO_BITRATE])
                    .args(["-movflags", "+faststart"]);
            }
        }
        cmd.arg(output);

        debug!(
            "Extracting {start}-{end} from {} ({} mode)",
            asset.path().display(),
            self.mode
        );

        let result = cmd.output()?;
        if !result.status.success() {
            return Err(Error::ExtractionFailed {
                path: output.to_path_buf(),
                message: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Format seconds as an ffmpeg `HH:MM:SS.mmm` timestamp.
fn format_timestamp(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hours = (seconds / 3600.0) as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = ((seconds % 3600.0) / 60.0) as u32;
    let secs = seconds % 60.0;
    format!("{hours:02}:{minutes:02}:{secs:06.3}")
}
