//! Media asset handle.

use std::path::{Path, PathBuf};

use super::{VideoInfo, probe_video};
use crate::error::Result;

/// An already-materialized video file together with its probed metadata.
///
/// The asset is constructed once per invocation and passed explicitly
/// through the call chain; it is read-only to everything downstream.
#[derive(Debug, Clone)]
pub struct MediaAsset {
    path: PathBuf,
    info: VideoInfo,
}

impl MediaAsset {
    /// Probe a video file and wrap it as an asset.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be probed.
    pub fn probe(path: &Path, ffprobe_override: Option<&Path>) -> Result<Self> {
        let info = probe_video(path, ffprobe_override)?;
        Ok(Self {
            path: path.to_path_buf(),
            info,
        })
    }

    /// Path to the video file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Probed duration in seconds.
    pub fn duration(&self) -> f64 {
        self.info.duration_seconds
    }

    /// Full probed stream information.
    pub fn info(&self) -> &VideoInfo {
        &self.info
    }
}
