//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "reva";

/// Default clip length in seconds.
pub const DEFAULT_CLIP_LENGTH: f64 = 10.0;

/// Default number of clips to generate per invocation.
pub const DEFAULT_CLIP_COUNT: usize = 1;

/// Maximum allowed clip length in seconds.
///
/// One hour is far beyond any useful "short" and guards against typos
/// like a millisecond value passed where seconds are expected.
pub const MAX_CLIP_LENGTH: f64 = 3600.0;

/// Maximum number of clips per invocation.
pub const MAX_CLIP_COUNT: usize = 100;

/// Default output directory for extracted clips.
pub const DEFAULT_OUTPUT_DIR: &str = "clips";

/// Output container extension for extracted clips.
pub const CLIP_EXTENSION: &str = "mp4";

/// External tool binary names and encoder settings.
pub mod ffmpeg {
    /// ffmpeg binary name.
    pub const FFMPEG_BIN: &str = "ffmpeg";

    /// ffprobe binary name.
    pub const FFPROBE_BIN: &str = "ffprobe";

    /// Video codec for re-encode extraction.
    pub const VIDEO_CODEC: &str = "libx264";

    /// Audio codec for re-encode extraction.
    pub const AUDIO_CODEC: &str = "aac";

    /// Audio bitrate for re-encode extraction.
    pub const AUDIO_BITRATE: &str = "128k";

    /// Encoder preset for re-encode extraction.
    pub const PRESET: &str = "fast";

    /// Constant rate factor for re-encode extraction.
    pub const CRF: &str = "23";
}
