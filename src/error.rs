//! Error types for reva.

/// Result type alias for reva operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for reva.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Source video file does not exist.
    #[error("source video file not found: {path}")]
    SourceVideoNotFound {
        /// Path to the missing video file.
        path: std::path::PathBuf,
    },

    /// ffprobe invocation failed.
    #[error("failed to probe '{path}': {message}")]
    ProbeFailed {
        /// Path to the video file.
        path: std::path::PathBuf,
        /// Error output from ffprobe.
        message: String,
    },

    /// ffprobe output could not be parsed.
    #[error("failed to parse ffprobe output for '{path}'")]
    ProbeParse {
        /// Path to the video file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Source duration is zero, negative or non-finite.
    #[error("invalid source duration: {value} seconds")]
    InvalidDuration {
        /// The invalid duration value.
        value: f64,
    },

    /// Requested clip length is zero, negative or non-finite.
    #[error("invalid clip length: {value} seconds (must be greater than 0)")]
    InvalidClipLength {
        /// The invalid clip length value.
        value: f64,
    },

    /// Requested clip is longer than the source video.
    #[error(
        "requested clip length {clip_length}s exceeds source duration {source_duration}s \
         (use --clamp to extract the full source instead)"
    )]
    ClipExceedsSource {
        /// Requested clip length in seconds.
        clip_length: f64,
        /// Source video duration in seconds.
        source_duration: f64,
    },

    /// Required external tool is not installed.
    #[error("'{name}' not found in PATH (install FFmpeg or set tools.{name} in config)")]
    ToolNotFound {
        /// Name of the missing binary.
        name: String,
    },

    /// Configured tool path does not exist.
    #[error("configured {name} binary does not exist: {path}")]
    ToolPathInvalid {
        /// Name of the binary.
        name: String,
        /// The configured path.
        path: std::path::PathBuf,
    },

    /// ffmpeg clip extraction failed.
    #[error("failed to extract clip '{path}': {message}")]
    ExtractionFailed {
        /// Path to the output clip.
        path: std::path::PathBuf,
        /// Error output from ffmpeg.
        message: String,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No clips could be extracted.
    #[error("no clips could be extracted from '{path}'")]
    NoClipsExtracted {
        /// Path to the source video.
        path: std::path::PathBuf,
    },
}
