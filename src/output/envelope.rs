//! JSON envelope types for CLI output.
//!
//! Structured output for command-line operations, enabling reva to be
//! driven as a backend by scripts and frontends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::media::VideoInfo;

/// Current spec version for JSON envelope.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping all CLI output events.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct JsonEnvelope<T> {
    /// API specification version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Final result.
    Result,
    /// Error occurred.
    Error,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Clip extraction results.
    ClipExtraction,
    /// Video probe results.
    Probe,
}

/// Payload for clip extraction results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipResultPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Source video file.
    pub source_video: PathBuf,
    /// Probed source duration in seconds.
    pub source_duration: f64,
    /// Requested clip length in seconds.
    pub clip_length: f64,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Total clips extracted.
    pub total_clips: usize,
    /// List of extracted clips.
    pub clips: Vec<ClipEntry>,
}

/// A single extracted clip entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipEntry {
    /// Window start time in seconds.
    pub start_time: f64,
    /// Window end time in seconds.
    pub end_time: f64,
    /// Output clip file path.
    pub output_file: PathBuf,
}

/// Payload for probe results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbePayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Probed video file.
    pub video: PathBuf,
    /// Stream and container information.
    pub info: VideoInfo,
}
