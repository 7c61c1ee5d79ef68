//! Configuration type definitions.

use crate::clipper::{ExtractMode, OverrunPolicy};
use crate::constants::{DEFAULT_CLIP_COUNT, DEFAULT_CLIP_LENGTH, DEFAULT_OUTPUT_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// External tool settings.
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Default clip generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Clip length in seconds.
    pub clip_length: f64,

    /// Number of clips to generate per invocation.
    pub count: usize,

    /// Extraction mode.
    pub mode: ExtractMode,

    /// Output directory for extracted clips.
    pub output_dir: PathBuf,

    /// Policy when the requested clip length exceeds the source duration.
    pub on_overrun: OverrunPolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            clip_length: DEFAULT_CLIP_LENGTH,
            count: DEFAULT_CLIP_COUNT,
            mode: ExtractMode::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            on_overrun: OverrunPolicy::default(),
        }
    }
}

/// External tool path overrides.
///
/// When unset, binaries are resolved from `PATH`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Explicit path to the ffmpeg binary.
    pub ffmpeg: Option<PathBuf>,

    /// Explicit path to the ffprobe binary.
    pub ffprobe: Option<PathBuf>,
}
