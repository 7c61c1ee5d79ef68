//! CLI for the clip subcommand.

use std::path::PathBuf;

use clap::Args;

use crate::clipper::ExtractMode;
use crate::constants::{MAX_CLIP_COUNT, MAX_CLIP_LENGTH};

/// Arguments for the clip subcommand.
#[derive(Debug, Args)]
pub struct ClipArgs {
    /// Source video file.
    pub video: PathBuf,

    /// Clip length in seconds.
    #[arg(short = 'l', long, value_parser = parse_clip_length, env = "REVA_CLIP_LENGTH")]
    pub length: Option<f64>,

    /// Number of clips to generate.
    #[arg(short = 'n', long, value_parser = parse_clip_count, env = "REVA_CLIP_COUNT")]
    pub count: Option<usize>,

    /// Output directory for extracted clips.
    #[arg(short, long, env = "REVA_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// RNG seed for reproducible window selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Extraction mode.
    #[arg(long, value_enum)]
    pub mode: Option<ExtractMode>,

    /// Extract the full source instead of failing when the requested
    /// length exceeds the video duration.
    #[arg(long)]
    pub clamp: bool,

    /// Emit results as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

fn parse_clip_length(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value <= 0.0 {
        return Err(format!("clip length must be greater than 0, got {value}"));
    }

    if value > MAX_CLIP_LENGTH {
        return Err(format!(
            "clip length cannot exceed {MAX_CLIP_LENGTH} seconds, got {value}"
        ));
    }

    Ok(value)
}

fn parse_clip_count(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid count"))?;

    if value == 0 {
        return Err("count must be at least 1".to_string());
    }

    if value > MAX_CLIP_COUNT {
        return Err(format!(
            "count cannot exceed {MAX_CLIP_COUNT}, got {value}"
        ));
    }

    Ok(value)
}
