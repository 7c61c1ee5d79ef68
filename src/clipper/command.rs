//! Clip command execution.

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{info, warn};

use crate::cli::ClipArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::media::MediaAsset;
use crate::output::{ClipEntry, ClipResultPayload, OutputMode, ResultType, emit_json_result};

use super::{ClipExtractor, ClipRequest, ClipWriter, OverrunPolicy, select_window};

/// Execute the clip command.
///
/// Probes the source video, selects one random window per requested clip
/// and extracts each window via ffmpeg.
///
/// # Errors
///
/// Returns an error if probing fails, the clip request is invalid, or no
/// clip could be extracted.
pub fn execute(
    args: &ClipArgs,
    config: &Config,
    output_mode: OutputMode,
    progress_enabled: bool,
) -> Result<()> {
    let asset = MediaAsset::probe(&args.video, config.tools.ffprobe.as_deref())?;
    info!(
        "Source video: {} ({:.2}s)",
        args.video.display(),
        asset.duration()
    );

    // CLI options override config defaults
    let clip_length = args.length.unwrap_or(config.defaults.clip_length);
    let count = args.count.unwrap_or(config.defaults.count);
    let mode = args.mode.unwrap_or(config.defaults.mode);
    let policy = if args.clamp {
        OverrunPolicy::Clamp
    } else {
        config.defaults.on_overrun
    };
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.defaults.output_dir.clone());

    let request = ClipRequest::new(asset.duration(), clip_length)?;
    let extractor = ClipExtractor::new(mode, config.tools.ffmpeg.as_deref())?;
    let writer = ClipWriter::new(output_dir.clone());

    // Seeded runs are reproducible; otherwise use the thread RNG.
    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    let is_json = output_mode.is_structured();

    #[allow(clippy::cast_possible_truncation)]
    let pb = if is_json || !progress_enabled || count < 2 {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(count as u64);
        // Template is hardcoded and known to be valid
        #[allow(clippy::expect_used)]
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} clips ({msg})")
                .expect("valid progress template")
                .progress_chars("#>-"),
        );
        pb
    };

    let mut entries: Vec<ClipEntry> = Vec::new();

    for index in 0..count {
        let window = select_window(&request, policy, &mut *rng)?;
        let output_path = writer.plan_clip(&args.video, &window)?;

        pb.set_message(format!("{:.1}s-{:.1}s", window.start, window.end));

        match extractor.extract(&asset, &window, &output_path) {
            Ok(()) => {
                info!(
                    "Extracted clip {:.2}s-{:.2}s -> {}",
                    window.start,
                    window.end,
                    output_path.display()
                );
                entries.push(ClipEntry {
                    start_time: window.start,
                    end_time: window.end,
                    output_file: output_path,
                });
            }
            Err(e) => {
                warn!(
                    "Failed to extract clip {} at {:.1}s-{:.1}s: {e}",
                    index + 1,
                    window.start,
                    window.end
                );
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if entries.is_empty() {
        return Err(Error::NoClipsExtracted {
            path: args.video.clone(),
        });
    }

    if is_json {
        let payload = ClipResultPayload {
            result_type: ResultType::ClipExtraction,
            source_video: args.video.clone(),
            source_duration: asset.duration(),
            clip_length,
            output_dir,
            total_clips: entries.len(),
            clips: entries,
        };
        emit_json_result(&payload);
        return Ok(());
    }

    // Human-readable: print one clip path per line on stdout
    for entry in &entries {
        println!("{}", entry.output_file.display());
    }

    Ok(())
}
