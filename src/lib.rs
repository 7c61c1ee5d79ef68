//! Reva - random video clip generator.
//!
//! Selects uniformly random fixed-length windows from a video file and
//! materializes them as clips by delegating to FFmpeg.

#![warn(missing_docs)]

pub mod cli;
pub mod clipper;
pub mod config;
pub mod constants;
pub mod error;
pub mod media;
pub mod output;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, ProbeArgs};
use config::Config;
use media::MediaAsset;
use output::{OutputMode, ProbePayload, ResultType, emit_json_result};

pub use error::{Error, Result};

/// Main entry point for the reva CLI.
///
/// # Errors
///
/// Returns an error if the invoked command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = config::load_default_config()?;
    config::validate_config(&config)?;

    match cli.command {
        Command::Clip(args) => {
            let output_mode = if args.json {
                OutputMode::Json
            } else {
                OutputMode::Human
            };
            let progress_enabled = !cli.quiet && !args.no_progress;
            clipper::command::execute(&args, &config, output_mode, progress_enabled)
        }
        Command::Probe(args) => handle_probe(&args, &config),
        Command::Config { action } => handle_config_command(action),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_probe(args: &ProbeArgs, config: &Config) -> Result<()> {
    let asset = MediaAsset::probe(&args.video, config.tools.ffprobe.as_deref())?;
    let info = asset.info();

    if args.json {
        let payload = ProbePayload {
            result_type: ResultType::Probe,
            video: args.video.clone(),
            info: info.clone(),
        };
        emit_json_result(&payload);
    } else {
        println!("Duration:   {:.2} s", info.duration_seconds);
        println!("Resolution: {}x{}", info.width, info.height);
        println!("Codec:      {}", info.codec);
        println!("Frame rate: {:.3} fps", info.frame_rate);
    }

    Ok(())
}

fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config::config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = config::save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = config::load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config::config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
