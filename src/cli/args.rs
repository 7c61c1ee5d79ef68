//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Random video clip generation using FFmpeg.
#[derive(Debug, Parser)]
#[command(name = "reva")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress and informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random clips from a video.
    Clip(super::ClipArgs),
    /// Show duration and stream information for a video.
    Probe(ProbeArgs),
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for the probe subcommand.
#[derive(Debug, Args)]
pub struct ProbeArgs {
    /// Video file to probe.
    pub video: PathBuf,

    /// Emit results as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}
