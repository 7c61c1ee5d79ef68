//! CLI argument parsing.

mod args;
mod clip;

pub use args::{Cli, Command, ConfigAction, ProbeArgs};
pub use clip::ClipArgs;
