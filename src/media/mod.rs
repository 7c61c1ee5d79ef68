//! Media asset probing and external tool resolution.

mod asset;
mod probe;
mod tools;

pub use asset::MediaAsset;
pub use probe::{VideoInfo, probe_video};
pub use tools::resolve_tool;
