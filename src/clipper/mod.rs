//! Random clip selection and extraction.
//!
//! This module selects uniformly random time windows within a source
//! video and materializes them into clip files via ffmpeg.

pub mod command;
mod extractor;
mod selector;
mod writer;

pub use extractor::{ClipExtractor, ExtractMode};
pub use selector::{ClipRequest, ClipWindow, OverrunPolicy, select_window};
pub use writer::ClipWriter;
