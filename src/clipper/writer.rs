//! Output path planning for extracted clips.
//!
//! ffmpeg writes the clip bytes itself; this module owns the output
//! directory and generates collision-free clip filenames.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CLIP_EXTENSION;
use crate::error::{Error, Result};

use super::ClipWindow;

/// Plans output paths for extracted clips.
pub struct ClipWriter {
    /// Output directory for clips.
    output_dir: PathBuf,
}

impl ClipWriter {
    /// Create a new clip writer with the given output directory.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Plan the output path for a clip of `source` covering `window`.
    ///
    /// Creates the output directory if needed and returns a path that does
    /// not collide with an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created.
    pub fn plan_clip(&self, source: &Path, window: &ClipWindow) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("clip");
        let safe_stem = sanitize_filename(stem);

        let mut path = self
            .output_dir
            .join(generate_filename(&safe_stem, window.start, window.end));

        // Disambiguate repeated draws that land on the same 0.1s bucket.
        let mut attempt = 2;
        while path.exists() {
            path = self.output_dir.join(format!(
                "{}_{}.{}",
                generate_stem(&safe_stem, window.start, window.end),
                attempt,
                CLIP_EXTENSION
            ));
            attempt += 1;
        }

        Ok(path)
    }
}

/// Sanitize a string for use as a filename.
///
/// Replaces characters that are invalid in filenames across platforms
/// and prevents path traversal.
fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();

    sanitized.replace("..", "__")
}

/// Generate a clip filename.
///
/// Format: `stem_clip_start-end.mp4`
/// Example: `lecture_clip_42.5-52.5.mp4`
fn generate_filename(stem: &str, start_time: f64, end_time: f64) -> String {
    format!(
        "{}.{}",
        generate_stem(stem, start_time, end_time),
        CLIP_EXTENSION
    )
}

fn generate_stem(stem: &str, start_time: f64, end_time: f64) -> String {
    format!("{stem}_clip_{start_time:.1}-{end_time:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("lecture 01"), "lecture 01");
        assert_eq!(sanitize_filename("a/b:c*d"), "a_b_c_d");
        assert_eq!(sanitize_filename("file?name"), "file_name");
    }

    #[test]
    fn test_sanitize_filename_prevents_path_traversal() {
        assert_eq!(sanitize_filename(".."), "__");
        assert_eq!(sanitize_filename("../etc"), "___etc");
        assert_eq!(sanitize_filename("foo/../bar"), "foo____bar");
    }

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("lecture", 42.5, 52.5);
        assert_eq!(filename, "lecture_clip_42.5-52.5.mp4");
    }
}
