//! Tests for clip output path planning.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use reva::clipper::{ClipWindow, ClipWriter};
use tempfile::TempDir;

#[test]
fn test_plan_clip_creates_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("clips");
    let writer = ClipWriter::new(output_dir.clone());

    let window = ClipWindow {
        start: 10.5,
        end: 20.5,
    };
    let path = writer.plan_clip(Path::new("lecture.mp4"), &window).unwrap();

    assert!(output_dir.is_dir());
    assert!(path.starts_with(&output_dir));
}

#[test]
fn test_plan_clip_filename_format() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ClipWriter::new(temp_dir.path().to_path_buf());

    let window = ClipWindow {
        start: 42.5,
        end: 52.5,
    };
    let path = writer.plan_clip(Path::new("lecture.mp4"), &window).unwrap();

    let filename = path.file_name().unwrap().to_str().unwrap();
    assert_eq!(filename, "lecture_clip_42.5-52.5.mp4");
}

#[test]
fn test_plan_clip_sanitizes_stem() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ClipWriter::new(temp_dir.path().to_path_buf());

    let window = ClipWindow {
        start: 0.0,
        end: 1.0,
    };
    let path = writer
        .plan_clip(Path::new("we:ird*name.mp4"), &window)
        .unwrap();

    let filename = path.file_name().unwrap().to_str().unwrap();
    assert!(!filename.contains(':'));
    assert!(!filename.contains('*'));
}

#[test]
fn test_plan_clip_avoids_collisions() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ClipWriter::new(temp_dir.path().to_path_buf());

    let window = ClipWindow {
        start: 5.0,
        end: 15.0,
    };

    let first = writer.plan_clip(Path::new("video.mp4"), &window).unwrap();
    std::fs::write(&first, b"clip").unwrap();

    let second = writer.plan_clip(Path::new("video.mp4"), &window).unwrap();
    assert_ne!(first, second);
    let filename = second.file_name().unwrap().to_str().unwrap();
    assert!(filename.ends_with("_2.mp4"));
}
