//! Integration tests for the reva binary.

#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Render a short synthetic test video, or `None` if ffmpeg is missing.
fn make_test_video(dir: &Path) -> Option<PathBuf> {
    let video = dir.join("test.mp4");
    let status = Command::new("ffmpeg")
        .args([
            "-hide_banner",
            "-loglevel",
            "error",
            "-y",
            "-f",
            "lavfi",
            "-i",
            "testsrc=duration=4:size=128x72:rate=10",
        ])
        .arg(&video)
        .status()
        .ok()?;
    status.success().then_some(video)
}

#[test]
fn test_clip_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.arg("clip").arg("/nonexistent/video.mp4");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("source video file not found"));
}

#[test]
fn test_clip_rejects_zero_length_at_parse() {
    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.args(["clip", "video.mp4", "-l", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("clip length must be greater than 0"));
}

#[test]
fn test_config_path_prints_toml_path() {
    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.args(["config", "path"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("clip"))
        .stdout(predicate::str::contains("probe"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_clip_extracts_random_window() {
    let temp_dir = TempDir::new().unwrap();
    let Some(video) = make_test_video(temp_dir.path()) else {
        eprintln!("Skipping test: ffmpeg not available");
        return;
    };
    let output_dir = temp_dir.path().join("clips");

    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.arg("clip")
        .arg(&video)
        .args(["-l", "2", "--seed", "1", "-q"])
        .arg("-o")
        .arg(&output_dir);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".mp4"));

    let clips: Vec<_> = std::fs::read_dir(&output_dir).unwrap().collect();
    assert_eq!(clips.len(), 1);
}

#[test]
fn test_clip_longer_than_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let Some(video) = make_test_video(temp_dir.path()) else {
        eprintln!("Skipping test: ffmpeg not available");
        return;
    };

    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.arg("clip")
        .arg(&video)
        .args(["-l", "3600", "-q"])
        .arg("-o")
        .arg(temp_dir.path().join("clips"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceeds source duration"));
}

#[test]
fn test_clip_longer_than_source_clamps_with_flag() {
    let temp_dir = TempDir::new().unwrap();
    let Some(video) = make_test_video(temp_dir.path()) else {
        eprintln!("Skipping test: ffmpeg not available");
        return;
    };

    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.arg("clip")
        .arg(&video)
        .args(["-l", "3600", "--clamp", "-q"])
        .arg("-o")
        .arg(temp_dir.path().join("clips"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".mp4"));
}

#[test]
fn test_clip_json_output_shape() {
    let temp_dir = TempDir::new().unwrap();
    let Some(video) = make_test_video(temp_dir.path()) else {
        eprintln!("Skipping test: ffmpeg not available");
        return;
    };

    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.arg("clip")
        .arg(&video)
        .args(["-l", "2", "--seed", "1", "--json", "-q"])
        .arg("-o")
        .arg(temp_dir.path().join("clips"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"event\":\"result\""))
        .stdout(predicate::str::contains("\"result_type\":\"clip_extraction\""))
        .stdout(predicate::str::contains("\"total_clips\":1"));
}

#[test]
fn test_probe_json_output_shape() {
    let temp_dir = TempDir::new().unwrap();
    let Some(video) = make_test_video(temp_dir.path()) else {
        eprintln!("Skipping test: ffmpeg not available");
        return;
    };

    let mut cmd = Command::new(cargo_bin("reva"));
    cmd.arg("probe").arg(&video).arg("--json").arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"result_type\":\"probe\""))
        .stdout(predicate::str::contains("\"duration_seconds\""));
}
