//! Random clip window selection.
//!
//! Given a source duration and a desired clip length, derives a uniformly
//! random time window within the source. Selection is a pure computation;
//! materializing the window is the extractor's job.

use rand::Rng;

use crate::error::{Error, Result};

/// Policy for clips longer than the source video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrunPolicy {
    /// Fail with an error.
    #[default]
    Reject,
    /// Clamp the window to the full source duration.
    Clamp,
}

/// A validated request for a clip of a given length from a source video.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRequest {
    source_duration: f64,
    clip_length: f64,
}

impl ClipRequest {
    /// Create a new clip request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] if the source duration is not a
    /// positive finite number, and [`Error::InvalidClipLength`] if the clip
    /// length is not.
    pub fn new(source_duration: f64, clip_length: f64) -> Result<Self> {
        if !source_duration.is_finite() || source_duration <= 0.0 {
            return Err(Error::InvalidDuration {
                value: source_duration,
            });
        }
        if !clip_length.is_finite() || clip_length <= 0.0 {
            return Err(Error::InvalidClipLength { value: clip_length });
        }
        Ok(Self {
            source_duration,
            clip_length,
        })
    }

    /// Source video duration in seconds.
    pub fn source_duration(&self) -> f64 {
        self.source_duration
    }

    /// Requested clip length in seconds.
    pub fn clip_length(&self) -> f64 {
        self.clip_length
    }
}

/// A `[start, end)` time window within a source video, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    /// Window start time in seconds.
    pub start: f64,
    /// Window end time in seconds.
    pub end: f64,
}

impl ClipWindow {
    /// Window duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Select a uniformly random clip window within the source.
///
/// The start time is drawn from `[0, source_duration - clip_length]`, so the
/// window always fits inside the source. When the requested length exceeds
/// the source duration the outcome is governed by `policy`: reject with
/// [`Error::ClipExceedsSource`], or clamp to the full source.
///
/// # Errors
///
/// Returns [`Error::ClipExceedsSource`] under [`OverrunPolicy::Reject`] when
/// the clip cannot fit in the source.
pub fn select_window<R: Rng + ?Sized>(
    request: &ClipRequest,
    policy: OverrunPolicy,
    rng: &mut R,
) -> Result<ClipWindow> {
    if request.clip_length > request.source_duration {
        return match policy {
            OverrunPolicy::Reject => Err(Error::ClipExceedsSource {
                clip_length: request.clip_length,
                source_duration: request.source_duration,
            }),
            OverrunPolicy::Clamp => Ok(ClipWindow {
                start: 0.0,
                end: request.source_duration,
            }),
        };
    }

    let max_start = (request.source_duration - request.clip_length).max(0.0);
    let start = if max_start > 0.0 {
        rng.random_range(0.0..=max_start)
    } else {
        0.0
    };
    // Guard against floating point drift pushing the end past the source.
    let end = (start + request.clip_length).min(request.source_duration);

    Ok(ClipWindow { start, end })
}
