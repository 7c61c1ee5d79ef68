//! Configuration validation.

use crate::config::Config;
use crate::constants::{MAX_CLIP_COUNT, MAX_CLIP_LENGTH};
use crate::error::{Error, Result};

/// Validate the loaded configuration.
///
/// # Errors
///
/// Returns [`Error::ConfigValidation`] if any default is out of bounds.
pub fn validate_config(config: &Config) -> Result<()> {
    let clip_length = config.defaults.clip_length;
    if !clip_length.is_finite() || clip_length <= 0.0 || clip_length > MAX_CLIP_LENGTH {
        return Err(Error::ConfigValidation {
            message: format!(
                "defaults.clip_length must be between 0 (exclusive) and {MAX_CLIP_LENGTH}, \
                 got {clip_length}"
            ),
        });
    }

    let count = config.defaults.count;
    if count == 0 || count > MAX_CLIP_COUNT {
        return Err(Error::ConfigValidation {
            message: format!("defaults.count must be between 1 and {MAX_CLIP_COUNT}, got {count}"),
        });
    }

    Ok(())
}
