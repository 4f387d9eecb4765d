//! Error types for building image values.

use thiserror::Error;

/// Errors raised while constructing or re-anchoring an image.
///
/// These are raised before any pixel work happens, so a failed call never
/// leaves a partially built image behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A width, height, radius or side length was zero or negative.
    #[error("Invalid {name}: {value} (must be a positive number of pixels)")]
    InvalidDimension { name: &'static str, value: i64 },

    /// An anchor name outside left/middle/right or top/middle/bottom.
    #[error("Invalid anchor: {0:?}")]
    InvalidAnchor(String),

    /// A color string that is neither a known name nor a hex literal.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

/// Reject non-positive pixel dimensions.
pub(crate) fn validate_dimension(name: &'static str, value: i32) -> Result<u32, BuildError> {
    if value <= 0 {
        return Err(BuildError::InvalidDimension {
            name,
            value: value as i64,
        });
    }
    Ok(value as u32)
}
