//! Unified error type for the contrast-pick public API.
//!
//! [`ContrastError`] wraps the crate's validation errors into a single enum
//! for convenient `?` propagation in application code. Validation is
//! fail-fast and caller-visible; the search itself never errors -- an
//! exhausted attempt budget is `Ok(None)`.

use thiserror::Error;

use crate::color::ColorError;

/// An unusable target contrast ratio.
///
/// Checked once at the public API boundary, before any search work runs.
/// Valid targets lie in the half-open interval (0, 21]; 21 is the contrast
/// of black against white, the largest ratio any color pair can reach.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TargetRatioError {
    /// The target is NaN or not above 0.
    #[error("target contrast ratio must be greater than 0, got {value}")]
    TooLow {
        /// The rejected value.
        value: f64,
    },
    /// The target exceeds the maximum possible contrast ratio of 21.
    #[error("target contrast ratio must be at most 21, got {value}")]
    TooHigh {
        /// The rejected value.
        value: f64,
    },
}

impl TargetRatioError {
    /// Validate a caller-supplied target ratio against the (0, 21] range.
    pub(crate) fn check(value: f64) -> Result<(), TargetRatioError> {
        if value.is_nan() || value <= 0.0 {
            Err(TargetRatioError::TooLow { value })
        } else if value > 21.0 {
            Err(TargetRatioError::TooHigh { value })
        } else {
            Ok(())
        }
    }
}

/// Unified error type for the contrast-pick public API.
///
/// # Example
///
/// ```
/// use contrast_pick::{find_contrast_color, ContrastError, Rgb};
///
/// fn pick(background: &[i32], target: f64) -> Result<Option<Rgb>, ContrastError> {
///     let background = Rgb::from_slice(background)?;
///     find_contrast_color(background, target)
/// }
///
/// assert!(pick(&[128, 128, 128], 3.0).is_ok());
/// assert!(pick(&[256, 0, 0], 3.0).is_err());
/// assert!(pick(&[128, 128, 128], 22.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContrastError {
    /// Malformed or out-of-range RGB input.
    #[error("invalid color: {0}")]
    Color(#[from] ColorError),
    /// Target contrast ratio outside (0, 21].
    #[error("invalid target ratio: {0}")]
    Target(#[from] TargetRatioError),
}
