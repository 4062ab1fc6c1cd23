//! sRGB transfer functions
//!
//! Conversion between 8-bit gamma-encoded channel values and linear light
//! intensity. All luminance math happens on the linear side; the encoded
//! side is what callers hold and what displays consume.
//!
//! The piecewise constants below (0.03928 on the decode side, 0.00303949 on
//! the encode side) are the WCAG 2.x published values, kept exactly so that
//! computed ratios match contrast checkers built on the same formula.

use thiserror::Error;

/// Decode-side cutoff between the linear segment and the power segment,
/// applied to the normalized (0.0..=1.0) encoded value.
const SRGB_DECODE_CUTOFF: f64 = 0.03928;

/// Encode-side cutoff, applied to the linear value.
const SRGB_ENCODE_CUTOFF: f64 = 0.00303949;

/// A linear light value outside the encodable 0.0..=1.0 range.
///
/// Returned by [`linear_to_channel`]. During the contrast search this is an
/// expected outcome -- an infeasible sample -- handled by abandoning the
/// attempt and drawing again. It never surfaces through the public search
/// API.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("linear channel value {value} outside the encodable range 0.0..=1.0")]
pub struct GamutError {
    /// The out-of-range linear value.
    pub value: f64,
}

/// Decode an 8-bit sRGB channel value to linear light intensity.
///
/// Normalizes by 255, then applies the piecewise sRGB decode: values at or
/// below the cutoff divide by 12.92, the rest go through the 2.4 power
/// curve. The result is in 0.0..=1.0.
#[inline]
pub fn channel_to_linear(value: u8) -> f64 {
    let normalized = value as f64 / 255.0;
    if normalized <= SRGB_DECODE_CUTOFF {
        normalized / 12.92
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear light value as an 8-bit sRGB channel value.
///
/// Applies the inverse piecewise encode, scales by 255 and rounds to the
/// nearest integer. Fails with [`GamutError`] when `linear` is outside
/// 0.0..=1.0 (NaN included).
///
/// Round-trip guarantee: `linear_to_channel(channel_to_linear(v))` is
/// within 1 of `v` for every 8-bit `v` (rounding, not bit-exact equality).
#[inline]
pub fn linear_to_channel(linear: f64) -> Result<u8, GamutError> {
    if !(0.0..=1.0).contains(&linear) {
        return Err(GamutError { value: linear });
    }
    let encoded = if linear <= SRGB_ENCODE_CUTOFF {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    Ok((encoded * 255.0).round() as u8)
}
