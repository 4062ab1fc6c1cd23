//! Color types and sRGB conversion
//!
//! This module distinguishes the two sides of the sRGB gamma curve:
//!
//! - **Encoded** 8-bit channel values ([`Rgb`]): what callers hold, what
//!   images and stylesheets store. Perceptually spaced, wrong for
//!   arithmetic.
//! - **Linear** light intensity (`f64` in 0.0..=1.0): proportional to
//!   physical light output. All luminance math happens here.
//!
//! # Example
//!
//! ```
//! use contrast_pick::{channel_to_linear, linear_to_channel, Rgb};
//!
//! let color = Rgb::new(128, 64, 32);
//!
//! // Decode one channel to linear intensity for calculations
//! let linear = channel_to_linear(color.r);
//!
//! // Encode a computed linear value back to an 8-bit channel
//! let encoded = linear_to_channel(linear).unwrap();
//! assert_eq!(encoded, color.r);
//! ```

mod gamma;
mod luminance;
mod rgb;

pub use gamma::{channel_to_linear, linear_to_channel, GamutError};
pub use luminance::{relative_luminance, Channel};
pub use rgb::{ColorError, Rgb};
