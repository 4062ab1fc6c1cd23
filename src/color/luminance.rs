//! Relative luminance
//!
//! Relative luminance is the perceptual brightness proxy behind the WCAG
//! contrast formula: a fixed weighted sum of the gamma-decoded channel
//! intensities. The weights reflect the eye's uneven sensitivity -- green
//! dominates, blue barely registers.

use super::gamma::channel_to_linear;
use super::rgb::Rgb;

/// One channel of an RGB color, in the fixed R, G, B processing order.
///
/// The contrast search walks channels in this order, spending each
/// channel's share of the luminance budget in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red
    R,
    /// Green
    G,
    /// Blue
    B,
}

impl Channel {
    /// All channels in the fixed traversal order.
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    /// WCAG luminance weight of this channel.
    ///
    /// The weights (0.2126, 0.7152, 0.0722) sum to 1 by construction.
    #[inline]
    pub const fn weight(self) -> f64 {
        match self {
            Channel::R => 0.2126,
            Channel::G => 0.7152,
            Channel::B => 0.0722,
        }
    }
}

/// Relative luminance of a color per the WCAG 2.x formula.
///
/// Each channel is gamma-decoded to linear intensity, then combined as
/// `0.2126*R + 0.7152*G + 0.0722*B`. The result is in 0.0..=1.0: 0 for
/// black, 1 for white.
///
/// # Example
/// ```
/// use contrast_pick::{relative_luminance, Rgb};
///
/// let lum = relative_luminance(Rgb::new(0, 255, 0));
/// assert!((lum - 0.7152).abs() < 1e-9);
/// ```
pub fn relative_luminance(color: Rgb) -> f64 {
    Channel::R.weight() * channel_to_linear(color.r)
        + Channel::G.weight() * channel_to_linear(color.g)
        + Channel::B.weight() * channel_to_linear(color.b)
}
