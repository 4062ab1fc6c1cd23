//! contrast-pick: WCAG contrast math and contrast color search
//!
//! This library computes WCAG relative luminance and contrast ratio for
//! 8-bit sRGB colors, and searches for a color that exceeds a target
//! contrast ratio against a given background. It serves accessibility
//! tooling that needs *a* legally sufficient foreground color for an
//! arbitrary background, without always collapsing to black or white.
//!
//! # Quick Start
//!
//! The [`ContrastFinder`] builder is the primary entry point:
//!
//! ```
//! use contrast_pick::{contrast_ratio, ContrastFinder, Rgb};
//!
//! let background = Rgb::new(128, 128, 128);
//! let finder = ContrastFinder::new();
//!
//! if let Some(color) = finder.find(background, 3.0).unwrap() {
//!     assert!(contrast_ratio(color, background) > 3.0);
//! }
//! ```
//!
//! For one-off queries, [`find_contrast_color`] applies default options.
//! The underlying math is public too: [`relative_luminance`],
//! [`contrast_ratio`] and the sRGB transfer functions in [`color`].
//!
//! # Color Science
//!
//! Contrast judgments happen in linear light, not in the encoded bytes:
//!
//! | Representation | Key Property | Used For |
//! |----------------|--------------|----------|
//! | **8-bit sRGB** ([`Rgb`]) | Standard encoding (IEC 61966-2-1) | Input/output: callers, images, stylesheets |
//! | **Linear intensity** (`f64`) | Proportional to physical light | Luminance and contrast math |
//!
//! sRGB applies a gamma curve so that brightness steps look uniform to
//! human eyes; it is NOT suitable for arithmetic. [`relative_luminance`]
//! therefore gamma-decodes each channel before combining them with the
//! WCAG weights (0.2126, 0.7152, 0.0722 -- see [`Channel::weight`]), and
//! the contrast ratio `(lighter + 0.05) / (darker + 0.05)` compares two
//! such luminances. The 0.05 terms model viewing flare and bound the
//! ratio to 1..=21.
//!
//! # The Search
//!
//! [`ContrastFinder`] inverts the contrast constraint by rejection
//! sampling rather than a closed-form solve. Per attempt it walks the
//! channels in R, G, B order, excludes the band of luminance
//! contributions that cannot reach the target against the luminance still
//! unaccounted for, draws a contribution from the domain outside that
//! band, and encodes it back to an 8-bit channel. Draws that decode
//! outside the displayable gamut abandon the attempt; a bounded retry
//! loop (default [`DEFAULT_MAX_ATTEMPTS`] attempts) draws fresh
//! candidates and accepts the first one whose measured ratio strictly
//! exceeds the target.
//!
//! Two consequences for callers:
//!
//! - Results are varied by design: repeated calls yield different
//!   qualifying colors. Inject a seeded generator through
//!   [`ContrastFinder::find_with_rng`] for reproducibility.
//! - Exhausting the budget is a normal outcome, reported as `Ok(None)`.
//!   A mid-gray background caps out around ratio 5.3, so e.g. a 7.0
//!   target against it simply has no answer.

pub mod api;
pub mod color;
pub mod contrast;

#[cfg(test)]
mod domain_tests;

pub use api::{find_contrast_color, ContrastError, ContrastFinder, TargetRatioError};
pub use color::{
    channel_to_linear, linear_to_channel, relative_luminance, Channel, ColorError, GamutError,
    Rgb,
};
pub use contrast::{contrast_ratio, luminance_contrast_ratio, SearchOptions, DEFAULT_MAX_ATTEMPTS};
