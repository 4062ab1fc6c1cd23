//! Randomized search for a color exceeding a target contrast ratio.
//!
//! The search treats the contrast constraint channel by channel. For the
//! luminance still unaccounted for, the band of luminances that would
//! violate the target is excluded, a contribution is drawn from the domain
//! outside the band (scaled by the channel's weight), and the contribution
//! is encoded back to an 8-bit channel value. Draws that decode outside the
//! displayable gamut abandon the attempt; a bounded retry loop draws again.
//!
//! This is rejection sampling, not a closed-form solver: it trades
//! determinism for varied, non-extremal qualifying colors instead of
//! collapsing every answer to black or white. The draw is not uniform over
//! the feasible region (the band shift below only applies to draws past the
//! lower bound); callers depend on the final acceptance check, not on the
//! distribution's shape.

use rand::Rng;

use crate::color::{linear_to_channel, relative_luminance, Channel, Rgb};
use crate::contrast::bounds::{luminance_bounds, sampling_span};
use crate::contrast::options::SearchOptions;
use crate::contrast::ratio::luminance_contrast_ratio;

/// Outcome of drawing one channel's luminance contribution.
enum ChannelOutcome {
    /// The draw encodes to a displayable channel value.
    Sampled {
        /// Encoded 8-bit channel value.
        value: u8,
        /// Luminance contribution spent by this channel.
        contribution: f64,
    },
    /// The draw decodes outside the displayable gamut; the attempt is
    /// abandoned and the retry loop draws a fresh candidate.
    Infeasible,
}

/// Draw one channel's luminance contribution against the running luminance.
fn sample_channel<R: Rng>(
    rng: &mut R,
    channel: Channel,
    target: f64,
    luminance: f64,
) -> ChannelOutcome {
    let weight = channel.weight();
    let (lower, upper) = luminance_bounds(target, luminance);
    let span = sampling_span(lower, upper);

    let sample = rng.gen::<f64>() * span * weight;
    // Draws past the lower bound are shifted over the excluded band.
    let contribution = if sample > lower {
        sample + (upper - lower) * weight
    } else {
        sample
    };

    // Dividing out the weight gives the channel's implied linear intensity.
    match linear_to_channel(contribution / weight) {
        Ok(value) => ChannelOutcome::Sampled {
            value,
            contribution,
        },
        Err(_) => ChannelOutcome::Infeasible,
    }
}

/// One full candidate draw: all three channels in R, G, B order.
///
/// The running luminance starts at the background's and is decremented by
/// each channel's spent contribution, so later channels sample against the
/// luminance still unaccounted for.
fn sample_candidate<R: Rng>(
    rng: &mut R,
    background_luminance: f64,
    target: f64,
) -> Option<Rgb> {
    let mut remaining = background_luminance;
    let mut values = [0u8; 3];

    for (slot, channel) in values.iter_mut().zip(Channel::ALL) {
        match sample_channel(rng, channel, target, remaining) {
            ChannelOutcome::Sampled {
                value,
                contribution,
            } => {
                *slot = value;
                remaining -= contribution;
            }
            ChannelOutcome::Infeasible => return None,
        }
    }

    Some(Rgb::new(values[0], values[1], values[2]))
}

/// Search for a color whose contrast ratio against `background` strictly
/// exceeds `target`, drawing entropy from `rng`.
///
/// Runs up to `options.max_attempts` candidate draws and returns the first
/// accepted candidate. `None` means the budget ran out without a qualifying
/// color -- a normal outcome for near-maximal targets, not an error.
///
/// Callers validate `target` before reaching this function.
pub(crate) fn search_with_rng<R: Rng>(
    rng: &mut R,
    background: Rgb,
    target: f64,
    options: &SearchOptions,
) -> Option<Rgb> {
    let background_luminance = relative_luminance(background);

    for attempt in 1..=options.max_attempts {
        let Some(candidate) = sample_candidate(rng, background_luminance, target) else {
            continue;
        };
        let ratio =
            luminance_contrast_ratio(relative_luminance(candidate), background_luminance);
        if ratio > target {
            tracing::trace!(attempt, ratio, "accepted contrast candidate");
            return Some(candidate);
        }
    }

    tracing::debug!(
        max_attempts = options.max_attempts,
        target_ratio = target,
        "no qualifying contrast color within attempt budget"
    );
    None
}
