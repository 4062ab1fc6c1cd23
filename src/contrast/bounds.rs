//! Feasible-luminance bounds for a target contrast ratio.
//!
//! For a running luminance `L` and target ratio `m`, the luminances whose
//! contrast against `L` would fall short of `m` form a middle band of
//! 0.0..=1.0. The search samples from the domain *outside* that band.

/// The luminance band `[lower, upper]` whose contrast ratio against
/// `luminance` falls short of `ratio`.
///
/// `lower = max(0, L/m + 0.05*(1/m - 1))` and
/// `upper = min(1, m*L + 0.05*(m - 1))`.
///
/// The clamps are one-sided. Mid-search the running luminance can leave
/// 0.0..=1.0 (earlier channels overspend the budget), which may push the
/// clamped upper bound below the lower bound; [`sampling_span`] and the
/// gamut check downstream absorb that case.
pub(crate) fn luminance_bounds(ratio: f64, luminance: f64) -> (f64, f64) {
    let lower = luminance / ratio + 0.05 * (1.0 / ratio - 1.0);
    let upper = ratio * luminance + 0.05 * (ratio - 1.0);
    (lower.max(0.0), upper.min(1.0))
}

/// Length of the sampling domain outside the excluded band:
/// `lower + 1 - upper`.
///
/// Exceeds 1 when the clamped bounds have crossed; draws from the overshoot
/// decode to out-of-gamut linear values and abandon the attempt.
pub(crate) fn sampling_span(lower: f64, upper: f64) -> f64 {
    lower + 1.0 - upper
}
