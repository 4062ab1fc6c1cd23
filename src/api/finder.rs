//! ContrastFinder -- the primary ergonomic entry point for the crate.
//!
//! [`ContrastFinder`] wraps the randomized search with fluent configuration
//! and input validation.

use rand::Rng;

use crate::api::error::{ContrastError, TargetRatioError};
use crate::color::Rgb;
use crate::contrast::{search_with_rng, SearchOptions};

/// Reusable entry point for contrast color searches.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - [`find()`](Self::find) takes `&self` so the finder is **reusable**
///   across queries
/// - Entropy defaults to the thread-local generator;
///   [`find_with_rng()`](Self::find_with_rng) accepts any [`rand::Rng`]
///   for seeded, reproducible searches
///
/// # Example
///
/// ```
/// use contrast_pick::{contrast_ratio, ContrastFinder, Rgb};
///
/// let finder = ContrastFinder::new().max_attempts(500);
/// let background = Rgb::new(128, 128, 128);
///
/// if let Some(color) = finder.find(background, 3.0).unwrap() {
///     assert!(contrast_ratio(color, background) > 3.0);
/// }
/// ```
pub struct ContrastFinder {
    options: SearchOptions,
}

impl ContrastFinder {
    /// Create a new finder with default options.
    pub fn new() -> Self {
        Self {
            options: SearchOptions::new(),
        }
    }

    /// Set the attempt budget (default
    /// [`DEFAULT_MAX_ATTEMPTS`](crate::DEFAULT_MAX_ATTEMPTS)).
    #[inline]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.options = self.options.max_attempts(max_attempts);
        self
    }

    /// Search for a color whose contrast ratio against `background`
    /// strictly exceeds `target`, using the thread-local random generator.
    ///
    /// Returns `Ok(Some(color))` on success and `Ok(None)` when the
    /// attempt budget runs out without a qualifying color -- an expected
    /// outcome for targets near the achievable maximum, not an error.
    /// Fails only on an invalid `target`, before any sampling happens.
    pub fn find(&self, background: Rgb, target: f64) -> Result<Option<Rgb>, ContrastError> {
        self.find_with_rng(&mut rand::thread_rng(), background, target)
    }

    /// Search drawing entropy from a caller-supplied generator.
    ///
    /// Substituting a seeded generator (e.g. `StdRng::seed_from_u64`)
    /// makes the search fully reproducible.
    pub fn find_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        background: Rgb,
        target: f64,
    ) -> Result<Option<Rgb>, ContrastError> {
        TargetRatioError::check(target)?;
        Ok(search_with_rng(rng, background, target, &self.options))
    }
}

impl Default for ContrastFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Search for a contrast color with default options.
///
/// Convenience wrapper over [`ContrastFinder`]; see its documentation for
/// the full contract.
///
/// # Example
///
/// ```
/// use contrast_pick::{find_contrast_color, Rgb};
///
/// let found = find_contrast_color(Rgb::new(128, 128, 128), 3.0).unwrap();
/// assert!(found.is_some());
/// ```
pub fn find_contrast_color(
    background: Rgb,
    target: f64,
) -> Result<Option<Rgb>, ContrastError> {
    ContrastFinder::new().find(background, target)
}
