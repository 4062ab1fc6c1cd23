//! Search configuration.
//!
//! This module provides the [`SearchOptions`] struct for configuring the
//! randomized contrast color search.

/// Default attempt budget for the contrast color search.
///
/// The per-channel sampling is a rejection scheme with no success guarantee
/// on a single draw, so the search retries; this cap bounds worst-case work
/// per call and is the sole liveness guarantee.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Configuration options for the contrast color search.
///
/// # Defaults
///
/// - Attempt budget: [`DEFAULT_MAX_ATTEMPTS`] (1000). Both infeasible and
///   rejected attempts count against the budget.
///
/// # Example
///
/// ```
/// use contrast_pick::SearchOptions;
///
/// // Use defaults (recommended for most cases)
/// let options = SearchOptions::new();
///
/// // Or customize with the builder pattern
/// let options = SearchOptions::new().max_attempts(50);
/// assert_eq!(options.max_attempts, 50);
/// ```
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of candidate draws before the search returns
    /// not-found.
    ///
    /// A small cap makes the not-found path easy to exercise in tests;
    /// the default is large enough that feasible targets are found with
    /// overwhelming probability.
    ///
    /// Default: [`DEFAULT_MAX_ATTEMPTS`]
    pub max_attempts: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SearchOptions {
    /// Create new search options with default values.
    ///
    /// This is equivalent to `SearchOptions::default()` but more
    /// discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt budget.
    ///
    /// # Arguments
    /// * `max_attempts` - Maximum candidate draws per search
    #[inline]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}
