//! Contrast ratio math and the randomized contrast color search.

mod bounds;
mod options;
mod ratio;
mod search;

pub use options::{SearchOptions, DEFAULT_MAX_ATTEMPTS};
pub use ratio::{contrast_ratio, luminance_contrast_ratio};

pub(crate) use search::search_with_rng;
