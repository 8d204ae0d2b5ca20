//! This file contains the deafult values and other value choices used trough
//! the library.

/// The deafult number of bars when plotting a discrete distribution
/// (`k = 0, 1, ..., 24` for a domain starting at 0).
pub static DEFAULT_BAR_POINTS: usize = 25;

/// The deafult number of unit-intervals sampled when plotting a
/// continuous distribution.
pub static DEFAULT_LINE_POINTS: usize = 25;

/// The deafult number of pdf evaluations per unit when plotting a
/// continuous distribution. With a `sample_rate` of 5, the pdf is
/// evaluated every `0.2` units.
pub static DEFAULT_SAMPLE_RATE: usize = 5;

/// The maximum number of samples a single plot series can contain.
///
/// The `points` and `sample_rate` ultimately come from user input trough
/// the driver: an absurdly large request gets its series truncated at this
/// many values instead of overflowing or exhausting memory.
pub static MAX_PLOT_SAMPLES: usize = 1 << 20;

/// When a discrete distribution with an unbounded support uses the deafult
/// [cdf](crate::distribution_trait::DiscreteDistribution::cdf)
/// (a plain pmf summation), this cap keeps the loop total.
///
/// The tail mass beyond this many terms is negligible for every rate or
/// probability a caller can construct without the cdf argument being
/// astronomically large anyway.
pub static MAX_PMF_SUMMATION_STEPS: usize = 1 << 16;
