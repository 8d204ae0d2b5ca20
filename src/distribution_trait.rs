//! This script contains the interfaces used to comunicate with the distributions.
//!
//! There are 2 traits, mirroring the 2 families in the library:
//!  - [DiscreteDistribution]: polymorphic over `pmf` (+ domain).
//!  - [Distribution]: polymorphic over `pdf` and `cdf` (+ domain).
//!
//! Every method is a pure function of the inputs: the distributions are
//! immutable after construction and hold no state between queries.

use crate::configuration;
use crate::domain::{ContinuousDomain, DiscreteDomain};

/// The trait for any discrete distribution.
///
/// None of the provided methods are guaranteed to work if the implemented
/// [DiscreteDistribution::pmf] is NOT a valid
/// [pmf](https://en.wikipedia.org/wiki/Probability_mass_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The sum over the whole domain must be `1.0`
pub trait DiscreteDistribution {
    // Requiered methods:

    /// Evaluates the [PMF](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// (Probability Mass function) of the distribution at point `x`.
    ///
    /// `x` is taken as a float for interface uniformity. Implementations
    /// floor it first, so `pmf(2.5)` evaluates the mass at `2`. Points
    /// outside the support are **not** an error: the pmf is simply `0.0`
    /// there.
    fn pmf(&self, x: f64) -> f64;

    /// Returns a reference to the pmf [DiscreteDomain], wich indicates the
    /// support of the distribution. The returned domain should be constant
    /// and not change.
    fn get_domain(&self) -> &DiscreteDomain;

    // Provided methods:
    // Manual implementation for a specific distribution is recommended
    // when a closed form exists.

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function): the probability that the variable
    /// is less or equal to `x`.
    ///
    /// If the function is evaluated outside the domain of the pmf, it will
    /// return either `0.0` or `1.0`. **Panicks** if `x` is a NaN.
    ///
    /// The deafult implemetation sums the pmf over the domain up to `x`,
    /// capped at [configuration::MAX_PMF_SUMMATION_STEPS] terms for domains
    /// with infinitely many elements.
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            std::panic!("Tried to evaluate the cdf function with a NaN value. \n");
        }

        let domain: &DiscreteDomain = self.get_domain();
        let bounds: (f64, f64) = domain.get_bounds();

        if x < bounds.0 {
            return 0.0;
        }
        if bounds.1 <= x {
            return 1.0;
        }

        let mut accumulator: f64 = 0.0;
        for (steps, point) in domain.iter().enumerate() {
            if x < point || configuration::MAX_PMF_SUMMATION_STEPS <= steps {
                break;
            }
            accumulator += self.pmf(point);
        }

        // floating point summation can slightly overshoot 1.0
        return accumulator.min(1.0);
    }

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value) of
    /// the distribution, if it exists.
    fn expected_value(&self) -> Option<f64>;

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the
    /// distribution, if it exists.
    ///
    /// Distributions return [None] where the formula is genuinely undefined
    /// (for example a [Hypergeometric](crate::distributions::Hypergeometric::Hypergeometric)
    /// with a population of 1) rather than silently propagating a NaN or
    /// infinity.
    fn variance(&self) -> Option<f64>;

    /// The standard deviation: the square root of [DiscreteDistribution::variance].
    fn standard_deviation(&self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }
}

/// The trait for any continuous distribution.
///
/// None of the provided methods are guaranteed to work if the implemented
/// [Distribution::pdf] is NOT a valid
/// [pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total area of 1 under the curve.
pub trait Distribution {
    // Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    /// Points outside the support return `0.0` (a density of zero, not an
    /// error).
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at
    /// wich points the pdf is non-zero. The returned domain should be
    /// constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function): the probability that the variable
    /// is less or equal to `x`.
    ///
    /// Every distribution in this library has a closed form or a precise
    /// aproximation for it's cdf, so there is no deafult numerical
    /// integration: a naive Riemann sum of the pdf would accumulate a large
    /// error in the tails. **Panicks** if `x` is a NaN.
    fn cdf(&self, x: f64) -> f64;

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value) of
    /// the distribution, if it exists.
    fn expected_value(&self) -> Option<f64>;

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the
    /// distribution, if it exists.
    fn variance(&self) -> Option<f64>;

    /// The standard deviation: the square root of [Distribution::variance].
    fn standard_deviation(&self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }
}
