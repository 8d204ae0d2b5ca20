//! # Geometric distribution
//!
//! The [geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution)
//! is a discrete distribution that counts the number of *failures* before
//! the first success in a sequence of independent Bernoulli trials with
//! success probability `p`. It's support starts at `0` (success at the
//! very first trial = no failures).
//!
//! This is the "number of failures" convention. If you want the trial
//! number of the first success (support starting at `1`), use
//! [ShiftedGeometric](crate::distributions::ShiftedGeometric::ShiftedGeometric).

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::DistError,
};

pub const GEOMETRIC_DOMAIN: DiscreteDomain = DiscreteDomain::From(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Creates a new [Geometric] distribution.
    ///
    ///  - `p` indicates the probability of success.
    ///  - `p` must belong in the interval `(0.0, 1.0]`.
    ///      - `p = 0.0` is rejected: with no chance of success the first
    ///        success never arrives and the pmf does not sum to 1.
    ///
    /// Otherwise an error will be returned.
    pub fn new(p: f64) -> Result<Geometric, DistError> {
        if !p.is_finite() {
            return Err(DistError::NonFinite("p"));
        }
        if !(0.0 < p && p <= 1.0) {
            return Err(DistError::InvalidProbability { name: "p", value: p });
        }

        return Ok(Geometric { p });
    }

    /// Creates a new [Geometric] distribution without checking if `p` is valid.
    ///
    /// In order to generate a valid Geometric, `p` must fullfill:
    ///  - `p` must belong in the interval `(0.0, 1.0]`.
    pub const unsafe fn new_unchecked(p: f64) -> Geometric {
        return Geometric { p };
    }

    /// Return `p` (probability of success).
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }
}

impl DiscreteDistribution for Geometric {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(k | p) = (1 - p)^k * p    for k = 0, 1, 2, ...
        let k: f64 = x.floor();
        if k < 0.0 {
            // outside the support, not an invalid input
            return 0.0;
        }

        let q: f64 = 1.0 - self.p;
        return self.p * q.powf(k);
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &GEOMETRIC_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            std::panic!("Tried to evaluate the cdf of Geometric with a NaN value. \n");
        }
        if x < 0.0 {
            return 0.0;
        }
        // 1 - (1 - p)^(x.floor() + 1)
        // The exponent stays a float: an i32 exponent would not fit every
        // valid x, and for such x the power underflows to 0.0 anyway.
        return 1.0 - (1.0 - self.p).powf(x.floor() + 1.0);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some((1.0 - self.p) / self.p);
    }

    fn variance(&self) -> Option<f64> {
        return Some((1.0 - self.p) / (self.p * self.p));
    }
}
