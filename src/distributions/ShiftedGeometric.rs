//! # Shifted geometric distribution
//!
//! The shifted [geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution)
//! (also known as the *first failure geometric*, FFG) is a discrete
//! distribution over the trial number of the first success in a sequence of
//! independent Bernoulli trials with success probability `p`. It's support
//! starts at `1`: the success can happen at the first trial at the earliest.
//!
//! It is the same process as [Geometric](crate::distributions::Geometric::Geometric)
//! shifted by one: `ShiftedGeometric = Geometric + 1`.

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::DistError,
};

pub const SHIFTED_GEOMETRIC_DOMAIN: DiscreteDomain = DiscreteDomain::From(1);

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftedGeometric {
    p: f64,
}

impl ShiftedGeometric {
    /// Creates a new [ShiftedGeometric] distribution.
    ///
    ///  - `p` indicates the probability of success.
    ///  - `p` must belong in the interval `(0.0, 1.0]`.
    ///
    /// Otherwise an error will be returned.
    pub fn new(p: f64) -> Result<ShiftedGeometric, DistError> {
        if !p.is_finite() {
            return Err(DistError::NonFinite("p"));
        }
        if !(0.0 < p && p <= 1.0) {
            return Err(DistError::InvalidProbability { name: "p", value: p });
        }

        return Ok(ShiftedGeometric { p });
    }

    /// Creates a new [ShiftedGeometric] distribution without checking if `p`
    /// is valid.
    ///
    /// In order to generate a valid ShiftedGeometric, `p` must fullfill:
    ///  - `p` must belong in the interval `(0.0, 1.0]`.
    pub const unsafe fn new_unchecked(p: f64) -> ShiftedGeometric {
        return ShiftedGeometric { p };
    }

    /// Return `p` (probability of success).
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }
}

impl DiscreteDistribution for ShiftedGeometric {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(k | p) = (1 - p)^(k - 1) * p    for k = 1, 2, 3, ...
        let k: f64 = x.floor();
        if k < 1.0 {
            return 0.0;
        }

        let q: f64 = 1.0 - self.p;
        return self.p * q.powf(k - 1.0);
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &SHIFTED_GEOMETRIC_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            std::panic!("Tried to evaluate the cdf of ShiftedGeometric with a NaN value. \n");
        }
        if x < 1.0 {
            return 0.0;
        }
        // 1 - (1 - p)^x.floor()
        // Float exponent: an i32 does not fit every valid x.
        return 1.0 - (1.0 - self.p).powf(x.floor());
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(1.0 / self.p);
    }

    fn variance(&self) -> Option<f64> {
        return Some((1.0 - self.p) / (self.p * self.p));
    }
}
