//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is the distribution that models the number of successes of `n` independent
//! Bernoulli trials with succes probability `p`.
//!
//! For example, if you want to know the probability to get exacly 17 heads in
//! 22 throws of a coin, we can model this as a binomial distribution with
//! parameters `n = 22` and `p = 0.5` and evaluate the pmf at `17`. To get the
//! probability of getting 14 heads or less we can compute the cdf at `14`.

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::DistError,
    euclid,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    domain: DiscreteDomain,
    p: f64,
    n: u64,
}

impl Binomial {
    /// Creates a new [Binomial] distribution.
    ///
    ///  - `p` indicates the probability of success of each Bernoulli trial.
    ///      - `p` must belong in the interval `[0.0, 1.0]`. Otherwise an
    ///        error will be returned.
    ///  - `n` indicates the number of trials.
    pub fn new(p: f64, n: u64) -> Result<Binomial, DistError> {
        if !p.is_finite() {
            return Err(DistError::NonFinite("p"));
        }
        if !(0.0 <= p && p <= 1.0) {
            return Err(DistError::InvalidProbability { name: "p", value: p });
        }

        let domain: DiscreteDomain = DiscreteDomain::Range(0, n.try_into().unwrap_or(i64::MAX));

        return Ok(Binomial { domain, p, n });
    }

    /// Creates a new [Binomial] distribution without checking if `p` is valid.
    ///
    /// In order to generate a valid Binomial, `p` must fullfill:
    ///  - `p` must belong in the interval `[0.0, 1.0]`.
    pub unsafe fn new_unchecked(p: f64, n: u64) -> Binomial {
        let domain: DiscreteDomain = DiscreteDomain::Range(0, n.try_into().unwrap_or(i64::MAX));

        return Binomial { domain, p, n };
    }

    /// Return `p` (probability of success).
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Return `n` (number of trials).
    pub const fn get_n(&self) -> u64 {
        return self.n;
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(k | p, n) = C(n, k) * p^k * (1 - p)^(n - k)    for k = 0, ..., n

        let k: f64 = x.floor();
        if k < 0.0 || (self.n as f64) < k {
            // outside the support, not an invalid input
            return 0.0;
        }
        let k: u64 = k as u64;

        let binomial_coef: f64 = euclid::combinatorics::binomial_coeffitient(self.n, k);
        // powi only when both exponents fit an i32 (it is exact for the
        // usual small cases), powf otherwise: casting an exponent larger
        // than i32::MAX would wrap.
        let (prob_p, prob_q): (f64, f64) = if self.n <= i32::MAX as u64 {
            (
                self.p.powi(k as i32),
                (1.0 - self.p).powi((self.n - k) as i32),
            )
        } else {
            (
                self.p.powf(k as f64),
                (1.0 - self.p).powf((self.n - k) as f64),
            )
        };

        return binomial_coef * prob_p * prob_q;
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &self.domain;
    }

    // use the deafult cdf: the domain is finite, a pmf summation is exact enough

    fn expected_value(&self) -> Option<f64> {
        return Some(self.n as f64 * self.p);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.n as f64 * self.p * (1.0 - self.p));
    }
}
