//! # Poisson distribution
//!
//! The [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
//! is a discrete distribution that counts the number of poisson events in a
//! given time with a given rate.
//!
//! The poisson distribution has a single parameter: the rate `lambda`
//! (often written `mu`). Lambda represents the avarage number of events that
//! happen in a given amount of time.
//!
//! Requirements for the model to hold:
//!  - The rate of wich events occur must be constant
//!  - Events must be independent
//!
//! The time *between* consecutive poisson events follows an
//! [Exponential](crate::distributions::Exponential::Exponential)
//! distribution: [Poisson::to_exponential] converts between the 2 trough
//! the reciprocal of the rate.

use crate::{
    configuration,
    distribution_trait::DiscreteDistribution,
    distributions::Exponential::Exponential,
    domain::DiscreteDomain,
    errors::DistError,
    euclid::ln_gamma,
};

pub const POISSON_DOMAIN: DiscreteDomain = DiscreteDomain::From(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new [Poisson] distribution.
    ///
    ///  - `lambda` indicates the rate. And must fullfill:
    ///      - Must be finite (no `+-inf` nor NaNs)
    ///      - `0.0 < lambda`
    ///
    /// Otherwise an error will be returned.
    pub fn new(lambda: f64) -> Result<Poisson, DistError> {
        if !lambda.is_finite() {
            return Err(DistError::NonFinite("lambda"));
        }
        if lambda <= 0.0 {
            return Err(DistError::NonPositive {
                name: "lambda",
                value: lambda,
            });
        }

        return Ok(Poisson { lambda });
    }

    /// Creates a new [Poisson] distribution without checking.
    ///
    ///  - `lambda` indicates the rate. And must fullfill:
    ///      - Must be finite (no `+-inf` nor NaNs)
    ///      - `0.0 < lambda`
    ///
    /// If those conditions are not fullfiled, the returned distribution
    /// will be invalid.
    pub const unsafe fn new_unchecked(lambda: f64) -> Poisson {
        return Poisson { lambda };
    }

    /// Returns the value of `lambda`.
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// Returns the [Exponential] distribution of the time between consecutive
    /// events of this poisson process: the rate duality.
    ///
    /// An avarage of `lambda` events per unit of time means an avarage of
    /// `1/lambda` units of time between events. The conversion is a pure
    /// transformation, `self` is untouched.
    pub fn to_exponential(&self) -> Exponential {
        // 1/lambda is finite and stricly positive because lambda is
        return unsafe { Exponential::new_unchecked(1.0 / self.lambda) };
    }
}

impl DiscreteDistribution for Poisson {
    fn pmf(&self, x: f64) -> f64 {
        /* Usual definition:
         > P(k | lambda) = exp(-lambda) * lambda^k / k!

        But for better precision, we use the following alternative equivalent:

         > P(k | lambda) = exp( k * ln(lambda) - lambda - ln(Gamma(k + 1)) )

        */

        let k: f64 = x.floor();
        if k < 0.0 {
            return 0.0;
        }

        let ln_gamma: f64 = ln_gamma(k + 1.0);
        let inner_exp: f64 = k * self.lambda.ln() - self.lambda - ln_gamma;

        return inner_exp.exp();
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &POISSON_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        /*
            Instead of recomputing `ln_gamma` for each term of the summation
            (wich can be expensive), we use the previous value to compute
            the next one: ln(Gamma(k + 2)) = ln(Gamma(k + 1)) + ln(k + 1)

            The summation shares the step cap of the deafult trait cdf: the
            tail mass beyond [configuration::MAX_PMF_SUMMATION_STEPS] terms
            is negligible and a very large (but valid) `x` must not turn the
            loop into a hang.
        */

        if x.is_nan() {
            std::panic!("Tried to evaluate the cdf of Poisson with a NaN value. \n");
        }

        if x < 0.0 {
            return 0.0;
        }

        let last_term: f64 = x
            .floor()
            .min(configuration::MAX_PMF_SUMMATION_STEPS as f64);
        let ln_lambda: f64 = self.lambda.ln();

        let mut ln_gamma: f64 = 0.0;
        let mut k: f64 = 0.0;
        let mut accumulator: f64 = 0.0;
        while k <= last_term {
            let inner_exp: f64 = k * ln_lambda - self.lambda - ln_gamma;
            accumulator += inner_exp.exp();

            k += 1.0;
            ln_gamma += k.ln();
        }

        return accumulator.min(1.0);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.lambda);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.lambda);
    }
}
