//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poisson event.
//!
//! A poisson event does not have memory. Mathematically, if `e` follows
//! an Exponential distribution and `t_1 < t_2`
//! `P(t_1 < e) = P(t_1 < e | t_2 < e)`
//!
//! The Exponential distribution has a parameter: the rate `lambda` wich
//! determines how fast do events happen. The avarage number of events per
//! unit of time is then a [Poisson](crate::distributions::Poisson::Poisson)
//! with rate `1/lambda`: see [Exponential::to_poisson].

use crate::{
    distribution_trait::Distribution,
    distributions::Poisson::Poisson,
    domain::ContinuousDomain,
    errors::DistError,
};

pub const EXPONENTIAL_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Creates a new [Exponential] distribution. It is requiered that
    /// `0.0 < lambda` (and finite) or an error will be returned.
    pub fn new(lambda: f64) -> Result<Exponential, DistError> {
        if !lambda.is_finite() {
            return Err(DistError::NonFinite("lambda"));
        }
        if lambda <= 0.0 {
            return Err(DistError::NonPositive {
                name: "lambda",
                value: lambda,
            });
        }

        return Ok(Exponential { lambda });
    }

    /// Creates a new [Exponential] distribution without checking that
    /// `lambda` is finite and stricly positive. If it is not, the returned
    /// distribution will be invalid.
    pub const unsafe fn new_unchecked(lambda: f64) -> Exponential {
        return Exponential { lambda };
    }

    /// Returns the value of `lambda`.
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// Returns the [Poisson] distribution of the number of events per unit of
    /// time for this inter-arrival time: the rate duality, and the inverse of
    /// [Poisson::to_exponential](crate::distributions::Poisson::Poisson::to_exponential).
    pub fn to_poisson(&self) -> Poisson {
        // 1/lambda is finite and stricly positive because lambda is
        return unsafe { Poisson::new_unchecked(1.0 / self.lambda) };
    }
}

impl Distribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x | lambda) = lambda * exp(-lambda * x)    for 0.0 <= x
        if x < 0.0 {
            return 0.0;
        }
        return self.lambda * (-self.lambda * x).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &EXPONENTIAL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            std::panic!("Tried to evaluate the cdf of Exponential with a NaN value. \n");
        }
        if x < 0.0 {
            return 0.0;
        }
        return 1.0 - (-self.lambda * x).exp();
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(1.0 / self.lambda);
    }

    fn variance(&self) -> Option<f64> {
        return Some(1.0 / (self.lambda * self.lambda));
    }
}
