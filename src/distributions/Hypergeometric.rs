//! # Hypergeometric distribution
//!
//! The [Hypergeometric distribution](https://en.wikipedia.org/wiki/Hypergeometric_distribution)
//! is a discrete distribution that models drawing a sample of size `n`
//! (without replacement) from a population of `N` items of wich `A` are
//! of interest, and counting how many items of interest end up in the sample.
//!
//! Unlike the [Binomial](crate::distributions::Binomial::Binomial), the
//! draws are **not** independent: every extracted item changes the
//! composition of the remaining population.

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::DistError,
    euclid,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Hypergeometric {
    domain: DiscreteDomain,
    /// `N`: total population size
    population: u64,
    /// `A`: number of items of interest in the population
    successes: u64,
    /// `n`: sample size
    draws: u64,
}

impl Hypergeometric {
    /// Creates a new [Hypergeometric] distribution.
    ///
    ///  - `population` (`N`) is the total population size.
    ///  - `successes` (`A`) is the number of items of interest. `A <= N`.
    ///  - `draws` (`n`) is the sample size. `n <= N`.
    ///
    /// Otherwise an error will be returned.
    pub fn new(population: u64, successes: u64, draws: u64) -> Result<Hypergeometric, DistError> {
        if population < successes {
            return Err(DistError::InvalidCombination(format!(
                "the number of successes A = {} exceeds the population N = {}",
                successes, population
            )));
        }
        if population < draws {
            return Err(DistError::InvalidCombination(format!(
                "the sample size n = {} exceeds the population N = {}",
                draws, population
            )));
        }

        // Feasible values of k: the sample cannot contain more successes than
        // A (or n), nor fewer than the ones that do not fit among the failures.
        let min_k: i64 = (draws as i64 + successes as i64 - population as i64).max(0);
        let max_k: i64 = draws.min(successes) as i64;
        let domain: DiscreteDomain = DiscreteDomain::Range(min_k, max_k);

        return Ok(Hypergeometric {
            domain,
            population,
            successes,
            draws,
        });
    }

    /// Creates a new [Hypergeometric] distribution without checking the
    /// parameters.
    ///
    /// In order to generate a valid Hypergeometric, they must fullfill:
    ///  - `successes <= population` (`A <= N`)
    ///  - `draws <= population` (`n <= N`)
    ///
    /// If those conditions are not fullfiled, the returned distribution
    /// will be invalid.
    pub unsafe fn new_unchecked(population: u64, successes: u64, draws: u64) -> Hypergeometric {
        let min_k: i64 = (draws as i64 + successes as i64 - population as i64).max(0);
        let max_k: i64 = draws.min(successes) as i64;
        let domain: DiscreteDomain = DiscreteDomain::Range(min_k, max_k);

        return Hypergeometric {
            domain,
            population,
            successes,
            draws,
        };
    }

    /// Return `N` (total population size).
    pub const fn get_population(&self) -> u64 {
        return self.population;
    }

    /// Return `A` (number of items of interest).
    pub const fn get_successes(&self) -> u64 {
        return self.successes;
    }

    /// Return `n` (sample size).
    pub const fn get_draws(&self) -> u64 {
        return self.draws;
    }
}

impl DiscreteDistribution for Hypergeometric {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(k | N, A, n) = C(A, k) * C(N - A, n - k) / C(N, n)

        let k: f64 = x.floor();
        if k < 0.0 {
            return 0.0;
        }
        let k: u64 = k as u64;

        // infeasible draws have probability 0, they are not an error
        let infeasible: bool = self.draws < k
            || (self.population - self.successes) < (self.draws - k)
            || self.successes < k;
        if infeasible {
            return 0.0;
        }

        let ways_successes: f64 = euclid::combinatorics::binomial_coeffitient(self.successes, k);
        let ways_failures: f64 = euclid::combinatorics::binomial_coeffitient(
            self.population - self.successes,
            self.draws - k,
        );
        let ways_total: f64 =
            euclid::combinatorics::binomial_coeffitient(self.population, self.draws);

        return ways_successes * ways_failures / ways_total;
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &self.domain;
    }

    // use the deafult cdf: the domain is finite, a pmf summation is exact enough

    fn expected_value(&self) -> Option<f64> {
        // E = n * A / N
        if self.population == 0 {
            // empty population: the only possible sample is the empty one
            return Some(0.0);
        }
        return Some(self.draws as f64 * self.successes as f64 / self.population as f64);
    }

    /// The variance of the Hypergeometric:
    ///
    /// `Var = n * (A/N) * ((N-A)/N) * ((N-n)/(N-1))`
    ///
    /// For `N <= 1` the correction factor divides by zero and the formula is
    /// genuinely undefined, so [None] is returned instead of a NaN.
    fn variance(&self) -> Option<f64> {
        if self.population <= 1 {
            return None;
        }

        let n: f64 = self.draws as f64;
        let big_n: f64 = self.population as f64;
        let big_a: f64 = self.successes as f64;

        let success_rate: f64 = big_a / big_n;
        let failure_rate: f64 = (big_n - big_a) / big_n;
        let finite_population_correction: f64 = (big_n - n) / (big_n - 1.0);

        return Some(n * success_rate * failure_rate * finite_population_correction);
    }
}
