//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it for the pmf or pdf of the distributions (see
//! [crate::distribution_trait]): the *support*. Evaluating a mass or density
//! outside of it's domain is not an error, it just returns `0.0`.
//!
//! It has 2 variants:
//!  - [DiscreteDomain]
//!  - [ContinuousDomain]

use core::f64;

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) composed of
/// integers.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscreteDomain {
    /// All the integers in the range [.0, .1] (**both** inclusive).
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(i64, i64),
    /// All the integers from the given value onwards. The value **is** included.
    From(i64),
}

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range `[.0, .1]` (**both** inclusive).
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards. The value **is** included.
    From(f64),
}

impl DiscreteDomain {
    /// Returns true if `x` is an integer inside the domain.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() || x.fract() != 0.0 {
            // fractional values never belong to a discrete domain
            return false;
        }

        let x_int: i64 = x as i64;

        match self {
            DiscreteDomain::Range(min, max) => (*min <= x_int) && (x_int <= *max),
            DiscreteDomain::From(min) => *min <= x_int,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the upper value can be positive infinity.
    /// It is guaranteed that `return.0 <= return.1` and that finite bounds
    /// are themselves included in the domain.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            DiscreteDomain::Range(min, max) => (*min as f64, *max as f64),
            DiscreteDomain::From(min) => (*min as f64, f64::INFINITY),
        }
    }

    /// Returns an iterator trough all the elements in the domain, in
    /// increasing order.
    ///
    /// Warning: for [DiscreteDomain::From] the iterator is infinite. Accumulating
    /// loops over it must keep their own termination condition (see
    /// [crate::configuration::MAX_PMF_SUMMATION_STEPS]).
    #[must_use]
    pub fn iter(&self) -> DiscreteDomainIterator {
        // current_value being a NaN symbolyzes that no values have been given yet
        DiscreteDomainIterator {
            domain: self,
            current_value: f64::NAN,
        }
    }

    /// Returns true if the domain contains a finite number of elements.
    #[must_use]
    pub fn contains_finite_elements(&self) -> bool {
        match self {
            DiscreteDomain::Range(_, _) => true,
            DiscreteDomain::From(_) => false,
        }
    }
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => !x.is_nan(),
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and
    /// negative infinity. It is guaranteed that `return.0 <= return.1`.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
        }
    }
}

pub struct DiscreteDomainIterator<'a> {
    domain: &'a DiscreteDomain,
    current_value: f64,
}

impl Iterator for DiscreteDomainIterator<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        match self.domain {
            DiscreteDomain::Range(min, max) => {
                if self.current_value.is_nan() {
                    self.current_value = *min as f64;
                    return Some(self.current_value);
                }
                self.current_value = self.current_value + 1.0;
                if (*max as f64) < self.current_value {
                    return None;
                }
                return Some(self.current_value);
            }
            DiscreteDomain::From(min) => {
                if self.current_value.is_nan() {
                    self.current_value = *min as f64;
                    return Some(self.current_value);
                }

                self.current_value = self.current_value + 1.0;
                return Some(self.current_value);
            }
        }
    }
}
