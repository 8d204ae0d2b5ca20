//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremly well studied.
//! It has a key role in the [Central Limit Theorem](https://en.wikipedia.org/wiki/Central_limit_theorem)
//! (CLT), wich says that the sum of `n` random variables of **any**
//! distribution will give a new random variable that is normally distributed
//! as `n` grows to infinity.
//!
//! We implement the [Normal] distribution and the [StdNormal], wich is the
//! same as [Normal] but for fixed `mean = 0.0` and `std_dev = 1.0`. The
//! general [Normal] delegates it's cdf to [StdNormal] trough the z-score.
//!
//! The cdf is **not** computed integrating the pdf numerically (a Riemann
//! sum loses several digits in the tails): see [StdNormal::cdf].

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::DistError,
    euclid,
};

// Coefitients for the aproximate computation of the complementary cdf of the
// std normal. See [StdNormal::cdf] for the source.
const B_ZERO_COEFITIENT: f64 = 2.92678600515804815402;
const B_ONE_COEFITIENTS: [f64; 5] = [
    8.97280659046817350354,
    10.27157061171363078863,
    12.72323261907760928036,
    16.88639562007936907786,
    24.12333774572479110372,
];

const B_TWO_COEFITIENTS: [f64; 5] = [
    5.81582518933527390512,
    5.70347935898051436684,
    5.51862483025707963145,
    5.26184239579604207321,
    4.92081346632882032881,
];

const C_ONE_COEFITIENTS: [f64; 5] = [
    11.61511226260603247078,
    18.25323235347346524796,
    18.38871225773938486923,
    18.61193318971775795045,
    24.14804072812762821134,
];

const C_TWO_COEFITIENTS: [f64; 5] = [
    3.83362947800146179416,
    7.30756258553673541139,
    8.42742300458043240405,
    5.66479518878470764762,
    4.91396098895240075156,
];

/// A standard normal distribution: `mean = 0.0` and `std_dev = 1.0`.
///
/// Holds no information: [STD_NORMAL] can be used directly.
#[derive(Debug, Clone, PartialEq)]
pub struct StdNormal {
    domain: ContinuousDomain,
}

pub const STD_NORMAL: StdNormal = StdNormal {
    domain: ContinuousDomain::Reals,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    std_normal: StdNormal,
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl StdNormal {
    /// Create a Standard normal distribution. Has a mean of `0.0` and a
    /// standard deviation of `1.0`.
    pub const fn new() -> StdNormal {
        return StdNormal {
            domain: ContinuousDomain::Reals,
        };
    }
}

impl Default for StdNormal {
    fn default() -> Self {
        return StdNormal::new();
    }
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, an error will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, DistError> {
        if !mean.is_finite() {
            return Err(DistError::NonFinite("mean"));
        }
        if !standard_deviation.is_finite() {
            return Err(DistError::NonFinite("standard_deviation"));
        }
        if standard_deviation <= 0.0 {
            return Err(DistError::NonPositive {
                name: "standard_deviation",
                value: standard_deviation,
            });
        }

        return Ok(Normal {
            std_normal: StdNormal::new(),
            mean,
            standard_deviation,
        });
    }

    /// Create a [Normal] distribution without checking for the corrrectness
    /// of the inputs.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite and stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, the returned distribution
    /// will be invalid.
    pub const unsafe fn new_unchecked(mean: f64, standard_deviation: f64) -> Normal {
        return Normal {
            std_normal: StdNormal::new(),
            mean,
            standard_deviation,
        };
    }

    /// Create the standard [Normal] distribution: `mean = 0.0`,
    /// `standard_deviation = 1.0`.
    ///
    /// If you do not need the general interface, [StdNormal] (or the
    /// [STD_NORMAL] constant) skips the z-score translation.
    pub const fn standard() -> Normal {
        return Normal {
            std_normal: StdNormal::new(),
            mean: 0.0,
            standard_deviation: 1.0,
        };
    }

    /// Returns the mean, the first parameter of the normal distribution.
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal
    /// distribution.
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    /// The [z-score](https://en.wikipedia.org/wiki/Standard_score) of `x`:
    /// how many standard deviations `x` lies away from the mean.
    ///
    /// `z(x) = (x - mean) / std_dev`
    pub fn z_score(&self, x: f64) -> f64 {
        return (x - self.mean) / self.standard_deviation;
    }
}

impl Distribution for StdNormal {
    fn pdf(&self, x: f64) -> f64 {
        return euclid::INV_SQRT_2_PI * (-x * x * 0.5).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        /*
        We use the aproximation by:
        Dia, Yaya D. (2023). "Approximate Incomplete Integrals, Application
        to Complementary Error Function". SSRN. doi:10.2139/ssrn.4487559.

        The precision of this method is extremly high: an error of less than
        `~1.1 * 10^-16 ~= 2^-53`. Considering that
        `f64::EPSILON = 2.220446049250313e-16`, this solution may as well be
        considered exact if we are working with `f64`.

        The aproximation gives `1 - cdf(x)` for `0 <= x`; negative inputs are
        handled with the reflection `cdf(-x) = 1 - cdf(x)`.

        To evaluate the second degree factors we use Horner's rule trough
        `f64::mul_add`: `x.mul_add(a, b) = x * a + b`.
        */

        if x.is_nan() {
            std::panic!("Tried to evaluate the cdf function of StdNormal with a NaN value. \n");
        }

        if x == 0.0 {
            // symmetry point, exact by definition
            return 0.5;
        }

        let (point, flipped): (f64, bool) = if x < 0.0 { (-x, true) } else { (x, false) };

        let term_1_num: f64 = (point + C_TWO_COEFITIENTS[0]).mul_add(point, C_ONE_COEFITIENTS[0]);
        let term_1_den: f64 = (point + B_TWO_COEFITIENTS[0]).mul_add(point, B_ONE_COEFITIENTS[0]);

        let term_2_num: f64 = (point + C_TWO_COEFITIENTS[1]).mul_add(point, C_ONE_COEFITIENTS[1]);
        let term_2_den: f64 = (point + B_TWO_COEFITIENTS[1]).mul_add(point, B_ONE_COEFITIENTS[1]);

        let term_3_num: f64 = (point + C_TWO_COEFITIENTS[2]).mul_add(point, C_ONE_COEFITIENTS[2]);
        let term_3_den: f64 = (point + B_TWO_COEFITIENTS[2]).mul_add(point, B_ONE_COEFITIENTS[2]);

        let term_4_num: f64 = (point + C_TWO_COEFITIENTS[3]).mul_add(point, C_ONE_COEFITIENTS[3]);
        let term_4_den: f64 = (point + B_TWO_COEFITIENTS[3]).mul_add(point, B_ONE_COEFITIENTS[3]);

        let term_5_num: f64 = (point + C_TWO_COEFITIENTS[4]).mul_add(point, C_ONE_COEFITIENTS[4]);
        let term_5_den: f64 = (point + B_TWO_COEFITIENTS[4]).mul_add(point, B_ONE_COEFITIENTS[4]);

        let numerator: f64 = term_1_num * term_2_num * term_3_num * term_4_num * term_5_num;
        let denomiantor: f64 = term_1_den * term_2_den * term_3_den * term_4_den * term_5_den;

        let m: f64 = numerator / (denomiantor * (point + B_ZERO_COEFITIENT));
        // `aproximation` = `1 - cdf(point)`
        let aproximation: f64 = m * self.pdf(point);

        return if flipped {
            aproximation
        } else {
            1.0 - aproximation
        };
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn variance(&self) -> Option<f64> {
        return Some(1.0);
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x | mean, sigma) = 1/sqrt(2*pi*sigma^2) * exp(-(x - mean)^2 / (2*sigma^2))
        let z: f64 = self.z_score(x);
        return euclid::INV_SQRT_2_PI / self.standard_deviation * (-z * z * 0.5).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return self.std_normal.get_domain();
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            std::panic!("Tried to evaluate the cdf function of Normal with a NaN value. \n");
        }
        return self.std_normal.cdf(self.z_score(x));
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.mean);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.standard_deviation * self.standard_deviation);
    }
}
