//! Euclid contains the uscefull math functions shared among the distributions.
//!
//! Everything here is numerically careful on purpose: naive factorials
//! overflow an `u64` at `21!` and lose precision way before that, so the
//! combinatorics are done either with exact integer products or in log-space
//! trough [ln_gamma].

use std::f64::consts::PI;

/// `1/sqrt(2*pi)`. The normalitzation constant of the standard normal pdf.
pub const INV_SQRT_2_PI: f64 = 0.39894228040143267793994605993438;

/// Natural logarithm of the [gamma function](https://en.wikipedia.org/wiki/Gamma_function)
/// using the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// with `g = 7`.
///
/// For integer inputs, `ln_gamma(n + 1) = ln(n!)`, wich is what the
/// distributions use to avoid computing factorials directly.
pub fn ln_gamma(x: f64) -> f64 {
    const LANCZOS_COEFITIENTS: [f64; 8] = [
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];

    if x < 0.5 {
        // Reflection formula: Gamma(x) = pi / (sin(pi*x) * Gamma(1-x))
        let log_pi_over_sin: f64 = (PI / (PI * x).sin()).ln();
        return log_pi_over_sin - ln_gamma(1.0 - x);
    }

    let x: f64 = x - 1.0;
    let mut ag: f64 = 0.99999999999980993_f64;
    for (i, &c) in LANCZOS_COEFITIENTS.iter().enumerate() {
        ag += c / (x + i as f64 + 1.0);
    }

    let t: f64 = x + 7.5; // g + 0.5
    return 0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + ag.ln();
}

pub mod combinatorics {

    use super::ln_gamma;

    /// Computes the [binomial coeffitient](https://en.wikipedia.org/wiki/Binomial_coefficient)
    /// `C(n, k) = n! / (k! * (n-k)!)`.
    ///
    /// For small inputs the result is computed with an exact integer product
    /// (so small values are bit-for-bit correct once converted to `f64`).
    /// If the intermediate products would overflow an `u128`, the computation
    /// falls back to log-space with [ln_gamma] wich stays finite and precise
    /// for every input a pmf will realistically see.
    ///
    /// `k` is assumed to be in `[0, n]`. The pmfs guard their support before
    /// calling, so out of range values are a caller bug; for safety we still
    /// return `0.0` instead of an undefined value.
    pub fn binomial_coeffitient(n: u64, k: u64) -> f64 {
        if n < k {
            return 0.0;
        }

        // C(n, k) = C(n, n - k). Use the smaller one for fewer iterations.
        let k: u64 = k.min(n - k);

        if k == 0 {
            return 1.0;
        }

        // Exact path: res * (n - k + i) / i is always an integer at each
        // step because it equals C(n - k + i, i).
        let mut result: u128 = 1;
        for i in 1..=k {
            let numerator: Option<u128> = result.checked_mul((n - k + i) as u128);
            match numerator {
                Some(v) => result = v / (i as u128),
                None => {
                    // overflow: finish in log-space
                    return binomial_coeffitient_ln(n, k).exp();
                }
            }
        }

        return result as f64;
    }

    /// The natural logarithm of [binomial_coeffitient]:
    /// `ln_gamma(n+1) - ln_gamma(k+1) - ln_gamma(n-k+1)`
    ///
    /// For `n < k` the coeffitient is 0, so its logarithm is `-inf`.
    pub fn binomial_coeffitient_ln(n: u64, k: u64) -> f64 {
        if n < k {
            return f64::NEG_INFINITY;
        }

        return ln_gamma(n as f64 + 1.0)
            - ln_gamma(k as f64 + 1.0)
            - ln_gamma((n - k) as f64 + 1.0);
    }
}
