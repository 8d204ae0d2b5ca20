use assert_approx_eq::assert_approx_eq;

use MatStat::{
    distribution_trait::DiscreteDistribution,
    distributions::Binomial::Binomial,
    distributions::Exponential::Exponential,
    distributions::Normal::Normal,
    distributions::Poisson::Poisson,
    domain::{ContinuousDomain, DiscreteDomain},
    driver,
    errors::{DistError, DriverError},
    euclid,
    plotting::{self, BarPlotOptions, LinePlotOptions, RecordingRenderer},
    random_variable::{Event, RandomVariable},
};

fn args(tokens: &[&str]) -> Vec<String> {
    return tokens.iter().map(|t| t.to_string()).collect::<Vec<String>>();
}

#[cfg(test)]
mod euclid_tests {
    use super::*;
    use MatStat::euclid::combinatorics::{binomial_coeffitient, binomial_coeffitient_ln};

    #[test]
    fn test_binomial_coeffitient_small_values() {
        assert_eq!(binomial_coeffitient(0, 0), 1.0);
        assert_eq!(binomial_coeffitient(5, 0), 1.0);
        assert_eq!(binomial_coeffitient(5, 5), 1.0);
        assert_eq!(binomial_coeffitient(4, 2), 6.0);
        assert_eq!(binomial_coeffitient(22, 17), 26334.0);
        assert_eq!(binomial_coeffitient(10, 3), 120.0);
    }

    #[test]
    fn test_binomial_coeffitient_symmetry() {
        for k in 0..=12 {
            assert_eq!(
                binomial_coeffitient(12, k),
                binomial_coeffitient(12, 12 - k)
            );
        }
    }

    #[test]
    fn test_binomial_coeffitient_row_sum() {
        // sum of the n-th row of Pascal's triangle is 2^n
        let total: f64 = (0..=10).map(|k| binomial_coeffitient(10, k)).sum();
        assert_eq!(total, 1024.0);

        let total: f64 = (0..=20).map(|k| binomial_coeffitient(20, k)).sum();
        assert_eq!(total, 1048576.0);
    }

    #[test]
    fn test_binomial_coeffitient_large_inputs() {
        // C(1000, 500) overflows u128, the log-gamma fallback must kick in
        // and still return something finite and positive
        let big: f64 = binomial_coeffitient(1000, 500);
        assert!(big.is_finite());
        assert!(0.0 < big);

        // the fallback agrees with the exact product where both apply
        let exact: f64 = binomial_coeffitient(40, 20);
        let logged: f64 = binomial_coeffitient_ln(40, 20).exp();
        assert_approx_eq!(logged / exact, 1.0, 1.0e-10);
    }

    #[test]
    fn test_binomial_coeffitient_ln_returns_the_logarithm() {
        assert_approx_eq!(binomial_coeffitient_ln(4, 2), 6.0_f64.ln(), 1.0e-10);
        assert_approx_eq!(binomial_coeffitient_ln(5, 0), 0.0, 1.0e-10);
        // ln(0)
        assert_eq!(binomial_coeffitient_ln(3, 5), f64::NEG_INFINITY);
    }

    #[test]
    fn test_ln_gamma() {
        // gamma(n) = (n-1)! on the positive integers
        assert_approx_eq!(euclid::ln_gamma(1.0), 0.0, 1.0e-12);
        assert_approx_eq!(euclid::ln_gamma(2.0), 0.0, 1.0e-12);
        assert_approx_eq!(euclid::ln_gamma(5.0), 24.0_f64.ln(), 1.0e-10);
        assert_approx_eq!(euclid::ln_gamma(11.0), 3628800.0_f64.ln(), 1.0e-10);
        // gamma(1/2) = sqrt(pi)
        assert_approx_eq!(
            euclid::ln_gamma(0.5),
            std::f64::consts::PI.sqrt().ln(),
            1.0e-10
        );
    }
}

#[cfg(test)]
mod domain_tests {
    use super::*;

    #[test]
    fn test_discrete_contains() {
        let domain: DiscreteDomain = DiscreteDomain::Range(0, 4);
        assert!(domain.contains(0.0));
        assert!(domain.contains(4.0));
        assert!(!domain.contains(5.0));
        assert!(!domain.contains(-1.0));
        // non-integers never belong to a discrete domain
        assert!(!domain.contains(2.5));

        let domain: DiscreteDomain = DiscreteDomain::From(1);
        assert!(domain.contains(1.0));
        assert!(domain.contains(1000.0));
        assert!(!domain.contains(0.0));
    }

    #[test]
    fn test_discrete_iteration() {
        let domain: DiscreteDomain = DiscreteDomain::From(0);
        let first: Vec<f64> = domain.iter().take(4).collect::<Vec<f64>>();
        assert_eq!(first, vec![0.0, 1.0, 2.0, 3.0]);

        // a finite range stops at it's upper bound
        let domain: DiscreteDomain = DiscreteDomain::Range(2, 4);
        let all: Vec<f64> = domain.iter().collect::<Vec<f64>>();
        assert_eq!(all, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_continuous_bounds() {
        let bounds: (f64, f64) = ContinuousDomain::Reals.get_bounds();
        assert_eq!(bounds.0, f64::NEG_INFINITY);
        assert_eq!(bounds.1, f64::INFINITY);

        let bounds: (f64, f64) = ContinuousDomain::From(0.0).get_bounds();
        assert_eq!(bounds.0, 0.0);
        assert_eq!(bounds.1, f64::INFINITY);
    }
}

#[cfg(test)]
mod random_variable_tests {
    use super::*;

    #[test]
    fn test_even_distribution_moments() {
        // fair die on {0, .., 5}
        let variable: RandomVariable =
            RandomVariable::even_distribution(6).expect("Size should be valid");
        assert_approx_eq!(variable.expected_value(), 2.5, 1.0e-12);
        assert_approx_eq!(variable.variance(), 35.0 / 12.0, 1.0e-12);
    }

    #[test]
    fn test_even_distribution_of_size_zero_fails() {
        assert!(RandomVariable::even_distribution(0).is_err());
    }

    #[test]
    fn test_custom_variable() {
        let variable: RandomVariable = RandomVariable::new(vec![
            Event {
                probability: 0.5,
                value: -1,
            },
            Event {
                probability: 0.5,
                value: 1,
            },
        ])
        .expect("Events should be valid");

        assert_approx_eq!(variable.expected_value(), 0.0, 1.0e-12);
        assert_approx_eq!(variable.variance(), 1.0, 1.0e-12);
    }

    #[test]
    fn test_mass_must_sum_to_one() {
        let result: Result<RandomVariable, DistError> = RandomVariable::new(vec![
            Event {
                probability: 0.5,
                value: 0,
            },
            Event {
                probability: 0.4,
                value: 1,
            },
        ]);
        assert!(matches!(result, Err(DistError::InvalidCombination(_))));
    }

    #[test]
    fn test_individual_probabilities_are_validated() {
        let result: Result<RandomVariable, DistError> = RandomVariable::new(vec![
            Event {
                probability: 1.2,
                value: 0,
            },
            Event {
                probability: -0.2,
                value: 1,
            },
        ]);
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod plotting_tests {
    use super::*;

    #[test]
    fn test_bar_series_starts_at_the_support() {
        let poisson: Poisson = Poisson::new(3.0).expect("Parameter should be valid");
        let options: BarPlotOptions = BarPlotOptions::builder().points(10).build();
        let (x_values, y_values): (Vec<f64>, Vec<f64>) = plotting::bar_series(&poisson, &options);

        assert_eq!(x_values.len(), 10);
        assert_eq!(y_values.len(), 10);
        assert_eq!(x_values[0], 0.0);
        assert_eq!(x_values[9], 9.0);
        assert_approx_eq!(y_values[0], poisson.pmf(0.0), 1.0e-12);
    }

    #[test]
    fn test_bar_series_is_capped_by_a_finite_support() {
        let binomial: Binomial = Binomial::new(0.5, 4).expect("Parameters should be valid");
        let (x_values, _): (Vec<f64>, Vec<f64>) =
            plotting::bar_series(&binomial, &BarPlotOptions::default());

        // the default 25 points cannot exceed the 5 values of the support
        assert_eq!(x_values, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_line_series_is_left_anchored_for_exponential() {
        let exponential: Exponential = Exponential::new(0.5).expect("Parameter should be valid");
        let options: LinePlotOptions = LinePlotOptions::builder()
            .points(10)
            .sample_rate(5)
            .build();
        let (x_values, y_values): (Vec<f64>, Vec<f64>) =
            plotting::line_series(&exponential, &options);

        assert_eq!(x_values.len(), 10 * 5);
        assert_eq!(x_values[0], 0.0);
        assert_approx_eq!(x_values[1], 0.2, 1.0e-12);
        assert_approx_eq!(y_values[0], 0.5, 1.0e-12);
    }

    #[test]
    fn test_line_series_is_centered_for_normal() {
        let normal: Normal = Normal::new(2.0, 1.0).expect("Parameters should be valid");
        let options: LinePlotOptions = LinePlotOptions::builder()
            .points(3)
            .sample_rate(2)
            .build();
        let (x_values, _): (Vec<f64>, Vec<f64>) = plotting::line_series(&normal, &options);

        // half width of 3 around the mean, 2 samples per unit
        assert_eq!(x_values.len(), 2 * 3 * 2);
        assert_approx_eq!(x_values[0], 2.0 - 3.0, 1.0e-12);
        assert_approx_eq!(x_values[1], 2.0 - 3.0 + 0.5, 1.0e-12);
    }

    #[test]
    fn test_series_length_is_clamped() {
        use MatStat::configuration;

        let normal: Normal = Normal::new(0.0, 1.0).expect("Parameters should be valid");
        let options: LinePlotOptions = LinePlotOptions::builder()
            .points(usize::MAX)
            .sample_rate(7)
            .build();
        let (x_values, y_values): (Vec<f64>, Vec<f64>) = plotting::line_series(&normal, &options);

        assert_eq!(x_values.len(), configuration::MAX_PLOT_SAMPLES);
        assert!(y_values.iter().all(|y| y.is_finite()));

        let poisson: Poisson = Poisson::new(3.0).expect("Parameter should be valid");
        let options: BarPlotOptions = BarPlotOptions::builder().points(usize::MAX).build();
        let (x_values, _): (Vec<f64>, Vec<f64>) = plotting::bar_series(&poisson, &options);
        assert_eq!(x_values.len(), configuration::MAX_PLOT_SAMPLES);
    }

    #[test]
    fn test_plot_discrete_talks_to_the_renderer() {
        let poisson: Poisson = Poisson::new(3.0).expect("Parameter should be valid");
        let mut renderer: RecordingRenderer = RecordingRenderer::new();

        plotting::plot_discrete(&poisson, &BarPlotOptions::default(), &mut renderer);

        assert_eq!(renderer.times_shown, 1);
        let (x_values, _): (Vec<f64>, Vec<f64>) = renderer.bars.expect("Bars should be rendered");
        assert_eq!(x_values.len(), 25);
        assert!(renderer.line.is_none());
    }
}

#[cfg(test)]
mod driver_tests {
    use super::*;

    #[test]
    fn test_poisson_with_explicit_range() {
        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        driver::run(&args(&["poisson", "3.0", "10"]), &mut renderer)
            .expect("Arguments should be valid");

        let (x_values, y_values): (Vec<f64>, Vec<f64>) =
            renderer.bars.expect("Bars should be rendered");
        assert_eq!(x_values.len(), 10);
        let poisson: Poisson = Poisson::new(3.0).unwrap();
        assert_approx_eq!(y_values[3], poisson.pmf(3.0), 1.0e-12);
    }

    #[test]
    fn test_ffg_alias() {
        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        driver::run(&args(&["ffg", "0.25"]), &mut renderer).expect("Arguments should be valid");
        let (x_values, _): (Vec<f64>, Vec<f64>) = renderer.bars.expect("Bars should be rendered");
        // the support of the shifted geometric starts at 1
        assert_eq!(x_values[0], 1.0);

        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        driver::run(&args(&["shifted-geometric", "0.25"]), &mut renderer)
            .expect("Arguments should be valid");
        assert!(renderer.bars.is_some());
    }

    #[test]
    fn test_normal_line_with_sample_rate() {
        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        driver::run(&args(&["normal", "0.0", "1.0", "4", "10"]), &mut renderer)
            .expect("Arguments should be valid");

        let (x_values, _): (Vec<f64>, Vec<f64>) = renderer.line.expect("A line should be rendered");
        assert_eq!(x_values.len(), 2 * 4 * 10);
        assert!(renderer.bars.is_none());
    }

    #[test]
    fn test_unknown_distribution() {
        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        let result: Result<(), DriverError> = driver::run(&args(&["cauchy", "1.0"]), &mut renderer);

        match result {
            Err(DriverError::UnknownDistribution(name)) => assert_eq!(name, "cauchy"),
            other => panic!("Expected an UnknownDistribution error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_arguments_print_usage() {
        let mut renderer: RecordingRenderer = RecordingRenderer::new();

        let result: Result<(), DriverError> = driver::run(&args(&[]), &mut renderer);
        assert!(matches!(result, Err(DriverError::Usage(_))));

        let result: Result<(), DriverError> = driver::run(&args(&["binomial", "0.5"]), &mut renderer);
        match result {
            Err(error @ DriverError::Usage(_)) => {
                assert!(format!("{}", error).starts_with("Use: "));
            }
            other => panic!("Expected a Usage error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_numbers() {
        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        let result: Result<(), DriverError> =
            driver::run(&args(&["poisson", "three"]), &mut renderer);

        match result {
            Err(DriverError::MalformedNumber { argument, value }) => {
                assert_eq!(argument, "mu");
                assert_eq!(value, "three");
            }
            other => panic!("Expected a MalformedNumber error, got {:?}", other),
        }
    }

    #[test]
    fn test_absurd_ranges_do_not_crash() {
        use MatStat::configuration;

        // usize::MAX parses fine, the series must be clamped, not crash
        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        driver::run(
            &args(&["normal", "0.0", "1.0", "18446744073709551615", "9999999"]),
            &mut renderer,
        )
        .expect("Arguments should be valid");

        let (x_values, _): (Vec<f64>, Vec<f64>) = renderer.line.expect("A line should be rendered");
        assert!(x_values.len() <= configuration::MAX_PLOT_SAMPLES);
    }

    #[test]
    fn test_invalid_parameters_bubble_up() {
        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        let result: Result<(), DriverError> = driver::run(&args(&["poisson", "0.0"]), &mut renderer);
        assert!(matches!(result, Err(DriverError::InvalidParameter(_))));

        let result: Result<(), DriverError> =
            driver::run(&args(&["hypergeometric", "5", "7", "3"]), &mut renderer);
        assert!(matches!(result, Err(DriverError::InvalidParameter(_))));

        // nothing gets drawn on a failed run
        assert!(renderer.bars.is_none());
        assert!(renderer.line.is_none());
        assert_eq!(renderer.times_shown, 0);
    }
}
