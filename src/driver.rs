//! The entry point that replaces the original `if __main__` scripts.
//!
//! [run] takes an already split token list (a distribution name followed by
//! it's numeric parameters), constructs the requested distribution and sends
//! a chart of it to the given renderer. Anything wrong with the input comes
//! back as a [DriverError] with a usage message, never as a panic.

use crate::distributions::{
    Binomial::Binomial, Exponential::Exponential, Geometric::Geometric,
    Hypergeometric::Hypergeometric, Normal::Normal, Poisson::Poisson,
    ShiftedGeometric::ShiftedGeometric,
};
use crate::errors::DriverError;
use crate::plotting::{self, BarPlotOptions, ChartRenderer, LinePlotOptions};

pub const USAGE: &str =
    "[geometric|ffg|binomial|hypergeometric|poisson|exponential|normal] [parameters...]";
const USAGE_GEOMETRIC: &str = "geometric [p] [x range]";
const USAGE_FFG: &str = "ffg [p] [x range]";
const USAGE_BINOMIAL: &str = "binomial [p] [n] [x range]";
const USAGE_HYPERGEOMETRIC: &str = "hypergeometric [N] [A] [n]";
const USAGE_POISSON: &str = "poisson [mu] [x range]";
const USAGE_EXPONENTIAL: &str = "exponential [lambda] [x range] [sample rate]";
const USAGE_NORMAL: &str = "normal [mu] [sigma] [x range] [sample rate]";

/// Constructs the distribution named by `args[0]` from the remaining
/// arguments and plots it with `renderer`.
///
/// Optional trailing arguments (`[x range]`, `[sample rate]`) fall back to
/// the [crate::configuration] deafults when omited.
pub fn run(args: &[String], renderer: &mut dyn ChartRenderer) -> Result<(), DriverError> {
    let name: &str = match args.first() {
        Some(token) => token.as_str(),
        None => return Err(DriverError::Usage(USAGE)),
    };

    match name {
        "geometric" => {
            let p: f64 = required_f64(args, 1, "p", USAGE_GEOMETRIC)?;
            let options: BarPlotOptions = bar_options(args, 2, USAGE_GEOMETRIC)?;
            let distribution: Geometric = Geometric::new(p)?;
            plotting::plot_discrete(&distribution, &options, renderer);
        }
        "ffg" | "shifted-geometric" => {
            let p: f64 = required_f64(args, 1, "p", USAGE_FFG)?;
            let options: BarPlotOptions = bar_options(args, 2, USAGE_FFG)?;
            let distribution: ShiftedGeometric = ShiftedGeometric::new(p)?;
            plotting::plot_discrete(&distribution, &options, renderer);
        }
        "binomial" => {
            let p: f64 = required_f64(args, 1, "p", USAGE_BINOMIAL)?;
            let n: u64 = required_u64(args, 2, "n", USAGE_BINOMIAL)?;
            let options: BarPlotOptions = bar_options(args, 3, USAGE_BINOMIAL)?;
            let distribution: Binomial = Binomial::new(p, n)?;
            plotting::plot_discrete(&distribution, &options, renderer);
        }
        "hypergeometric" => {
            let population: u64 = required_u64(args, 1, "N", USAGE_HYPERGEOMETRIC)?;
            let successes: u64 = required_u64(args, 2, "A", USAGE_HYPERGEOMETRIC)?;
            let draws: u64 = required_u64(args, 3, "n", USAGE_HYPERGEOMETRIC)?;
            let distribution: Hypergeometric = Hypergeometric::new(population, successes, draws)?;
            plotting::plot_discrete(&distribution, &BarPlotOptions::default(), renderer);
        }
        "poisson" => {
            let mu: f64 = required_f64(args, 1, "mu", USAGE_POISSON)?;
            let options: BarPlotOptions = bar_options(args, 2, USAGE_POISSON)?;
            let distribution: Poisson = Poisson::new(mu)?;
            plotting::plot_discrete(&distribution, &options, renderer);
        }
        "exponential" => {
            let lambda: f64 = required_f64(args, 1, "lambda", USAGE_EXPONENTIAL)?;
            let options: LinePlotOptions = line_options(args, 2, USAGE_EXPONENTIAL)?;
            let distribution: Exponential = Exponential::new(lambda)?;
            plotting::plot_continuous(&distribution, &options, renderer);
        }
        "normal" => {
            let mu: f64 = required_f64(args, 1, "mu", USAGE_NORMAL)?;
            let sigma: f64 = required_f64(args, 2, "sigma", USAGE_NORMAL)?;
            let options: LinePlotOptions = line_options(args, 3, USAGE_NORMAL)?;
            let distribution: Normal = Normal::new(mu, sigma)?;
            plotting::plot_continuous(&distribution, &options, renderer);
        }
        _ => {
            return Err(DriverError::UnknownDistribution(name.to_string()));
        }
    }

    return Ok(());
}

fn required_arg<'a>(
    args: &'a [String],
    index: usize,
    usage: &'static str,
) -> Result<&'a str, DriverError> {
    return match args.get(index) {
        Some(value) => Ok(value.as_str()),
        None => Err(DriverError::Usage(usage)),
    };
}

fn required_f64(
    args: &[String],
    index: usize,
    argument: &'static str,
    usage: &'static str,
) -> Result<f64, DriverError> {
    let raw: &str = required_arg(args, index, usage)?;
    return raw.parse::<f64>().map_err(|_| DriverError::MalformedNumber {
        argument,
        value: raw.to_string(),
    });
}

fn required_u64(
    args: &[String],
    index: usize,
    argument: &'static str,
    usage: &'static str,
) -> Result<u64, DriverError> {
    let raw: &str = required_arg(args, index, usage)?;
    return raw.parse::<u64>().map_err(|_| DriverError::MalformedNumber {
        argument,
        value: raw.to_string(),
    });
}

fn optional_usize(
    args: &[String],
    index: usize,
    argument: &'static str,
) -> Result<Option<usize>, DriverError> {
    return match args.get(index) {
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| DriverError::MalformedNumber {
                argument,
                value: raw.to_string(),
            }),
        None => Ok(None),
    };
}

fn bar_options(
    args: &[String],
    index: usize,
    _usage: &'static str,
) -> Result<BarPlotOptions, DriverError> {
    let points: Option<usize> = optional_usize(args, index, "x range")?;
    return Ok(BarPlotOptions::builder().maybe_points(points).build());
}

fn line_options(
    args: &[String],
    index: usize,
    _usage: &'static str,
) -> Result<LinePlotOptions, DriverError> {
    let points: Option<usize> = optional_usize(args, index, "x range")?;
    let sample_rate: Option<usize> = optional_usize(args, index + 1, "sample rate")?;
    return Ok(LinePlotOptions::builder()
        .maybe_points(points)
        .maybe_sample_rate(sample_rate)
        .build());
}
