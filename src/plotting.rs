//! Turns distributions into (x, y) sequences and hands them to a charting
//! collaborator.
//!
//! The actual rendering is **not** part of the numeric core: the library
//! only builds the value sequences and talks to anything that implements
//! [ChartRenderer]. Discrete distributions render as a bar chart over an
//! integer range, continuous ones as a line sampled at a configurable step.
//!
//! A minimal [TextRenderer] is provided so the demos work out of the box,
//! and a [RecordingRenderer] to inspect the produced series in tests.

use bon::Builder;

use crate::configuration;
use crate::distribution_trait::{DiscreteDistribution, Distribution};
use crate::domain::{ContinuousDomain, DiscreteDomain};

/// The external charting collaborator contract.
///
/// `show` is a terminal, fire and forget effect: after it, the renderer may
/// block, write to disk or do nothing at all. The library never depends on
/// it's outcome.
pub trait ChartRenderer {
    /// Renders a bar chart. The 2 slices have the same length.
    fn render_bars(&mut self, x_values: &[f64], y_values: &[f64]);

    /// Renders a line chart. The 2 slices have the same length.
    fn render_line(&mut self, x_values: &[f64], y_values: &[f64]);

    /// Displays whatever has been rendered so far.
    fn show(&mut self);
}

/// Options for plotting a discrete distribution.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct BarPlotOptions {
    /// How many integer points of the support to plot.
    #[builder(default = configuration::DEFAULT_BAR_POINTS)]
    pub points: usize,
}

impl Default for BarPlotOptions {
    fn default() -> Self {
        return BarPlotOptions::builder().build();
    }
}

/// Options for plotting a continuous distribution.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct LinePlotOptions {
    /// How many unit-intervals to cover. For a left-anchored domain the
    /// range is `[min, min + points]`; for a domain over all the reals it is
    /// the *half* width: `[mean - points, mean + points]`.
    #[builder(default = configuration::DEFAULT_LINE_POINTS)]
    pub points: usize,
    /// How many pdf evaluations per unit-interval.
    #[builder(default = configuration::DEFAULT_SAMPLE_RATE)]
    pub sample_rate: usize,
}

impl Default for LinePlotOptions {
    fn default() -> Self {
        return LinePlotOptions::builder().build();
    }
}

/// Builds the (x, pmf(x)) sequence of a discrete distribution over the first
/// `options.points` values of it's support.
pub fn bar_series<D: DiscreteDistribution + ?Sized>(
    distribution: &D,
    options: &BarPlotOptions,
) -> (Vec<f64>, Vec<f64>) {
    let domain: &DiscreteDomain = distribution.get_domain();
    let points: usize = options.points.min(configuration::MAX_PLOT_SAMPLES);

    let x_values: Vec<f64> = domain.iter().take(points).collect::<Vec<f64>>();
    let y_values: Vec<f64> = x_values
        .iter()
        .map(|&x| distribution.pmf(x))
        .collect::<Vec<f64>>();

    return (x_values, y_values);
}

/// Builds the (x, pdf(x)) sequence of a continuous distribution.
///
/// The x values are spaced `1/sample_rate` apart. The range is left-anchored
/// at the lower bound of the domain when it is finite (Exponential style) and
/// centered on the expected value otherwise (Normal style).
pub fn line_series<D: Distribution + ?Sized>(
    distribution: &D,
    options: &LinePlotOptions,
) -> (Vec<f64>, Vec<f64>) {
    let domain: &ContinuousDomain = distribution.get_domain();
    let bounds: (f64, f64) = domain.get_bounds();
    let samples_per_unit: usize = options.sample_rate.max(1);
    let sample_rate: f64 = samples_per_unit as f64;

    let (start, samples): (f64, usize) = if bounds.0.is_finite() {
        // left-anchored range: [min, min + points]
        (bounds.0, options.points.saturating_mul(samples_per_unit))
    } else {
        // centered range: [center - points, center + points]
        let center: f64 = distribution.expected_value().unwrap_or(0.0);
        (
            center - options.points as f64,
            options
                .points
                .saturating_mul(samples_per_unit)
                .saturating_mul(2),
        )
    };
    // options ultimately come from user input: clamp instead of allocating
    // an absurd series
    let samples: usize = samples.min(configuration::MAX_PLOT_SAMPLES);

    let x_values: Vec<f64> = (0..samples)
        .map(|i| start + (i as f64) / sample_rate)
        .collect::<Vec<f64>>();
    let y_values: Vec<f64> = x_values
        .iter()
        .map(|&x| distribution.pdf(x))
        .collect::<Vec<f64>>();

    return (x_values, y_values);
}

/// Builds the bar series of `distribution` and sends it to the `renderer`.
pub fn plot_discrete<D: DiscreteDistribution + ?Sized>(
    distribution: &D,
    options: &BarPlotOptions,
    renderer: &mut dyn ChartRenderer,
) {
    let (x_values, y_values): (Vec<f64>, Vec<f64>) = bar_series(distribution, options);
    renderer.render_bars(&x_values, &y_values);
    renderer.show();
}

/// Builds the line series of `distribution` and sends it to the `renderer`.
pub fn plot_continuous<D: Distribution + ?Sized>(
    distribution: &D,
    options: &LinePlotOptions,
    renderer: &mut dyn ChartRenderer,
) {
    let (x_values, y_values): (Vec<f64>, Vec<f64>) = line_series(distribution, options);
    renderer.render_line(&x_values, &y_values);
    renderer.show();
}

/// A charting collaborator that draws horizontal `#` bars on stdout.
///
/// Not pretty, but it makes the demos self-contained: any graphical backend
/// can replace it by implementing [ChartRenderer].
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Width (in characters) of the largest bar.
    pub width: usize,
    buffer: Vec<String>,
}

impl TextRenderer {
    pub fn new() -> TextRenderer {
        return TextRenderer {
            width: 50,
            buffer: Vec::new(),
        };
    }

    fn render(&mut self, x_values: &[f64], y_values: &[f64]) {
        let max: f64 = y_values.iter().copied().fold(f64::MIN, f64::max);
        let scale: f64 = if max <= 0.0 {
            0.0
        } else {
            self.width as f64 / max
        };

        for (x, y) in x_values.iter().zip(y_values.iter()) {
            let bar_len: usize = (y * scale).round() as usize;
            self.buffer
                .push(format!("{:>8.3} | {:.6} {}", x, y, "#".repeat(bar_len)));
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        return TextRenderer::new();
    }
}

impl ChartRenderer for TextRenderer {
    fn render_bars(&mut self, x_values: &[f64], y_values: &[f64]) {
        self.render(x_values, y_values);
    }

    fn render_line(&mut self, x_values: &[f64], y_values: &[f64]) {
        self.render(x_values, y_values);
    }

    fn show(&mut self) {
        for line in self.buffer.drain(..) {
            println!("{}", line);
        }
    }
}

/// A charting collaborator that just remembers what it was asked to draw.
/// Used by the tests to check the produced series.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub bars: Option<(Vec<f64>, Vec<f64>)>,
    pub line: Option<(Vec<f64>, Vec<f64>)>,
    pub times_shown: usize,
}

impl RecordingRenderer {
    pub fn new() -> RecordingRenderer {
        return RecordingRenderer::default();
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render_bars(&mut self, x_values: &[f64], y_values: &[f64]) {
        self.bars = Some((x_values.to_vec(), y_values.to_vec()));
    }

    fn render_line(&mut self, x_values: &[f64], y_values: &[f64]) {
        self.line = Some((x_values.to_vec(), y_values.to_vec()));
    }

    fn show(&mut self) {
        self.times_shown += 1;
    }
}
