//! Shows the rate duality between the Exponential and Poisson distributions:
//! an avarage waiting time of 2 units between events (`lambda = 0.5`) is the
//! same process as an avarage of 0.5 events per unit of time.

use MatStat::distributions::{Exponential::Exponential, Poisson::Poisson};
use MatStat::plotting::{self, BarPlotOptions, LinePlotOptions, TextRenderer};

fn main() {
    let waiting_time: Exponential =
        Exponential::new(0.5).expect("0.5 is a valid rate");

    let mut renderer: TextRenderer = TextRenderer::new();

    println!("Exponential(0.5): time between events \n");
    let line_options: LinePlotOptions = LinePlotOptions::builder()
        .points(10)
        .sample_rate(1)
        .build();
    plotting::plot_continuous(&waiting_time, &line_options, &mut renderer);

    let events_per_unit: Poisson = waiting_time.to_poisson();

    println!("\nPoisson({}): events per unit of time \n", events_per_unit.get_lambda());
    let bar_options: BarPlotOptions = BarPlotOptions::builder().points(10).build();
    plotting::plot_discrete(&events_per_unit, &bar_options, &mut renderer);
}
