//! Minimal command line driver: builds a distribution from the program
//! arguments and draws it as a text chart.
//!
//! ```text
//! cargo run --example poisson_cli -- poisson 3.0 15
//! cargo run --example poisson_cli -- normal 0.0 1.0
//! ```

use MatStat::driver;
use MatStat::plotting::TextRenderer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect::<Vec<String>>();

    let mut renderer: TextRenderer = TextRenderer::new();

    if let Err(error) = driver::run(&args, &mut renderer) {
        println!("{}", error);
    }
}
