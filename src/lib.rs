#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
// ^Disable warning "crate `MatStat` should have a snake case name convert the
// identifier to snake case: `mat_stat`".
// The rest of the names will follow the snake_case convention.

//! # MatStat
//!
//! A small library of classical probability distributions:
//! mass/density functions, cumulative distribution functions, expected
//! value, variance and plotting helpers.
//!
//! Every distribution is an immutable value object: parameters are
//! validated eagerly at construction (so an invalid distribution can never
//! exist) and all queries afterwards are pure, stateless functions.
//!
//! ## Distributions
//!
//! We have defined the traits
//! [DiscreteDistribution](distribution_trait::DiscreteDistribution) and
//! [Distribution](distribution_trait::Distribution) that define a basic
//! interface to work with distributions, and implemented them for:
//!
//! ### Discrete distributions:
//!
//!  - [x] [Geometric](crate::distributions::Geometric) ([Wiki](https://en.wikipedia.org/wiki/Geometric_distribution)) (failures before the first success)
//!  - [x] [Shifted geometric](crate::distributions::ShiftedGeometric) (trial of the first success, also known as FFG)
//!  - [x] [Binomial](crate::distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] [Hypergeometric](crate::distributions::Hypergeometric) ([Wiki](https://en.wikipedia.org/wiki/Hypergeometric_distribution))
//!  - [x] [Poisson](crate::distributions::Poisson) ([Wiki](https://en.wikipedia.org/wiki/Poisson_distribution))
//!
//! ### Continuous distributions:
//!
//!  - [x] [Exponential](crate::distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Normal](crate::distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!
//! The [Poisson](crate::distributions::Poisson::Poisson) and
//! [Exponential](crate::distributions::Exponential::Exponential) can convert
//! into each other trough the reciprocal of their rates (the rate duality of
//! a poisson process).
//!
//! ## Plotting
//!
//! Every distribution can be turned into an (x, y) sequence and handed to a
//! charting collaborator trough [plotting]: discrete distributions as bar
//! charts, continuous ones as sampled lines. The rendering itself stays
//! external (see [plotting::ChartRenderer]).
//!
//! ## Driver
//!
//! [driver::run] builds a distribution from a token list
//! (`poisson 3.0 25`, ...) and plots it: the library counterpart of a tiny
//! command line front end. See the `poisson_cli` and `rate_duality` demos.

pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod driver;
pub mod errors;
pub mod euclid;
pub mod plotting;
pub mod random_variable;
