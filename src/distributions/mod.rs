// Discrete
pub mod Binomial;
pub mod Geometric;
pub mod Hypergeometric;
pub mod Poisson;
pub mod ShiftedGeometric;

// Continuous
pub mod Exponential;
pub mod Normal;
