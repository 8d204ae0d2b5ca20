use thiserror::Error;

/// An enum with everything that can go wrong when constructing or
/// evaluating a distribution.
///
/// All validation is done eagerly in the `new()` constructors, therefore
/// once a distribution exists, it is valid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistError {
    /// A parameter was a NaN or `+-inf` when only finite values are allowed.
    #[error("The parameter `{0}` must be finite (no `+-inf` nor NaNs). ")]
    NonFinite(&'static str),
    /// A parameter that represents a probability was outside `[0.0, 1.0]`.
    #[error(
        "The parameter `{name}` must be a probability in the interval [0.0, 1.0], found `{value}`. "
    )]
    InvalidProbability { name: &'static str, value: f64 },
    /// A parameter that must be stricly positive was 0 or negative.
    #[error("The parameter `{name}` must be stricly positive, found `{value}`. ")]
    NonPositive { name: &'static str, value: f64 },
    /// The parameters are individually fine but do not fit together
    /// (for example, more successes than population in a Hypergeometric).
    #[error("The parameters do not fullfill the preconditions of the distribution: {0} ")]
    InvalidCombination(String),
}

/// An enum that indicates what went wrong while interpreting the driver input.
///
/// None of these variants should ever escalate to a panic: the driver
/// reports them to the caller as a usage message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriverError {
    /// The first token did not name any known distribution.
    #[error("Unknown distribution '{0}'")]
    UnknownDistribution(String),
    /// An argument was missing. The message contains the expected usage.
    #[error("Use: {0}")]
    Usage(&'static str),
    /// An argument was present but could not be parsed as a number.
    #[error("The argument `{argument}` is not a valid number: '{value}'")]
    MalformedNumber {
        argument: &'static str,
        value: String,
    },
    /// The parsed parameters were rejected by the distribution constructor.
    #[error(transparent)]
    InvalidParameter(#[from] DistError),
}
