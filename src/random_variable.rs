//! A finite, one dimensional discrete
//! [random variable](https://en.wikipedia.org/wiki/Random_variable), given
//! extensionally as a list of (probability, value) events.
//!
//! This is the hand-rolled counterpart of the distributions in
//! [crate::distributions]: instead of a closed formula, the whole
//! probability table is written down. Uscefull for dice-like experiments
//! where no classical distribution applies.

use crate::errors::DistError;

/// Tolerance when checking that the event probabilities sum to 1.
const TOTAL_MASS_TOLERANCE: f64 = 1e-9;

/// One outcome of the experiment and the probability of it happening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub probability: f64,
    pub value: i64,
}

/// A discrete random variable over finitely many [Event]s.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomVariable {
    events: Vec<Event>,
}

impl RandomVariable {
    /// Creates a new [RandomVariable] from it's list of events.
    ///
    /// Every probability must belong in `[0.0, 1.0]` and the probabilities
    /// must sum to `1.0` (within a small tolerance), otherwise an error is
    /// returned.
    pub fn new(events: Vec<Event>) -> Result<RandomVariable, DistError> {
        let mut total_mass: f64 = 0.0;
        for event in &events {
            if !event.probability.is_finite() {
                return Err(DistError::NonFinite("probability"));
            }
            if !(0.0 <= event.probability && event.probability <= 1.0) {
                return Err(DistError::InvalidProbability {
                    name: "probability",
                    value: event.probability,
                });
            }
            total_mass += event.probability;
        }

        if (total_mass - 1.0).abs() > TOTAL_MASS_TOLERANCE {
            return Err(DistError::InvalidCombination(format!(
                "the event probabilities must sum to 1.0, they sum to {}",
                total_mass
            )));
        }

        return Ok(RandomVariable { events });
    }

    /// A [RandomVariable] distributed evenly over the values
    /// `0, 1, ..., size - 1` (each with probability `1/size`).
    pub fn even_distribution(size: usize) -> Result<RandomVariable, DistError> {
        if size == 0 {
            return Err(DistError::InvalidCombination(
                "an even distribution needs at least 1 value".to_string(),
            ));
        }

        let probability: f64 = 1.0 / size as f64;
        let events: Vec<Event> = (0..size)
            .map(|value| Event {
                probability,
                value: value as i64,
            })
            .collect::<Vec<Event>>();

        return Ok(RandomVariable { events });
    }

    /// The events of this variable, in the order they were given.
    pub fn get_events(&self) -> &[Event] {
        return &self.events;
    }

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value):
    /// `E[X] = sum( p_i * x_i )`
    pub fn expected_value(&self) -> f64 {
        let mut out: f64 = 0.0;
        for event in &self.events {
            out += event.probability * event.value as f64;
        }
        return out;
    }

    /// The [variance](https://en.wikipedia.org/wiki/Variance), computed as
    /// `Var[X] = E[X^2] - E[X]^2`.
    pub fn variance(&self) -> f64 {
        let mean: f64 = self.expected_value();

        let mut second_moment: f64 = 0.0;
        for event in &self.events {
            let value: f64 = event.value as f64;
            second_moment += event.probability * value * value;
        }

        return second_moment - mean * mean;
    }
}
