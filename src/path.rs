//! State paths and explicit path scoring.

use crate::error::HmmError;
use crate::model::Model;

/// An ordered sequence of hidden states together with its joint probability.
///
/// Probabilities are carried in natural-log space so that long paths do not
/// underflow; [`Path::prob`] converts back to linear space.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    states: Vec<usize>,
    log_prob: f64,
}

impl Path {
    pub(crate) fn new(states: Vec<usize>, log_prob: f64) -> Self {
        Self { states, log_prob }
    }

    /// State indices in time order.
    pub fn states(&self) -> &[usize] {
        &self.states
    }

    /// Natural log of the joint probability of this path and its observations.
    ///
    /// `f64::NEG_INFINITY` for a path with probability zero.
    pub fn log_prob(&self) -> f64 {
        self.log_prob
    }

    /// Joint probability in linear space.
    pub fn prob(&self) -> f64 {
        self.log_prob.exp()
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Resolves the state indices to their labels in a model.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range for `model`; paths produced by
    /// this crate's own operations are always in range for the model they
    /// were decoded against.
    pub fn state_labels<'m>(&self, model: &'m Model) -> Vec<&'m str> {
        self.states.iter().map(|&s| model.state_name(s)).collect()
    }
}

/// Scores an explicit state path against an observation sequence.
///
/// Computes the joint log-probability
/// `ln pi(s_1) + ln B(s_1, o_1) + sum ln A(s_{k-1}, s_k) + ln B(s_k, o_k)`.
/// A path that passes through a zero-probability initial state, transition,
/// or emission scores `-inf` (linear probability 0); that is an answer, not
/// an error.
///
/// # Errors
///
/// Returns [`HmmError`] if the observation sequence is empty or contains an
/// out-of-range symbol, if the two sequences differ in length, or if a state
/// index is out of range.
pub fn score_path(
    model: &Model,
    states: &[usize],
    observations: &[usize],
) -> Result<Path, HmmError> {
    model.validate_observations(observations)?;
    if states.len() != observations.len() {
        return Err(HmmError::LengthMismatch {
            observations_len: observations.len(),
            states_len: states.len(),
        });
    }
    for (position, &state) in states.iter().enumerate() {
        if state >= model.n_states() {
            return Err(HmmError::UnknownState {
                position,
                state,
                n_states: model.n_states(),
            });
        }
    }

    let mut log_prob = model.initial(states[0]).ln() + model.emission_prob(states[0], observations[0]).ln();
    for k in 1..states.len() {
        log_prob += model.transition_prob(states[k - 1], states[k]).ln()
            + model.emission_prob(states[k], observations[k]).ln();
    }

    Ok(Path::new(states.to_vec(), log_prob))
}
