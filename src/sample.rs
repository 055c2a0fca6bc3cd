//! Sequence sampling from a model.
//!
//! Draws hidden-state paths and matching observation sequences from a
//! validated [`Model`]. Useful for generating synthetic corpora, e.g. to
//! check that the estimator recovers the parameters of a known model.

use crate::error::HmmError;
use crate::estimate::AnnotatedSequence;
use crate::model::Model;

/// Samples an index from a probability row using a cumulative CDF walk.
///
/// Draws a uniform random number and returns the first index whose
/// cumulative probability meets or exceeds the draw. Falls back to the last
/// index if floating-point rounding prevents a match.
fn sample_index(row: &[f64], rng: &mut impl rand::Rng) -> usize {
    let u: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in row.iter().enumerate() {
        cumulative += p;
        if cumulative >= u {
            return i;
        }
    }
    row.len() - 1
}

/// Samples a hidden-state path and its emitted observations.
///
/// The first state is drawn from the initial distribution, each later state
/// from the transition row of its predecessor, and each observation from
/// the emission row of its state. A `len` of 0 yields two empty vectors.
///
/// # Returns
///
/// `(states, observations)`, both of length `len`, as indices into the
/// model's alphabets.
pub fn sample_sequence(
    model: &Model,
    len: usize,
    rng: &mut impl rand::Rng,
) -> (Vec<usize>, Vec<usize>) {
    let mut states = Vec::with_capacity(len);
    let mut observations = Vec::with_capacity(len);

    let mut prev: Option<usize> = None;
    for _ in 0..len {
        let state = match prev {
            None => sample_index(model.initial_distribution(), rng),
            Some(p) => sample_index(model.transition_row(p), rng),
        };
        states.push(state);
        observations.push(sample_index(model.emission_row(state), rng));
        prev = Some(state);
    }

    (states, observations)
}

/// Samples an [`AnnotatedSequence`] with labels resolved from the model.
///
/// Convenience over [`sample_sequence`] for feeding the estimator.
///
/// # Errors
///
/// Returns [`HmmError::EmptySequence`] if `len` is 0.
pub fn sample_annotated(
    model: &Model,
    len: usize,
    rng: &mut impl rand::Rng,
) -> Result<AnnotatedSequence, HmmError> {
    let (states, observations) = sample_sequence(model, len, rng);
    AnnotatedSequence::new(
        observations
            .iter()
            .map(|&o| model.symbol_name(o).to_string())
            .collect(),
        states
            .iter()
            .map(|&s| model.state_name(s).to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn weather_model() -> Model {
        Model::new(
            labels(&["Rainy", "Sunny"]),
            labels(&["Walk", "Shop", "Clean"]),
            vec![0.6, 0.4],
            vec![0.7, 0.3, 0.4, 0.6],
            vec![0.1, 0.4, 0.5, 0.6, 0.3, 0.1],
        )
        .unwrap()
    }

    #[test]
    fn length_correctness() {
        let model = weather_model();
        let mut rng = StdRng::seed_from_u64(42);
        let (states, observations) = sample_sequence(&model, 100, &mut rng);
        assert_eq!(states.len(), 100);
        assert_eq!(observations.len(), 100);
        assert!(states.iter().all(|&s| s < model.n_states()));
        assert!(observations.iter().all(|&o| o < model.n_symbols()));
    }

    #[test]
    fn zero_length_yields_empty() {
        let model = weather_model();
        let mut rng = StdRng::seed_from_u64(42);
        let (states, observations) = sample_sequence(&model, 0, &mut rng);
        assert!(states.is_empty());
        assert!(observations.is_empty());

        assert!(matches!(
            sample_annotated(&model, 0, &mut rng),
            Err(HmmError::EmptySequence)
        ));
    }

    #[test]
    fn deterministic_with_seed() {
        let model = weather_model();

        let mut rng1 = StdRng::seed_from_u64(123);
        let sampled1 = sample_sequence(&model, 50, &mut rng1);

        let mut rng2 = StdRng::seed_from_u64(123);
        let sampled2 = sample_sequence(&model, 50, &mut rng2);

        assert_eq!(sampled1, sampled2);
    }

    #[test]
    fn degenerate_model_is_deterministic() {
        // One possible path: always state 0, always symbol 1.
        let model = Model::new(
            labels(&["Only"]),
            labels(&["x", "y"]),
            vec![1.0],
            vec![1.0],
            vec![0.0, 1.0],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let (states, observations) = sample_sequence(&model, 20, &mut rng);
        assert!(states.iter().all(|&s| s == 0));
        assert!(observations.iter().all(|&o| o == 1));
    }

    #[test]
    fn initial_state_frequencies_match_distribution() {
        let model = weather_model();
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10_000;
        let mut rainy = 0usize;
        for _ in 0..n {
            let (states, _) = sample_sequence(&model, 1, &mut rng);
            if states[0] == 0 {
                rainy += 1;
            }
        }
        let f = rainy as f64 / n as f64;
        assert!((f - 0.6).abs() < 0.03, "Rainy start frequency: {f}, expected ~0.6");
    }

    #[test]
    fn annotated_sample_carries_labels() {
        let model = weather_model();
        let mut rng = StdRng::seed_from_u64(9);
        let annotated = sample_annotated(&model, 25, &mut rng).unwrap();
        assert_eq!(annotated.len(), 25);
        for label in annotated.states() {
            assert!(model.state_index(label).is_some(), "unknown state {label:?}");
        }
        for label in annotated.observations() {
            assert!(model.symbol_index(label).is_some(), "unknown symbol {label:?}");
        }
    }
}
