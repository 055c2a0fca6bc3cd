//! Exhaustive path enumeration.
//!
//! Scores every possible hidden-state path for an observation sequence.
//! There are `n_states^len` candidates, so this is intentionally
//! exponential: it exists as an exact reference oracle for the Viterbi
//! decoder and for inspecting tiny models, not as a production decoder.
//! No size ceiling is imposed here; the caller is responsible for bounding
//! `n_states^len` before invoking these functions.

use crate::error::HmmError;
use crate::model::Model;
use crate::path::{Path, score_path};

/// Advances a state assignment to its lexicographic successor.
///
/// Returns `false` once the assignment has wrapped back to all zeros.
fn next_assignment(assignment: &mut [usize], n_states: usize) -> bool {
    for slot in assignment.iter_mut().rev() {
        *slot += 1;
        if *slot < n_states {
            return true;
        }
        *slot = 0;
    }
    false
}

/// Scores every possible state path for the observation sequence.
///
/// Returns all `n_states^len` paths sorted by descending joint probability.
/// Paths with equal probability are ordered by their state sequences read
/// from the final step backwards, matching the tie-break of the Viterbi
/// decoder, so the ranking is deterministic and its head is always the
/// decoded path.
///
/// # Errors
///
/// Returns [`HmmError::EmptySequence`] for a zero-length sequence and
/// [`HmmError::UnknownSymbol`] for an out-of-range symbol index.
pub fn enumerate_paths(model: &Model, observations: &[usize]) -> Result<Vec<Path>, HmmError> {
    model.validate_observations(observations)?;

    let mut assignment = vec![0usize; observations.len()];
    let mut paths = Vec::new();
    loop {
        paths.push(score_path(model, &assignment, observations)?);
        if !next_assignment(&mut assignment, model.n_states()) {
            break;
        }
    }

    paths.sort_by(|a, b| {
        b.log_prob()
            .total_cmp(&a.log_prob())
            .then_with(|| a.states().iter().rev().cmp(b.states().iter().rev()))
    });
    Ok(paths)
}

/// Finds the most probable path by brute force.
///
/// Scans every candidate without materializing the full ranking. Ties
/// resolve to the path whose state sequence compares smaller read from the
/// final step backwards, which is exactly the path the Viterbi backtrace
/// produces: it picks the lowest-indexed final state, then the
/// lowest-indexed predecessor at each earlier step.
///
/// # Errors
///
/// Same conditions as [`enumerate_paths`].
pub fn best_path_exhaustive(model: &Model, observations: &[usize]) -> Result<Path, HmmError> {
    model.validate_observations(observations)?;

    let mut assignment = vec![0usize; observations.len()];
    let mut best = score_path(model, &assignment, observations)?;
    while next_assignment(&mut assignment, model.n_states()) {
        let candidate = score_path(model, &assignment, observations)?;
        if candidate.log_prob() > best.log_prob()
            || (candidate.log_prob() == best.log_prob()
                && candidate.states().iter().rev().lt(best.states().iter().rev()))
        {
            best = candidate;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::likelihood::likelihood;

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
    fn enumerates_all_candidates() {
        let model = weather_model();
        let paths = enumerate_paths(&model, &[0, 1, 2]).unwrap();
        assert_eq!(paths.len(), 8); // 2^3
        // Every path must be distinct.
        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                assert_ne!(a.states(), b.states());
            }
        }
    }

    #[test]
    fn ranking_is_descending() {
        let model = weather_model();
        let paths = enumerate_paths(&model, &[0, 1, 2]).unwrap();
        for pair in paths.windows(2) {
            assert!(
                pair[0].log_prob() >= pair[1].log_prob(),
                "ranking out of order: {} before {}",
                pair[0].log_prob(),
                pair[1].log_prob()
            );
        }
    }

    #[test]
    fn best_path_is_ranking_head() {
        let model = weather_model();
        let paths = enumerate_paths(&model, &[0, 1, 2]).unwrap();
        let best = best_path_exhaustive(&model, &[0, 1, 2]).unwrap();
        assert_eq!(best.states(), paths[0].states());
        assert!((best.log_prob() - paths[0].log_prob()).abs() < 1e-12);
    }

    #[test]
    fn best_path_weather_example() {
        let model = weather_model();
        let best = best_path_exhaustive(&model, &[0, 1, 2]).unwrap();
        assert_eq!(best.state_labels(&model), vec!["Sunny", "Rainy", "Rainy"]);
        assert!((best.prob() - 0.01344).abs() < 1e-6, "prob = {}", best.prob());
    }

    #[test]
    fn tied_paths_rank_like_the_decoder() {
        // [0, 1] and [1, 0] tie at probability 0.45; the ranking orders
        // them by their sequences read backwards, so [1, 0] leads and the
        // brute-force winner is the ranking head.
        let model = Model::new(
            labels(&["A", "B"]),
            labels(&["x"]),
            vec![0.5, 0.5],
            vec![0.1, 0.9, 0.9, 0.1],
            vec![1.0, 1.0],
        )
        .unwrap();
        let paths = enumerate_paths(&model, &[0, 0]).unwrap();
        assert_eq!(paths[0].states(), &[1, 0]);
        assert_eq!(paths[1].states(), &[0, 1]);
        assert_eq!(paths[0].log_prob(), paths[1].log_prob());

        let best = best_path_exhaustive(&model, &[0, 0]).unwrap();
        assert_eq!(best.states(), paths[0].states());
    }

    #[test]
    fn path_probabilities_sum_to_sequence_likelihood() {
        let model = weather_model();
        let observations = [0, 1, 2, 0];
        let paths = enumerate_paths(&model, &observations).unwrap();
        let total: f64 = paths.iter().map(Path::prob).sum();
        let p = likelihood(&model, &observations).unwrap();
        assert!(
            (total - p).abs() < 1e-9,
            "enumerated sum {total} vs forward {p}"
        );
    }

    #[test]
    fn empty_sequence_is_an_error() {
        let model = weather_model();
        assert!(matches!(
            enumerate_paths(&model, &[]),
            Err(HmmError::EmptySequence)
        ));
        assert!(matches!(
            best_path_exhaustive(&model, &[]),
            Err(HmmError::EmptySequence)
        ));
    }

    #[test]
    fn next_assignment_covers_base_n() {
        let mut assignment = vec![0usize; 2];
        let mut seen = vec![assignment.clone()];
        while next_assignment(&mut assignment, 3) {
            seen.push(assignment.clone());
        }
        assert_eq!(seen.len(), 9);
        assert_eq!(seen[0], vec![0, 0]);
        assert_eq!(seen[1], vec![0, 1]);
        assert_eq!(seen[8], vec![2, 2]);
        // Wrapped back to the origin.
        assert_eq!(assignment, vec![0, 0]);
    }
}
