//! Viterbi decoding: the single most probable hidden-state path.

use tracing::debug;

use crate::error::HmmError;
use crate::model::Model;
use crate::path::Path;

/// Finds the most probable state path for an observation sequence.
///
/// Dynamic program over `delta` (best log-probability of any path ending in
/// each state at each step) and a backpointer table `psi`, in
/// `O(n_states^2 * len)` time:
///
/// `delta_1(s) = ln pi(s) + ln B(s, o_1)`,
/// `delta_k(s) = ln B(s, o_k) + max_p [delta_{k-1}(p) + ln A(p, s)]`,
/// with `psi_k(s)` recording the maximizing predecessor.
///
/// Ties are broken toward the lower-indexed state, both per step and at the
/// final column. Because the trace runs backwards, the decoded path is the
/// optimal path whose state sequence compares smallest read from the final
/// step backwards; decoding is deterministic and agrees with
/// [`best_path_exhaustive`](crate::enumerate::best_path_exhaustive) on exact
/// ties.
///
/// # Errors
///
/// Returns [`HmmError::EmptySequence`] for a zero-length sequence and
/// [`HmmError::UnknownSymbol`] for an out-of-range symbol index.
pub fn viterbi(model: &Model, observations: &[usize]) -> Result<Path, HmmError> {
    model.validate_observations(observations)?;

    let n = model.n_states();
    let len = observations.len();

    let mut delta: Vec<f64> = (0..n)
        .map(|s| model.initial(s).ln() + model.emission_prob(s, observations[0]).ln())
        .collect();

    // psi[k][s] is the best predecessor of state s at step k; psi[0] is unused.
    let mut psi = vec![vec![0usize; n]; len];

    let mut next_delta = vec![f64::NEG_INFINITY; n];
    for k in 1..len {
        let symbol = observations[k];
        for s in 0..n {
            let mut best = f64::NEG_INFINITY;
            let mut best_prev = 0usize;
            for p in 0..n {
                let v = delta[p] + model.transition_prob(p, s).ln();
                if v > best {
                    best = v;
                    best_prev = p;
                }
            }
            next_delta[s] = best + model.emission_prob(s, symbol).ln();
            psi[k][s] = best_prev;
        }
        std::mem::swap(&mut delta, &mut next_delta);
    }

    let mut best_final = 0usize;
    let mut best_score = f64::NEG_INFINITY;
    for (s, &score) in delta.iter().enumerate() {
        if score > best_score {
            best_score = score;
            best_final = s;
        }
    }

    let mut states = vec![0usize; len];
    states[len - 1] = best_final;
    for k in (0..len - 1).rev() {
        states[k] = psi[k + 1][states[k + 1]];
    }

    debug!(len, log_prob = best_score, "viterbi decode complete");

    Ok(Path::new(states, best_score))
}
