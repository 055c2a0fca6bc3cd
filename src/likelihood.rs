//! Sequence likelihood via the forward algorithm.
//!
//! Computes `P(observations | model)` summed over every possible hidden
//! path in `O(n_states^2 * len)` time. All accumulation happens in
//! natural-log space with log-sum-exp, so long sequences do not underflow.

use crate::error::HmmError;
use crate::model::Model;

/// Numerically stable `ln(sum(exp(x)))` over a slice.
///
/// Returns `-inf` for an empty slice or when every term is `-inf`.
fn log_sum_exp(terms: &[f64]) -> f64 {
    let max = terms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    let sum: f64 = terms.iter().map(|&x| (x - max).exp()).sum();
    max + sum.ln()
}

/// Log-probability of the observation sequence under the model.
///
/// Forward recursion:
/// `alpha_1(s) = pi(s) * B(s, o_1)`,
/// `alpha_k(s) = B(s, o_k) * sum_p alpha_{k-1}(p) * A(p, s)`,
/// `P(O | model) = sum_s alpha_L(s)`,
/// carried out on logarithms. Only two trellis columns are live at a time.
///
/// # Errors
///
/// Returns [`HmmError::EmptySequence`] for a zero-length sequence and
/// [`HmmError::UnknownSymbol`] for an out-of-range symbol index.
pub fn log_likelihood(model: &Model, observations: &[usize]) -> Result<f64, HmmError> {
    model.validate_observations(observations)?;

    let n = model.n_states();

    let mut alpha: Vec<f64> = (0..n)
        .map(|s| model.initial(s).ln() + model.emission_prob(s, observations[0]).ln())
        .collect();

    let mut next = vec![f64::NEG_INFINITY; n];
    let mut terms = vec![f64::NEG_INFINITY; n];
    for &symbol in &observations[1..] {
        for s in 0..n {
            for (p, term) in terms.iter_mut().enumerate() {
                *term = alpha[p] + model.transition_prob(p, s).ln();
            }
            next[s] = log_sum_exp(&terms) + model.emission_prob(s, symbol).ln();
        }
        std::mem::swap(&mut alpha, &mut next);
    }

    Ok(log_sum_exp(&alpha))
}

/// Linear-space probability of the observation sequence under the model.
///
/// Convenience wrapper around [`log_likelihood`]; underflows to 0.0 for
/// sequences whose probability is below `f64` range.
pub fn likelihood(model: &Model, observations: &[usize]) -> Result<f64, HmmError> {
    log_likelihood(model, observations).map(f64::exp)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn log_sum_exp_basics() {
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
        assert_eq!(
            log_sum_exp(&[f64::NEG_INFINITY, f64::NEG_INFINITY]),
            f64::NEG_INFINITY
        );
        assert!((log_sum_exp(&[0.0, 0.0]) - 2.0_f64.ln()).abs() < 1e-12);
        // Stays finite far below linear-space range.
        let v = log_sum_exp(&[-1000.0, -1001.0]);
        assert!(v.is_finite());
        assert!(v >= -1000.0 && v < -999.0);
    }

    #[test]
    fn single_step_likelihood() {
        let model = weather_model();
        // P([Walk]) = pi(Rainy) * B(Rainy, Walk) + pi(Sunny) * B(Sunny, Walk)
        //           = 0.6 * 0.1 + 0.4 * 0.6 = 0.30
        let p = likelihood(&model, &[0]).unwrap();
        assert!((p - 0.30).abs() < 1e-12, "p = {p}");
    }

    #[test]
    fn two_step_likelihood_hand_computed() {
        let model = weather_model();
        // Sum over the four length-2 paths of pi * B * A * B for [Walk, Shop].
        let mut expected = 0.0;
        for s0 in 0..2 {
            for s1 in 0..2 {
                expected += model.initial(s0)
                    * model.emission_prob(s0, 0)
                    * model.transition_prob(s0, s1)
                    * model.emission_prob(s1, 1);
            }
        }
        let p = likelihood(&model, &[0, 1]).unwrap();
        assert!((p - expected).abs() < 1e-12, "p = {p}, expected {expected}");
    }

    #[test]
    fn long_sequence_stays_finite_in_log_space() {
        let model = weather_model();
        let observations: Vec<usize> = (0..2000).map(|i| i % 3).collect();
        let ll = log_likelihood(&model, &observations).unwrap();
        assert!(ll.is_finite());
        assert!(ll < 0.0);
    }

    #[test]
    fn empty_sequence_is_an_error() {
        let model = weather_model();
        assert!(matches!(
            log_likelihood(&model, &[]),
            Err(HmmError::EmptySequence)
        ));
        assert!(matches!(likelihood(&model, &[]), Err(HmmError::EmptySequence)));
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let model = weather_model();
        assert!(matches!(
            log_likelihood(&model, &[0, 7]),
            Err(HmmError::UnknownSymbol {
                position: 1,
                symbol: 7,
                ..
            })
        ));
    }
}
