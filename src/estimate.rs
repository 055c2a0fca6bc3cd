//! Supervised parameter estimation from labelled sequences.
//!
//! Consumes (observation, state) sequence pairs with known labels and
//! produces a validated [`Model`] by frequency counting: one pass
//! accumulates initial-state, transition, and emission counts, then each
//! row is normalized under the configured [`Smoothing`] policy.

use tracing::debug;

use crate::config::{EstimatorConfig, Smoothing};
use crate::error::{Alphabet, HmmError, Table};
use crate::model::Model;

/// An observation sequence paired with its known state labels.
///
/// Both sequences have the same length L >= 1; position `k` pairs the
/// observed symbol with the hidden state that emitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSequence {
    observations: Vec<String>,
    states: Vec<String>,
}

impl AnnotatedSequence {
    /// Creates an annotated sequence from paired label vectors.
    ///
    /// # Errors
    ///
    /// Returns [`HmmError::EmptySequence`] if the observations are empty and
    /// [`HmmError::LengthMismatch`] if the two vectors differ in length.
    pub fn new(observations: Vec<String>, states: Vec<String>) -> Result<Self, HmmError> {
        if observations.is_empty() {
            return Err(HmmError::EmptySequence);
        }
        if observations.len() != states.len() {
            return Err(HmmError::LengthMismatch {
                observations_len: observations.len(),
                states_len: states.len(),
            });
        }
        Ok(Self {
            observations,
            states,
        })
    }

    /// Creates an annotated sequence from two strings, one label per char.
    ///
    /// Convenient for single-character alphabets such as nucleotide data:
    /// `AnnotatedSequence::from_chars("CTTCA", "EEEE5")`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AnnotatedSequence::new`].
    pub fn from_chars(observations: &str, states: &str) -> Result<Self, HmmError> {
        Self::new(
            observations.chars().map(String::from).collect(),
            states.chars().map(String::from).collect(),
        )
    }

    /// Observation labels in time order.
    pub fn observations(&self) -> &[String] {
        &self.observations
    }

    /// State labels in time order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false; the constructor rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// Collects the distinct labels of a training corpus in first-appearance order.
fn infer_alphabet<'a, I>(sequences: I) -> Vec<String>
where
    I: Iterator<Item = &'a [String]>,
{
    let mut labels: Vec<String> = Vec::new();
    for sequence in sequences {
        for label in sequence {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
    }
    labels
}

/// Maps a label sequence to alphabet indices.
fn encode(
    sequence: &[String],
    alphabet_labels: &[String],
    alphabet: Alphabet,
) -> Result<Vec<usize>, HmmError> {
    sequence
        .iter()
        .enumerate()
        .map(|(position, label)| {
            alphabet_labels
                .iter()
                .position(|l| l == label)
                .ok_or_else(|| HmmError::UnknownLabel {
                    alphabet,
                    label: label.clone(),
                    position,
                })
        })
        .collect()
}

/// Normalizes one count row into a probability row.
fn normalize_row(
    counts: &[f64],
    smoothing: Smoothing,
    table: Table,
    state: &str,
) -> Result<Vec<f64>, HmmError> {
    let total: f64 = counts.iter().sum();
    if total == 0.0 {
        return match smoothing {
            Smoothing::Uniform => Ok(vec![1.0 / counts.len() as f64; counts.len()]),
            // AddOne incremented every count up front, so a zero row here
            // means smoothing was declined.
            Smoothing::None | Smoothing::AddOne => Err(HmmError::InsufficientData {
                table,
                state: state.to_string(),
            }),
        };
    }
    Ok(counts.iter().map(|&c| c / total).collect())
}

/// Estimates a model from annotated sequences by frequency counting.
///
/// For each sequence, the first state label increments an initial-state
/// counter, every consecutive label pair increments a transition counter,
/// and every (state, symbol) pair increments an emission counter. Counters
/// are then normalized per row:
/// `pi(s) = count(initial = s) / n_sequences`,
/// `A(s, t) = count(s -> t) / sum_t' count(s -> t')`,
/// `B(s, o) = count(s emits o) / sum_o' count(s emits o')`.
///
/// Alphabets come from the config when declared (fixing index order), and
/// are otherwise inferred from the corpus in first-appearance order, which
/// makes estimation from identical input reproducible bit for bit.
///
/// The resulting tables always pass through [`Model::new`], so the returned
/// model satisfies the same invariants as a hand-built one.
///
/// # Errors
///
/// Returns [`HmmError::EmptyTrainingSet`] for an empty corpus,
/// [`HmmError::UnknownLabel`] for labels outside a declared alphabet, and
/// [`HmmError::InsufficientData`] for a zero-count row when smoothing is
/// [`Smoothing::None`].
pub fn estimate(
    sequences: &[AnnotatedSequence],
    config: &EstimatorConfig,
) -> Result<Model, HmmError> {
    config.validate()?;
    if sequences.is_empty() {
        return Err(HmmError::EmptyTrainingSet);
    }

    let states: Vec<String> = match config.states() {
        Some(declared) => declared.to_vec(),
        None => infer_alphabet(sequences.iter().map(|s| s.states())),
    };
    let symbols: Vec<String> = match config.symbols() {
        Some(declared) => declared.to_vec(),
        None => infer_alphabet(sequences.iter().map(|s| s.observations())),
    };

    let n = states.len();
    let m = symbols.len();

    let mut initial_counts = vec![0.0_f64; n];
    let mut transition_counts = vec![0.0_f64; n * n];
    let mut emission_counts = vec![0.0_f64; n * m];

    for sequence in sequences {
        let state_idx = encode(sequence.states(), &states, Alphabet::State)?;
        let symbol_idx = encode(sequence.observations(), &symbols, Alphabet::Symbol)?;

        initial_counts[state_idx[0]] += 1.0;
        for k in 1..state_idx.len() {
            transition_counts[state_idx[k - 1] * n + state_idx[k]] += 1.0;
        }
        for (&s, &o) in state_idx.iter().zip(&symbol_idx) {
            emission_counts[s * m + o] += 1.0;
        }
    }

    if config.smoothing() == Smoothing::AddOne {
        for c in initial_counts
            .iter_mut()
            .chain(&mut transition_counts)
            .chain(&mut emission_counts)
        {
            *c += 1.0;
        }
    }

    // The initial row always has counts: one per sequence, and the corpus
    // is non-empty.
    let total: f64 = initial_counts.iter().sum();
    let initial: Vec<f64> = initial_counts.iter().map(|&c| c / total).collect();

    let mut transition = Vec::with_capacity(n * n);
    let mut emission = Vec::with_capacity(n * m);
    for (s, state) in states.iter().enumerate() {
        transition.extend(normalize_row(
            &transition_counts[s * n..(s + 1) * n],
            config.smoothing(),
            Table::Transition,
            state,
        )?);
        emission.extend(normalize_row(
            &emission_counts[s * m..(s + 1) * m],
            config.smoothing(),
            Table::Emission,
            state,
        )?);
    }

    debug!(
        n_sequences = sequences.len(),
        n_states = n,
        n_symbols = m,
        "estimated model from annotated corpus"
    );

    Model::new(states, symbols, initial, transition, emission)
}
