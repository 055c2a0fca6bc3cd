//! Validated hidden Markov model definition.
//!
//! A [`Model`] bundles the state and symbol alphabets with the three
//! probability tables (initial distribution, transition matrix, emission
//! matrix). Every table row is checked at construction; once built, a model
//! is immutable and can be shared read-only across any number of inference
//! calls.

use crate::error::{Alphabet, HmmError, Table};

/// Tolerance for probability row sums.
const TOLERANCE: f64 = 1e-6;

/// A discrete hidden Markov model.
///
/// States and symbols are identified by their index into the label vectors
/// supplied at construction. Tables are stored row-major: the transition
/// matrix holds `n_states * n_states` entries, the emission matrix
/// `n_states * n_symbols`.
#[derive(Debug, Clone)]
pub struct Model {
    states: Vec<String>,
    symbols: Vec<String>,
    /// Initial distribution pi, length `n_states`.
    initial: Vec<f64>,
    /// Transition matrix A, row-major `n_states * n_states`.
    transition: Vec<f64>,
    /// Emission matrix B, row-major `n_states * n_symbols`.
    emission: Vec<f64>,
}

/// Checks that a label list is non-empty and duplicate-free.
fn validate_labels(labels: &[String], alphabet: Alphabet) -> Result<(), HmmError> {
    if labels.is_empty() {
        return Err(HmmError::EmptyAlphabet { alphabet });
    }
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) {
            return Err(HmmError::DuplicateLabel {
                alphabet,
                label: label.clone(),
            });
        }
    }
    Ok(())
}

/// Checks one table: entries finite and non-negative, each row summing to ~1.
fn validate_table(entries: &[f64], row_len: usize, table: Table) -> Result<(), HmmError> {
    for (row, chunk) in entries.chunks(row_len).enumerate() {
        let mut sum = 0.0;
        for (col, &p) in chunk.iter().enumerate() {
            if !p.is_finite() {
                return Err(HmmError::NonFiniteProbability {
                    table,
                    row,
                    col,
                    value: p,
                });
            }
            if p < 0.0 {
                return Err(HmmError::NegativeProbability {
                    table,
                    row,
                    col,
                    value: p,
                });
            }
            sum += p;
        }
        if (sum - 1.0).abs() > TOLERANCE {
            return Err(HmmError::RowNotNormalized { table, row, sum });
        }
    }
    Ok(())
}

impl Model {
    /// Creates a model after validating the alphabets and probability tables.
    ///
    /// # Arguments
    ///
    /// * `states` - Hidden-state labels; their order fixes the state indices.
    /// * `symbols` - Observable-symbol labels; their order fixes the symbol indices.
    /// * `initial` - Initial distribution pi, length `states.len()`.
    /// * `transition` - Row-major transition matrix, `states.len()^2` entries.
    /// * `emission` - Row-major emission matrix, `states.len() * symbols.len()` entries.
    ///
    /// # Errors
    ///
    /// Returns [`HmmError`] if an alphabet is empty or contains duplicate
    /// labels, if a table has the wrong number of entries, or if any table
    /// row is not a probability distribution (non-negative, finite, summing
    /// to 1 within 1e-6).
    pub fn new(
        states: Vec<String>,
        symbols: Vec<String>,
        initial: Vec<f64>,
        transition: Vec<f64>,
        emission: Vec<f64>,
    ) -> Result<Self, HmmError> {
        validate_labels(&states, Alphabet::State)?;
        validate_labels(&symbols, Alphabet::Symbol)?;

        let n = states.len();
        let m = symbols.len();

        if initial.len() != n {
            return Err(HmmError::MissingEntry {
                table: Table::Initial,
                expected: n,
                got: initial.len(),
            });
        }
        if transition.len() != n * n {
            return Err(HmmError::MissingEntry {
                table: Table::Transition,
                expected: n * n,
                got: transition.len(),
            });
        }
        if emission.len() != n * m {
            return Err(HmmError::MissingEntry {
                table: Table::Emission,
                expected: n * m,
                got: emission.len(),
            });
        }

        validate_table(&initial, n, Table::Initial)?;
        validate_table(&transition, n, Table::Transition)?;
        validate_table(&emission, m, Table::Emission)?;

        Ok(Self {
            states,
            symbols,
            initial,
            transition,
            emission,
        })
    }

    /// Number of hidden states.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Number of observable symbols.
    pub fn n_symbols(&self) -> usize {
        self.symbols.len()
    }

    /// State labels in index order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Symbol labels in index order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Label of the state with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range.
    pub fn state_name(&self, state: usize) -> &str {
        &self.states[state]
    }

    /// Label of the symbol with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is out of range.
    pub fn symbol_name(&self, symbol: usize) -> &str {
        &self.symbols[symbol]
    }

    /// Index of a state label, if present.
    pub fn state_index(&self, label: &str) -> Option<usize> {
        self.states.iter().position(|s| s == label)
    }

    /// Index of a symbol label, if present.
    pub fn symbol_index(&self, label: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == label)
    }

    /// Initial probability of a state.
    pub fn initial(&self, state: usize) -> f64 {
        self.initial[state]
    }

    /// Probability of transitioning from one state to another.
    pub fn transition_prob(&self, from: usize, to: usize) -> f64 {
        self.transition[from * self.n_states() + to]
    }

    /// Probability of a state emitting a symbol.
    pub fn emission_prob(&self, state: usize, symbol: usize) -> f64 {
        self.emission[state * self.n_symbols() + symbol]
    }

    /// Transition probabilities out of a state.
    pub fn transition_row(&self, from: usize) -> &[f64] {
        let n = self.n_states();
        &self.transition[from * n..(from + 1) * n]
    }

    /// Emission probabilities of a state.
    pub fn emission_row(&self, state: usize) -> &[f64] {
        let m = self.n_symbols();
        &self.emission[state * m..(state + 1) * m]
    }

    /// The full initial distribution.
    pub fn initial_distribution(&self) -> &[f64] {
        &self.initial
    }

    /// Maps symbol labels to their indices.
    ///
    /// # Errors
    ///
    /// Returns [`HmmError::UnknownLabel`] for the first label not present in
    /// the symbol alphabet.
    pub fn encode_observations(&self, labels: &[&str]) -> Result<Vec<usize>, HmmError> {
        labels
            .iter()
            .enumerate()
            .map(|(position, &label)| {
                self.symbol_index(label).ok_or_else(|| HmmError::UnknownLabel {
                    alphabet: Alphabet::Symbol,
                    label: label.to_string(),
                    position,
                })
            })
            .collect()
    }

    /// Checks an observation sequence: non-empty, all indices in range.
    pub(crate) fn validate_observations(&self, observations: &[usize]) -> Result<(), HmmError> {
        if observations.is_empty() {
            return Err(HmmError::EmptySequence);
        }
        for (position, &symbol) in observations.iter().enumerate() {
            if symbol >= self.n_symbols() {
                return Err(HmmError::UnknownSymbol {
                    position,
                    symbol,
                    n_symbols: self.n_symbols(),
                });
            }
        }
        Ok(())
    }
}
