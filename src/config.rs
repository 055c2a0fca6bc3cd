//! Configuration for supervised estimation.

use crate::error::{Alphabet, HmmError};

/// Policy for probability rows with no observed counts.
///
/// The estimator never picks a policy on its own: a zero-count row either
/// fails loudly ([`Smoothing::None`]) or is filled the way the caller asked
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smoothing {
    /// Fail with [`HmmError::InsufficientData`] on any zero-count row.
    None,
    /// Replace zero-count rows with a uniform distribution; rows with
    /// counts are left untouched.
    Uniform,
    /// Laplace smoothing: add one to every count (including initial-state
    /// counts) before normalizing.
    AddOne,
}

/// Configuration for the supervised estimator.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use trellis_hmm::{EstimatorConfig, Smoothing};
///
/// let config = EstimatorConfig::new()
///     .with_smoothing(Smoothing::Uniform)
///     .with_states(vec!["Rainy".to_string(), "Sunny".to_string()]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    smoothing: Smoothing,
    states: Option<Vec<String>>,
    symbols: Option<Vec<String>>,
}

impl EstimatorConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `smoothing = Smoothing::None` (zero-count rows fail rather
    /// than being guessed at), alphabets inferred from the training data in
    /// first-appearance order.
    pub fn new() -> Self {
        Self {
            smoothing: Smoothing::None,
            states: None,
            symbols: None,
        }
    }

    /// Sets the smoothing policy for zero-count rows.
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Declares the state alphabet, fixing both membership and index order.
    ///
    /// Training labels outside this list become errors instead of growing
    /// the alphabet.
    pub fn with_states(mut self, states: Vec<String>) -> Self {
        self.states = Some(states);
        self
    }

    /// Declares the symbol alphabet, fixing both membership and index order.
    pub fn with_symbols(mut self, symbols: Vec<String>) -> Self {
        self.symbols = Some(symbols);
        self
    }

    // --- Accessors ---

    /// Returns the smoothing policy.
    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Returns the declared state alphabet, if any.
    pub fn states(&self) -> Option<&[String]> {
        self.states.as_deref()
    }

    /// Returns the declared symbol alphabet, if any.
    pub fn symbols(&self) -> Option<&[String]> {
        self.symbols.as_deref()
    }

    /// Validates this configuration.
    ///
    /// Declared alphabets must be non-empty and duplicate-free.
    pub fn validate(&self) -> Result<(), HmmError> {
        Self::validate_alphabet(self.states.as_deref(), Alphabet::State)?;
        Self::validate_alphabet(self.symbols.as_deref(), Alphabet::Symbol)?;
        Ok(())
    }

    fn validate_alphabet(labels: Option<&[String]>, alphabet: Alphabet) -> Result<(), HmmError> {
        let Some(labels) = labels else {
            return Ok(());
        };
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
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
