//! Error types for the trellis-hmm crate.

/// Identifies one of the three probability tables of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The initial-state distribution (pi), treated as a 1-row table.
    Initial,
    /// The state-transition matrix (A).
    Transition,
    /// The symbol-emission matrix (B).
    Emission,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::Initial => write!(f, "initial"),
            Table::Transition => write!(f, "transition"),
            Table::Emission => write!(f, "emission"),
        }
    }
}

/// Identifies one of the two label alphabets of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// The hidden-state alphabet.
    State,
    /// The observable-symbol alphabet.
    Symbol,
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::State => write!(f, "state"),
            Alphabet::Symbol => write!(f, "symbol"),
        }
    }
}

/// Error type for all fallible operations in the trellis-hmm crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HmmError {
    /// Returned when a state or symbol alphabet has no entries.
    #[error("the {alphabet} alphabet is empty")]
    EmptyAlphabet {
        /// Which alphabet was empty.
        alphabet: Alphabet,
    },

    /// Returned when the same label appears twice in an alphabet.
    #[error("duplicate label {label:?} in the {alphabet} alphabet")]
    DuplicateLabel {
        /// Which alphabet contains the duplicate.
        alphabet: Alphabet,
        /// The repeated label.
        label: String,
    },

    /// Returned when a probability table has the wrong number of entries.
    #[error("{table} table has {got} entries, expected {expected}")]
    MissingEntry {
        /// Which table is malformed.
        table: Table,
        /// Number of entries the alphabets require.
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },

    /// Returned when a table entry is NaN or infinite.
    #[error("{table} table entry [{row}][{col}] is not finite: {value}")]
    NonFiniteProbability {
        /// Which table contains the value.
        table: Table,
        /// Row index (always 0 for the initial distribution).
        row: usize,
        /// Column index within the row.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a table entry is negative.
    #[error("{table} table entry [{row}][{col}] is negative: {value}")]
    NegativeProbability {
        /// Which table contains the value.
        table: Table,
        /// Row index (always 0 for the initial distribution).
        row: usize,
        /// Column index within the row.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a table row does not sum to 1 within tolerance.
    #[error("{table} table row {row} sums to {sum}, expected ~1.0")]
    RowNotNormalized {
        /// Which table contains the row.
        table: Table,
        /// Row index (always 0 for the initial distribution).
        row: usize,
        /// The actual row sum.
        sum: f64,
    },

    /// Returned when an observation sequence has zero length.
    #[error("observation sequence is empty")]
    EmptySequence,

    /// Returned when an observation symbol index is outside the alphabet.
    #[error("observation[{position}] = {symbol} is out of range ({n_symbols} symbols)")]
    UnknownSymbol {
        /// Position of the offending observation.
        position: usize,
        /// The out-of-range symbol index.
        symbol: usize,
        /// Size of the symbol alphabet.
        n_symbols: usize,
    },

    /// Returned when a state index is outside the alphabet.
    #[error("state[{position}] = {state} is out of range ({n_states} states)")]
    UnknownState {
        /// Position of the offending state.
        position: usize,
        /// The out-of-range state index.
        state: usize,
        /// Size of the state alphabet.
        n_states: usize,
    },

    /// Returned when a label is not found in the relevant alphabet.
    #[error("label {label:?} at position {position} is not in the {alphabet} alphabet")]
    UnknownLabel {
        /// Which alphabet was searched.
        alphabet: Alphabet,
        /// The unresolvable label.
        label: String,
        /// Position of the label in its sequence.
        position: usize,
    },

    /// Returned when paired sequences differ in length.
    #[error("observation sequence has {observations_len} symbols but state sequence has {states_len} labels")]
    LengthMismatch {
        /// Length of the observation sequence.
        observations_len: usize,
        /// Length of the state sequence.
        states_len: usize,
    },

    /// Returned when a training row has no observed counts and smoothing is disabled.
    #[error("no {table} counts observed for state {state:?} and smoothing is disabled")]
    InsufficientData {
        /// Which table could not be estimated.
        table: Table,
        /// Label of the state whose row is empty.
        state: String,
    },

    /// Returned when the training set contains no sequences.
    #[error("training set contains no sequences")]
    EmptyTrainingSet,
}
