//! Discrete hidden Markov models over finite state and symbol alphabets.
//!
//! This crate answers two questions about a hidden Markov model: given an
//! observation sequence, which hidden-state path most probably produced it
//! (decoding), and given a corpus of labelled sequences, which transition
//! and emission probabilities best explain them (supervised estimation).
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   estimate    │────▶│     Model      │────▶│ viterbi / forward │
//!  │  (count+norm) │     │  (validated)   │     │ / enumerate       │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! A [`Model`] is validated once at construction and immutable afterwards;
//! every inference call borrows it read-only. Decoding and likelihood run
//! in `O(n_states^2 * len)`; the exhaustive enumerator is exponential by
//! design and exists as an exact oracle for small models.
//!
//! # Quick start
//!
//! ```rust
//! use trellis_hmm::{Model, viterbi};
//!
//! // 2-state weather model observed through daily activities.
//! let model = Model::new(
//!     vec!["Rainy".to_string(), "Sunny".to_string()],
//!     vec!["Walk".to_string(), "Shop".to_string(), "Clean".to_string()],
//!     vec![0.6, 0.4],
//!     vec![
//!         0.7, 0.3, // Rainy -> Rainy, Sunny
//!         0.4, 0.6, // Sunny -> Rainy, Sunny
//!     ],
//!     vec![
//!         0.1, 0.4, 0.5, // Rainy: P(Walk), P(Shop), P(Clean)
//!         0.6, 0.3, 0.1, // Sunny
//!     ],
//! )
//! .unwrap();
//!
//! let observations = model.encode_observations(&["Walk", "Shop", "Clean"]).unwrap();
//! let path = viterbi(&model, &observations).unwrap();
//! assert_eq!(path.state_labels(&model), vec!["Sunny", "Rainy", "Rainy"]);
//! assert!((path.prob() - 0.01344).abs() < 1e-6);
//! ```

pub mod config;
pub mod enumerate;
pub mod error;
pub mod estimate;
pub mod likelihood;
pub mod model;
pub mod path;
pub mod sample;
pub mod viterbi;

pub use config::{EstimatorConfig, Smoothing};
pub use enumerate::{best_path_exhaustive, enumerate_paths};
pub use error::{Alphabet, HmmError, Table};
pub use estimate::{AnnotatedSequence, estimate};
pub use likelihood::{likelihood, log_likelihood};
pub use model::Model;
pub use path::{Path, score_path};
pub use sample::{sample_annotated, sample_sequence};
pub use viterbi::viterbi;
