use indexmap::IndexMap;
use polars::prelude::*;

/// Represents a Position Weight Matrix (PWM)
/// Stored as a DataFrame with columns A, C, G, T and one row per position
pub type PWM = DataFrame;

/// Candidate-to-weight mapping that remembers insertion order.
/// Sampling walks the candidates in that order.
pub type Distribution<K> = IndexMap<K, f64>;
