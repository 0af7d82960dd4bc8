//! Count and profile matrices built from a motif set.
//!
//! Both matrices are stored as `(4, k)` arrays whose rows follow
//! [`NUCLEOTIDES`] order and whose columns are motif positions.

use crate::alphabet::{symbol_index, validate_dna, ALPHABET_SIZE, NUCLEOTIDES};
use crate::error::{MotifError, Result};
use crate::types::PWM;
use ndarray::{Array2, ArrayView1};
use polars::prelude::*;

/// Value every cell of a smoothed count matrix starts from.
pub const PSEUDOCOUNT: usize = 1;

const COLUMN_NAMES: [&str; ALPHABET_SIZE] = ["A", "C", "G", "T"];
const SUM_TOLERANCE: f64 = 1e-6;

/// How a [`CountMatrix`] is initialised before tallying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountMode {
    /// Every cell starts at 0, so unseen symbols get probability 0.
    Plain,
    /// Laplace smoothing: every cell starts at [`PSEUDOCOUNT`].
    #[default]
    Pseudocount,
}

impl CountMode {
    fn initial(self) -> usize {
        match self {
            CountMode::Plain => 0,
            CountMode::Pseudocount => PSEUDOCOUNT,
        }
    }
}

/// Checks that a motif set is non-empty, uniform in length and pure DNA.
/// Returns the common motif width.
pub(crate) fn motif_width<S: AsRef<str>>(motifs: &[S]) -> Result<usize> {
    let first = motifs.first().ok_or(MotifError::EmptyMotifSet)?.as_ref();
    let width = first.len();
    if width == 0 {
        return Err(MotifError::invalid_parameter(
            "k",
            0,
            "motifs must be at least one symbol long",
        ));
    }
    for (index, motif) in motifs.iter().enumerate() {
        let motif = motif.as_ref();
        if motif.len() != width {
            return Err(MotifError::RaggedMotifs {
                index,
                expected: width,
                found: motif.len(),
            });
        }
        validate_dna(motif)?;
    }
    Ok(width)
}

/// Per-position nucleotide counts across a motif set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    counts: Array2<usize>,
    motifs: usize,
    mode: CountMode,
}

impl CountMatrix {
    /// Tallies `motifs` column by column.
    ///
    /// # Errors
    /// * `MotifError::EmptyMotifSet` if `motifs` is empty
    /// * `MotifError::RaggedMotifs` if the motifs differ in length
    /// * `MotifError::InvalidSequence` if a motif contains a non-ACGT symbol
    pub fn new<S: AsRef<str>>(motifs: &[S], mode: CountMode) -> Result<Self> {
        let width = motif_width(motifs)?;
        let mut counts = Array2::from_elem((ALPHABET_SIZE, width), mode.initial());
        for motif in motifs {
            for (position, symbol) in motif.as_ref().bytes().enumerate() {
                if let Some(row) = symbol_index(symbol) {
                    counts[[row, position]] += 1;
                }
            }
        }
        Ok(Self {
            counts,
            motifs: motifs.len(),
            mode,
        })
    }

    /// Motif width `k`.
    pub fn width(&self) -> usize {
        self.counts.ncols()
    }

    /// Number of motifs `t` the matrix was built from.
    pub fn motif_count(&self) -> usize {
        self.motifs
    }

    pub fn mode(&self) -> CountMode {
        self.mode
    }

    /// Sum every column adds up to: `t`, or `t + 4` with pseudocounts.
    pub fn column_total(&self) -> usize {
        self.motifs + ALPHABET_SIZE * self.mode.initial()
    }

    pub fn get(&self, symbol: u8, position: usize) -> Option<usize> {
        self.counts.get([symbol_index(symbol)?, position]).copied()
    }

    /// Counts of A, C, G and T at `position`.
    pub fn column(&self, position: usize) -> ArrayView1<'_, usize> {
        self.counts.column(position)
    }

    pub fn as_array(&self) -> &Array2<usize> {
        &self.counts
    }

    /// Majority symbol per position, ties going to the symbol earliest in
    /// [`NUCLEOTIDES`].
    pub fn consensus(&self) -> String {
        self.counts
            .columns()
            .into_iter()
            .map(|column| {
                let mut best = 0;
                let mut symbol = NUCLEOTIDES[0];
                for (row, &count) in column.iter().enumerate() {
                    if count > best {
                        best = count;
                        symbol = NUCLEOTIDES[row];
                    }
                }
                symbol as char
            })
            .collect()
    }

    /// Divides every cell by [`CountMatrix::column_total`].
    pub fn profile(&self) -> ProfileMatrix {
        let total = self.column_total() as f64;
        ProfileMatrix {
            probabilities: self.counts.mapv(|count| count as f64 / total),
        }
    }
}

/// Position-specific symbol probabilities; every column sums to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMatrix {
    probabilities: Array2<f64>,
}

impl ProfileMatrix {
    /// Wraps a `(4, k)` probability array.
    ///
    /// # Errors
    /// * `MotifError::InvalidParameter` if the array does not have four rows,
    ///   has no columns, holds a value outside `[0, 1]`, or has a column not
    ///   summing to 1
    pub fn from_array(probabilities: Array2<f64>) -> Result<Self> {
        if probabilities.nrows() != ALPHABET_SIZE {
            return Err(MotifError::invalid_parameter(
                "rows",
                probabilities.nrows(),
                "a DNA profile has exactly four rows",
            ));
        }
        if probabilities.ncols() == 0 {
            return Err(MotifError::invalid_parameter(
                "width",
                0,
                "a profile needs at least one position",
            ));
        }
        if let Some(value) = probabilities
            .iter()
            .find(|p| !(0.0..=1.0).contains(*p))
        {
            return Err(MotifError::invalid_parameter(
                "probability",
                value,
                "must lie in [0, 1]",
            ));
        }
        for (position, column) in probabilities.columns().into_iter().enumerate() {
            let sum = column.sum();
            if (sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(MotifError::invalid_parameter(
                    format!("column {}", position),
                    sum,
                    "probabilities must sum to 1",
                ));
            }
        }
        Ok(Self { probabilities })
    }

    /// Reads a PWM frame with one row per position and columns A, C, G, T.
    ///
    /// # Errors
    /// * `MotifError::DataError` if a column is missing, is not `f64`, or has nulls
    /// * Any error from [`ProfileMatrix::from_array`]
    pub fn from_frame(pwm: &PWM) -> Result<Self> {
        let mut probabilities = Array2::zeros((ALPHABET_SIZE, pwm.height()));
        for (row, name) in COLUMN_NAMES.iter().enumerate() {
            let column = pwm
                .column(name)
                .map_err(|e| MotifError::DataError(e.to_string()))?
                .f64()
                .map_err(|e| MotifError::DataError(e.to_string()))?;
            for (position, value) in column.into_iter().enumerate() {
                probabilities[[row, position]] = value.ok_or_else(|| {
                    MotifError::DataError(format!("missing {} value at position {}", name, position))
                })?;
            }
        }
        Self::from_array(probabilities)
    }

    /// Converts to a PWM frame with one row per position and columns A, C, G, T.
    pub fn to_frame(&self) -> Result<PWM> {
        let columns = COLUMN_NAMES
            .iter()
            .zip(self.probabilities.rows())
            .map(|(name, row)| Column::new((*name).into(), row.to_vec()))
            .collect::<Vec<_>>();
        DataFrame::new(columns).map_err(|e| MotifError::DataError(e.to_string()))
    }

    pub fn width(&self) -> usize {
        self.probabilities.ncols()
    }

    pub fn get(&self, symbol: u8, position: usize) -> Option<f64> {
        self.probabilities
            .get([symbol_index(symbol)?, position])
            .copied()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.probabilities
    }

    /// Product of per-position probabilities for a k-mer already known to be
    /// valid DNA of the profile's width.
    pub(crate) fn likelihood(&self, kmer: &[u8]) -> f64 {
        kmer.iter()
            .enumerate()
            .map(|(position, &symbol)| {
                symbol_index(symbol).map_or(0.0, |row| self.probabilities[[row, position]])
            })
            .product()
    }
}

/// Plain count matrix of `motifs`.
pub fn count<S: AsRef<str>>(motifs: &[S]) -> Result<CountMatrix> {
    CountMatrix::new(motifs, CountMode::Plain)
}

/// Count matrix of `motifs` with every cell starting at [`PSEUDOCOUNT`].
pub fn count_with_pseudocounts<S: AsRef<str>>(motifs: &[S]) -> Result<CountMatrix> {
    CountMatrix::new(motifs, CountMode::Pseudocount)
}

/// Plain counts divided by `t`.
pub fn profile<S: AsRef<str>>(motifs: &[S]) -> Result<ProfileMatrix> {
    Ok(count(motifs)?.profile())
}

/// Pseudocounts divided by `t + 4`.
pub fn profile_with_pseudocounts<S: AsRef<str>>(motifs: &[S]) -> Result<ProfileMatrix> {
    Ok(count_with_pseudocounts(motifs)?.profile())
}
