use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid sequence at position {position}: {message}")]
    InvalidSequence { position: usize, message: String },

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Invalid parameter: {name} = {value}, {message}")]
    InvalidParameter {
        name: String,
        value: String,
        message: String,
    },

    #[error("Motif set is empty")]
    EmptyMotifSet,

    #[error("Motif {index} has length {found}, expected {expected}")]
    RaggedMotifs {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("k = {k} exceeds the length {length} of sequence {index}")]
    KmerTooLong { k: usize, index: usize, length: usize },

    #[error("Profile has width {expected} but k-mer has length {found}")]
    ProfileWidthMismatch { expected: usize, found: usize },

    #[error("Sequences have different lengths: {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Weights sum to zero, nothing to sample from")]
    ZeroWeightSum,
}

/// Type alias for Result with MotifError
pub type Result<T> = std::result::Result<T, MotifError>;

impl MotifError {
    /// Create a new InvalidSequence error
    pub fn invalid_sequence(position: usize, message: impl Into<String>) -> Self {
        MotifError::InvalidSequence {
            position,
            message: message.into(),
        }
    }

    /// Create a new InvalidParameter error
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        MotifError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}
