use crate::alphabet::validate_dna;
use crate::error::{MotifError, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads sequences from a FASTA format file and converts them into a Polars DataFrame.
///
/// # Arguments
/// * `filename` - Path to the FASTA file to read
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with two columns:
///   - "label": The sequence identifiers (without '>' prefix)
///   - "sequence": The corresponding DNA sequences in uppercase
///
/// # Errors
/// * Returns `MotifError::InvalidFileFormat` if no sequences are found
/// * Returns `MotifError::DataError` if DataFrame creation fails
/// * Returns `MotifError::Io` for file reading issues
pub fn read_fasta(filename: impl AsRef<Path>) -> Result<DataFrame> {
    let mut records: Vec<(String, String)> = Vec::new();
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    let mut current_header = String::new();
    let mut current_sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(header) = line.strip_prefix('>') {
            if !current_header.is_empty() {
                records.push((current_header, current_sequence.to_uppercase()));
                current_sequence.clear();
            }
            current_header = header.to_string();
        } else if !line.is_empty() {
            current_sequence.push_str(line);
        }
    }

    if !current_header.is_empty() {
        records.push((current_header, current_sequence.to_uppercase()));
    }

    if records.is_empty() {
        return Err(MotifError::InvalidFileFormat("No sequences found".into()));
    }

    let (labels, sequences): (Vec<String>, Vec<String>) = records.into_iter().unzip();
    let df = DataFrame::new(vec![
        Column::new("label".into(), labels),
        Column::new("sequence".into(), sequences),
    ])
    .map_err(|_| MotifError::DataError("Failed to create DataFrame".into()))?;

    Ok(df)
}

/// Pulls the "sequence" column out of a DataFrame, checking every entry is DNA.
///
/// # Errors
/// * Returns `MotifError::DataError` if the column is missing, not a string
///   column, or contains nulls
/// * Returns `MotifError::InvalidSequence` if an entry holds a non-ACGT symbol
pub fn sequences(df: &DataFrame) -> Result<Vec<String>> {
    let column = df
        .column("sequence")
        .map_err(|e| MotifError::DataError(e.to_string()))?
        .str()
        .map_err(|e| MotifError::DataError(e.to_string()))?;

    column
        .into_iter()
        .enumerate()
        .map(|(idx, seq)| {
            let seq =
                seq.ok_or_else(|| MotifError::DataError(format!("Missing sequence in row {}", idx)))?;
            validate_dna(seq)?;
            Ok(seq.to_string())
        })
        .collect()
}

/// Loads a genome stored as plain text, dropping spaces and line breaks.
///
/// # Returns
/// * `Result<String>` - The genome as one uppercase string
///
/// # Errors
/// * Returns `MotifError::Io` if the file cannot be read
/// * Returns `MotifError::InvalidFileFormat` if the file holds no sequence
/// * Returns `MotifError::InvalidSequence` if it holds a non-ACGT symbol
pub fn load_genome_from_txt(filename: impl AsRef<Path>) -> Result<String> {
    let content: String = fs::read_to_string(filename)?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if content.is_empty() {
        return Err(MotifError::InvalidFileFormat("The file is empty".into()));
    }
    validate_dna(&content)?;

    Ok(content)
}
