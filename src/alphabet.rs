//! The fixed DNA alphabet and the sequence primitives built on it.

use crate::error::{MotifError, Result};
use phf::phf_map;

/// Nucleotide symbols in matrix row order.
///
/// This is also the consensus tie-break order: when two symbols share the
/// highest count at a position, the one listed first wins.
pub const NUCLEOTIDES: [u8; 4] = *b"ACGT";

/// Number of symbols in [`NUCLEOTIDES`].
pub const ALPHABET_SIZE: usize = NUCLEOTIDES.len();

static COMPLEMENT: phf::Map<char, char> = phf_map! {
    'A' => 'T',
    'T' => 'A',
    'C' => 'G',
    'G' => 'C',
};

/// Row index of a nucleotide in [`NUCLEOTIDES`], or `None` for any other byte.
#[inline]
pub fn symbol_index(symbol: u8) -> Option<usize> {
    match symbol {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Checks that every symbol of `sequence` is one of A, C, G or T.
///
/// # Errors
/// * Returns `MotifError::InvalidSequence` carrying the first offending position
pub fn validate_dna(sequence: &str) -> Result<()> {
    match sequence
        .bytes()
        .position(|b| symbol_index(b).is_none())
    {
        Some(position) => Err(MotifError::invalid_sequence(
            position,
            format!(
                "unexpected symbol '{}'",
                sequence[position..].chars().next().unwrap_or('?')
            ),
        )),
        None => Ok(()),
    }
}

/// Number of positions at which `p` and `q` differ.
///
/// # Errors
/// * Returns `MotifError::LengthMismatch` if the two strings differ in length
pub fn hamming_distance(p: &str, q: &str) -> Result<usize> {
    if p.len() != q.len() {
        return Err(MotifError::LengthMismatch {
            left: p.len(),
            right: q.len(),
        });
    }
    Ok(mismatches(p.as_bytes(), q.as_bytes()))
}

/// Mismatch count for byte slices already known to be the same length.
#[inline]
pub(crate) fn mismatches(p: &[u8], q: &[u8]) -> usize {
    p.iter().zip(q).filter(|(a, b)| a != b).count()
}

pub fn reverse(pattern: &str) -> String {
    pattern.chars().rev().collect()
}

/// Complements each base of `pattern` without reversing it.
///
/// # Errors
/// * Returns `MotifError::InvalidSequence` if a symbol has no complement
pub fn complement(pattern: &str) -> Result<String> {
    pattern
        .chars()
        .enumerate()
        .map(|(position, c)| {
            COMPLEMENT.get(&c).copied().ok_or_else(|| {
                MotifError::invalid_sequence(position, format!("no complement for '{}'", c))
            })
        })
        .collect()
}

/// Generates the reverse complement of a DNA sequence.
///
/// # Arguments
/// * `pattern` - Input DNA sequence string
///
/// # Returns
/// * `Result<String>` - The reverse complement sequence where:
///   - A ↔ T
///   - C ↔ G
///
/// # Errors
/// * Returns `MotifError::InvalidSequence` if the input contains characters
///   other than A, T, C, or G
pub fn reverse_complement(pattern: &str) -> Result<String> {
    complement(&reverse(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_index_follows_row_order() {
        for (row, &symbol) in NUCLEOTIDES.iter().enumerate() {
            assert_eq!(symbol_index(symbol), Some(row));
        }
        assert_eq!(symbol_index(b'N'), None);
        assert_eq!(symbol_index(b'a'), None);
    }

    #[test]
    fn test_validate_dna_reports_first_bad_position() {
        assert!(validate_dna("ACGTTGCA").is_ok());
        assert!(validate_dna("").is_ok());
        match validate_dna("ACGNTX") {
            Err(MotifError::InvalidSequence { position, .. }) => assert_eq!(position, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(
            hamming_distance("GGGCCGTTGGT", "GGACCGTTGAC").unwrap(),
            3
        );
        assert_eq!(hamming_distance("ACGT", "ACGT").unwrap(), 0);
        assert!(matches!(
            hamming_distance("ACG", "ACGT"),
            Err(MotifError::LengthMismatch { left: 3, right: 4 })
        ));
    }
}
