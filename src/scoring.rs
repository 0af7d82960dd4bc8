use crate::alphabet::mismatches;
use crate::error::Result;
use crate::profile::count;

/// Majority symbol at each position of `motifs`.
///
/// Ties are broken by `NUCLEOTIDES` order, so on an exact tie the earlier of
/// A, C, G, T is kept.
pub fn consensus<S: AsRef<str>>(motifs: &[S]) -> Result<String> {
    Ok(count(motifs)?.consensus())
}

/// Total mismatches between every motif and the consensus of the set.
///
/// Zero means every motif equals the consensus; lower is better.
pub fn score<S: AsRef<str>>(motifs: &[S]) -> Result<usize> {
    let consensus = consensus(motifs)?;
    Ok(motifs
        .iter()
        .map(|motif| mismatches(motif.as_ref().as_bytes(), consensus.as_bytes()))
        .sum())
}
