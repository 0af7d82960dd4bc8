//! Pattern counting and skew statistics for locating replication origins.

use crate::alphabet::mismatches;
use crate::error::{MotifError, Result};
use indexmap::IndexMap;

/// Start offsets of every window of `text` with length `pattern.len()` that
/// satisfies `matches`. Empty patterns and patterns longer than the text match
/// nowhere.
fn window_starts<'t>(
    text: &'t str,
    pattern: &'t str,
    matches: impl Fn(&[u8]) -> bool + 't,
) -> impl Iterator<Item = usize> + 't {
    let width = pattern.len().max(1);
    let enabled = !pattern.is_empty();
    text.as_bytes()
        .windows(width)
        .enumerate()
        .filter(move |(_, window)| enabled && matches(window))
        .map(|(start, _)| start)
}

/// Number of (possibly overlapping) occurrences of `pattern` in `text`.
pub fn pattern_count(text: &str, pattern: &str) -> usize {
    window_starts(text, pattern, |window| window == pattern.as_bytes()).count()
}

/// Start positions of every (possibly overlapping) occurrence of `pattern`
/// in `genome`.
pub fn pattern_matching(pattern: &str, genome: &str) -> Vec<usize> {
    window_starts(genome, pattern, |window| window == pattern.as_bytes()).collect()
}

/// Start positions of every window of `text` within Hamming distance `d` of
/// `pattern`.
pub fn approximate_pattern_matching(text: &str, pattern: &str, d: usize) -> Vec<usize> {
    window_starts(text, pattern, |window| {
        mismatches(window, pattern.as_bytes()) <= d
    })
    .collect()
}

/// Number of windows of `text` within Hamming distance `d` of `pattern`.
pub fn approximate_pattern_count(pattern: &str, text: &str, d: usize) -> usize {
    window_starts(text, pattern, |window| {
        mismatches(window, pattern.as_bytes()) <= d
    })
    .count()
}

/// Occurrences of `symbol` in the half-genome window starting at each
/// position of the circular `genome`.
///
/// The first window is counted directly; every later value differs from its
/// predecessor by the symbol leaving and the symbol entering the window.
pub fn symbol_array(genome: &str, symbol: u8) -> Vec<usize> {
    let bases = genome.as_bytes();
    let n = bases.len();
    let half = n / 2;
    let at = |i: usize| bases[i % n];

    let mut array = Vec::with_capacity(n);
    if n == 0 {
        return array;
    }
    let mut current = bases[..half].iter().filter(|&&b| b == symbol).count();
    array.push(current);
    for i in 1..n {
        if at(i - 1) == symbol {
            current -= 1;
        }
        if at(i + half - 1) == symbol {
            current += 1;
        }
        array.push(current);
    }
    array
}

/// Running G minus C count; `skew[i]` covers the first `i` bases, so the
/// array is one longer than `genome`.
pub fn skew_array(genome: &str) -> Vec<i64> {
    let mut skew = Vec::with_capacity(genome.len() + 1);
    let mut current = 0i64;
    skew.push(current);
    for base in genome.bytes() {
        match base {
            b'G' => current += 1,
            b'C' => current -= 1,
            _ => {}
        }
        skew.push(current);
    }
    skew
}

/// Every position where the skew reaches its minimum.
pub fn minimum_skew(genome: &str) -> Vec<usize> {
    let skew = skew_array(genome);
    let minimum = skew.iter().copied().min().unwrap_or(0);
    skew.iter()
        .enumerate()
        .filter(|&(_, &value)| value == minimum)
        .map(|(position, _)| position)
        .collect()
}

/// Occurrence count of every k-mer of `text`, in order of first appearance.
///
/// # Errors
/// * `MotifError::InvalidParameter` if `k` is 0
pub fn frequency_map(text: &str, k: usize) -> Result<IndexMap<&str, usize>> {
    if k == 0 {
        return Err(MotifError::invalid_parameter(
            "k",
            k,
            "k-mer length must be at least 1",
        ));
    }
    let mut freq = IndexMap::new();
    if k > text.len() {
        return Ok(freq);
    }
    for start in 0..=text.len() - k {
        let pattern = text.get(start..start + k).ok_or_else(|| {
            MotifError::invalid_sequence(start, "k-mer does not fall on character boundaries")
        })?;
        *freq.entry(pattern).or_insert(0) += 1;
    }
    Ok(freq)
}

/// The most frequent k-mers of `text`, in order of first appearance.
pub fn frequent_words(text: &str, k: usize) -> Result<Vec<&str>> {
    let freq = frequency_map(text, k)?;
    let most = freq.values().copied().max().unwrap_or(0);
    Ok(freq
        .into_iter()
        .filter(|&(_, count)| count == most)
        .map(|(pattern, _)| pattern)
        .collect())
}
