//! Likelihood of k-mers under a profile and weighted sampling.

use crate::alphabet::validate_dna;
use crate::error::{MotifError, Result};
use crate::profile::ProfileMatrix;
use crate::types::Distribution;
use rand::Rng;
use std::hash::Hash;

/// Probability of `text` under `profile`: the product over positions `i` of
/// `profile[text[i]][i]`.
///
/// No smoothing is applied, so a single zero cell makes the result 0.
///
/// # Errors
/// * `MotifError::ProfileWidthMismatch` if `text` is not as long as the profile is wide
/// * `MotifError::InvalidSequence` if `text` contains a non-ACGT symbol
pub fn pr(text: &str, profile: &ProfileMatrix) -> Result<f64> {
    if text.len() != profile.width() {
        return Err(MotifError::ProfileWidthMismatch {
            expected: profile.width(),
            found: text.len(),
        });
    }
    validate_dna(text)?;
    Ok(profile.likelihood(text.as_bytes()))
}

fn check_window(text: &str, k: usize, profile: &ProfileMatrix) -> Result<()> {
    if k != profile.width() {
        return Err(MotifError::ProfileWidthMismatch {
            expected: profile.width(),
            found: k,
        });
    }
    if k > text.len() {
        return Err(MotifError::KmerTooLong {
            k,
            index: 0,
            length: text.len(),
        });
    }
    validate_dna(text)
}

/// The k-mer of `text` with the highest probability under `profile`.
///
/// The running maximum only moves on a strict improvement and starts below
/// any probability, so the leftmost window wins ties and a window is returned
/// even when every window has probability 0.
///
/// # Errors
/// * `MotifError::ProfileWidthMismatch` if `k` differs from the profile width
/// * `MotifError::KmerTooLong` if `k` exceeds the length of `text`
/// * `MotifError::InvalidSequence` if `text` contains a non-ACGT symbol
pub fn profile_most_probable_kmer<'a>(
    text: &'a str,
    k: usize,
    profile: &ProfileMatrix,
) -> Result<&'a str> {
    check_window(text, k, profile)?;
    Ok(most_probable_window(text, profile))
}

/// Unchecked core of [`profile_most_probable_kmer`]; `text` must be valid DNA
/// at least as long as the profile is wide.
pub(crate) fn most_probable_window<'a>(text: &'a str, profile: &ProfileMatrix) -> &'a str {
    let k = profile.width();
    let mut best_start = 0;
    let mut best_value = -1.0;
    for (start, window) in text.as_bytes().windows(k).enumerate() {
        let value = profile.likelihood(window);
        if value > best_value {
            best_value = value;
            best_start = start;
        }
    }
    &text[best_start..best_start + k]
}

/// Scales `weights` so they sum to 1, keeping their order.
///
/// # Errors
/// * `MotifError::InvalidParameter` if a weight is negative or not finite
/// * `MotifError::ZeroWeightSum` if the weights are empty or all zero
pub fn normalize<K>(weights: &Distribution<K>) -> Result<Distribution<K>>
where
    K: Clone + Eq + Hash,
{
    if let Some(weight) = weights.values().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(MotifError::invalid_parameter(
            "weight",
            weight,
            "weights must be finite and non-negative",
        ));
    }
    let total: f64 = weights.values().sum();
    if total <= 0.0 {
        return Err(MotifError::ZeroWeightSum);
    }
    Ok(weights
        .iter()
        .map(|(key, weight)| (key.clone(), weight / total))
        .collect())
}

/// Draws one candidate from a normalized distribution.
///
/// A uniform value in `[0, 1)` is compared against the running total of the
/// weights in iteration order and the first candidate whose cumulative total
/// strictly exceeds it is returned. Which candidate a draw landing exactly on a
/// cumulative boundary maps to is an artefact of that order and should not be
/// relied upon. If rounding leaves the total just under the draw, the last
/// candidate with positive weight is returned.
///
/// # Errors
/// * `MotifError::ZeroWeightSum` if there is no candidate with positive weight
pub fn weighted_die<'m, K, R>(probabilities: &'m Distribution<K>, rng: &mut R) -> Result<&'m K>
where
    R: Rng + ?Sized,
{
    let draw: f64 = rng.gen();
    let mut cumulative = 0.0;
    let mut fallback = None;
    for (candidate, &weight) in probabilities {
        cumulative += weight;
        if draw < cumulative {
            return Ok(candidate);
        }
        if weight > 0.0 {
            fallback = Some(candidate);
        }
    }
    fallback.ok_or(MotifError::ZeroWeightSum)
}

/// Samples a k-mer of `text` with probability proportional to its likelihood
/// under `profile`.
///
/// Repeated k-mers are a single candidate, placed where they first occur.
///
/// # Errors
/// * Any error from [`profile_most_probable_kmer`]'s argument checks
/// * `MotifError::ZeroWeightSum` if every k-mer has probability 0
pub fn profile_generated_string<'a, R>(
    text: &'a str,
    profile: &ProfileMatrix,
    k: usize,
    rng: &mut R,
) -> Result<&'a str>
where
    R: Rng + ?Sized,
{
    check_window(text, k, profile)?;
    let probabilities: Distribution<&'a str> = (0..=text.len() - k)
        .map(|start| {
            let kmer = &text[start..start + k];
            (kmer, profile.likelihood(kmer.as_bytes()))
        })
        .collect();
    let probabilities = normalize(&probabilities)?;
    weighted_die(&probabilities, rng).copied()
}
