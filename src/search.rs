//! Motif search strategies: greedy, randomized hill-climbing and Gibbs sampling.
//!
//! Every strategy takes a list of DNA sequences `dna`, a motif width `k` and
//! the number of sequences `t` to search (the first `t` of `dna`). The motifs
//! returned borrow from `dna`, one per sequence and in sequence order.
//!
//! The stochastic strategies draw from a caller-supplied random source, so a
//! seeded generator reproduces a run exactly. Restarting a search and keeping
//! the best result is left to the caller.

use crate::alphabet::validate_dna;
use crate::error::{MotifError, Result};
use crate::probability::{most_probable_window, profile_generated_string};
use crate::profile::{profile_with_pseudocounts, CountMatrix, CountMode, ProfileMatrix};
use crate::scoring::score;
use log::debug;
use rand::Rng;

/// How the Gibbs sampler picks the replacement motif for the sequence it
/// resamples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replacement {
    /// The profile-most-probable k-mer of the sequence.
    #[default]
    MostProbable,
    /// A k-mer drawn with probability proportional to its profile likelihood.
    ProfileRandom,
}

/// Validates search arguments and returns the `t` sequences to search.
fn sources<'a, S: AsRef<str>>(dna: &'a [S], k: usize, t: usize) -> Result<Vec<&'a str>> {
    if k == 0 {
        return Err(MotifError::invalid_parameter(
            "k",
            k,
            "motif width must be at least 1",
        ));
    }
    if t == 0 || t > dna.len() {
        return Err(MotifError::invalid_parameter(
            "t",
            t,
            format!("must be between 1 and the number of sequences ({})", dna.len()),
        ));
    }
    dna[..t]
        .iter()
        .enumerate()
        .map(|(index, sequence)| {
            let sequence = sequence.as_ref();
            if k > sequence.len() {
                return Err(MotifError::KmerTooLong {
                    k,
                    index,
                    length: sequence.len(),
                });
            }
            validate_dna(sequence)?;
            Ok(sequence)
        })
        .collect()
}

fn random_windows<'a, R>(dna: &[&'a str], k: usize, rng: &mut R) -> Vec<&'a str>
where
    R: Rng + ?Sized,
{
    dna.iter()
        .map(|&sequence| {
            let start = rng.gen_range(0..=sequence.len() - k);
            &sequence[start..start + k]
        })
        .collect()
}

/// One uniformly random k-window from each of the first `t` sequences.
pub fn random_motifs<'a, S, R>(
    dna: &'a [S],
    k: usize,
    t: usize,
    rng: &mut R,
) -> Result<Vec<&'a str>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let dna = sources(dna, k, t)?;
    Ok(random_windows(&dna, k, rng))
}

/// The profile-most-probable k-mer of every sequence in `dna`, where `k` is
/// the profile width.
pub fn motifs_from_profile<'a, S: AsRef<str>>(
    profile: &ProfileMatrix,
    dna: &'a [S],
) -> Result<Vec<&'a str>> {
    let dna = sources(dna, profile.width(), dna.len())?;
    Ok(dna
        .iter()
        .map(|&sequence| most_probable_window(sequence, profile))
        .collect())
}

/// Greedy motif search.
///
/// For every k-mer of the first sequence, seeds a motif set with it and
/// extends the set one sequence at a time with the profile-most-probable
/// k-mer under the profile of the motifs chosen so far. The candidate set with
/// the strictly lowest score wins; the first k-mer of every sequence is the
/// starting best. `mode` selects plain or pseudocount profiles.
///
/// # Errors
/// * `MotifError::InvalidParameter` if `k` is 0 or `t` is 0 or exceeds `dna.len()`
/// * `MotifError::KmerTooLong` if `k` exceeds the length of a searched sequence
/// * `MotifError::InvalidSequence` if a searched sequence is not pure DNA
pub fn greedy_motif_search<'a, S: AsRef<str>>(
    dna: &'a [S],
    k: usize,
    t: usize,
    mode: CountMode,
) -> Result<Vec<&'a str>> {
    let dna = sources(dna, k, t)?;
    let mut best_motifs: Vec<&str> = dna.iter().map(|&sequence| &sequence[..k]).collect();
    let mut best_score = score(&best_motifs)?;

    let first = dna[0];
    for start in 0..=first.len() - k {
        let mut motifs = Vec::with_capacity(t);
        motifs.push(&first[start..start + k]);
        for &sequence in &dna[1..] {
            let profile = CountMatrix::new(&motifs, mode)?.profile();
            motifs.push(most_probable_window(sequence, &profile));
        }
        let candidate = score(&motifs)?;
        if candidate < best_score {
            debug!("greedy search: seed at {} improves score to {}", start, candidate);
            best_motifs = motifs;
            best_score = candidate;
        }
    }
    Ok(best_motifs)
}

/// Randomized motif search from a single random start.
///
/// Starting from random motifs, repeatedly replaces the motif set with the
/// profile-most-probable k-mers under its own pseudocount profile, and stops
/// as soon as a step fails to strictly lower the score. The best score never
/// increases, so the walk always terminates at a local optimum.
///
/// # Errors
/// Same argument checks as [`greedy_motif_search`].
pub fn randomized_motif_search<'a, S, R>(
    dna: &'a [S],
    k: usize,
    t: usize,
    rng: &mut R,
) -> Result<Vec<&'a str>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let dna = sources(dna, k, t)?;
    let mut motifs = random_windows(&dna, k, rng);
    let mut best_motifs = motifs.clone();
    let mut best_score = score(&best_motifs)?;

    loop {
        let profile = profile_with_pseudocounts(&motifs)?;
        motifs = dna
            .iter()
            .map(|&sequence| most_probable_window(sequence, &profile))
            .collect();
        let candidate = score(&motifs)?;
        if candidate < best_score {
            debug!("randomized search: score improved to {}", candidate);
            best_motifs.clone_from(&motifs);
            best_score = candidate;
        } else {
            debug!("randomized search: converged at score {}", best_score);
            return Ok(best_motifs);
        }
    }
}

/// Gibbs sampler with the default [`Replacement::MostProbable`] rule.
pub fn gibbs_sampler<'a, S, R>(
    dna: &'a [S],
    k: usize,
    t: usize,
    n: usize,
    rng: &mut R,
) -> Result<Vec<&'a str>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    gibbs_sampler_with(dna, k, t, n, Replacement::default(), rng)
}

/// Gibbs sampler running exactly `n` resampling steps.
///
/// Each step picks one of the `t` sequences uniformly at random, builds a
/// pseudocount profile from the other `t - 1` motifs and replaces that
/// sequence's motif according to `replacement`. The best set seen is tracked
/// but the walk always continues from the current set.
///
/// # Errors
/// * Same argument checks as [`greedy_motif_search`]
/// * `MotifError::InvalidParameter` if `t < 2`, since resampling needs another motif
pub fn gibbs_sampler_with<'a, S, R>(
    dna: &'a [S],
    k: usize,
    t: usize,
    n: usize,
    replacement: Replacement,
    rng: &mut R,
) -> Result<Vec<&'a str>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let dna = sources(dna, k, t)?;
    if t < 2 {
        return Err(MotifError::invalid_parameter(
            "t",
            t,
            "Gibbs sampling needs at least two sequences",
        ));
    }
    let mut motifs = random_windows(&dna, k, rng);
    let mut best_motifs = motifs.clone();
    let mut best_score = score(&best_motifs)?;

    for step in 0..n {
        let resampled = rng.gen_range(0..t);
        let others: Vec<&str> = motifs
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != resampled)
            .map(|(_, &motif)| motif)
            .collect();
        let profile = profile_with_pseudocounts(&others)?;
        motifs[resampled] = match replacement {
            Replacement::MostProbable => most_probable_window(dna[resampled], &profile),
            Replacement::ProfileRandom => {
                profile_generated_string(dna[resampled], &profile, k, rng)?
            }
        };
        let current = score(&motifs)?;
        if current < best_score {
            debug!("gibbs sampler: step {} improves score to {}", step, current);
            best_motifs.clone_from(&motifs);
            best_score = current;
        }
    }
    debug!("gibbs sampler: finished {} steps at score {}", n, best_score);
    Ok(best_motifs)
}
