//! Motif discovery and replication-origin analysis for DNA sequences in Rust

pub mod alphabet;
pub mod error;
pub mod fasta;
pub mod probability;
pub mod profile;
pub mod replication;
pub mod scoring;
pub mod search;
pub mod types;

pub use error::{MotifError, Result};
pub use probability::{
    normalize, pr, profile_generated_string, profile_most_probable_kmer, weighted_die,
};
pub use profile::{
    count, count_with_pseudocounts, profile, profile_with_pseudocounts, CountMatrix, CountMode,
    ProfileMatrix,
};
pub use scoring::{consensus, score};
pub use search::{
    gibbs_sampler, gibbs_sampler_with, greedy_motif_search, motifs_from_profile,
    randomized_motif_search, random_motifs, Replacement,
};
