use genome_motifs::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DNA: [&str; 5] = [
    "GGCGTTCAGGCA",
    "AAGAATCAGTCA",
    "CAAGGAGTTCGC",
    "CACGTCAATCAC",
    "CAATAATATTCG",
];

const UPSTREAM: [&str; 10] = [
    "GCGCCCCGCCCGGACAGCCATGCGCTAACCCTGGCTTCGATGGCGCCGGCTCAGTTAGGGCCGGAAGTCCCCAATGTGGCAGACCTTTCGCCCCTGGCGGACGAATGACCCCAGTGGCCGGGACTTCAGGCCCTATCGGAGGGCTCCGGCGCGGTGGTCGGATTTGTCTGTGGAGGTTACACCCCAATCGCAAGGATGCATTATGACCAGCGAGCTGAGCCTGGTCGCCACTGGAAAGGGGAGCAACATC",
    "GTACATGTCCAGAGCGAGCCTCAGCTTCTGCGCAGCGACGGAAACTGCCACACTCAAAGCCTACTGGGCGCACGTGTGGCAACGAGTCGATCCACACGAAATGCCGCCGTTGGGCCGCGGACTAGCCGAATTTTCCGGGTGGTGACACAGCCCACATTTGGCATGGGACTTTCGGCCCTGTCCGCGTCCGTGTCGGCCAGACAAGCTTTGGGCATTGGCCACAATCGGGCCACAATCGAAAGCCGAGCAG",
    "CATGTTGCGAGCTTCGCTAGCTTAGGCGCACACTCCTGACCACTGCTTGTTTCGAGGACCAGCCTTCACAGCAGTTTCACGTGCCTACAACTATTGACGCACGGTCGAATGTTCCCATTGGGTTGATGACACGTGTTGGCACTCTCAAGTGGGATGCGAATCCGGCGACGAAGCTCCTCCGGAGAACGCCCAGCAGTCTGAAGGCAACCATCGTGTAGCCCACGAACAACCGGCTTCAGACGATGTCCATT",
    "GGAGCGACTCTATTTCAGATATCGACCTGGTACGTACCGCTCTCGCGAAGATGCGGTGTCGGGAGGCTGTAGCAACGGTCTTGAATCAAACGATCCCAGATGCTTCACAATGCGTCTGCGCTGCAACCACCCCCGCATACGTGGATGGATACCAGCCCACCGAAGGCCTTATATCACTGGCGCACCTTCAGACATTTGTGGATGACCAGCCCTGTCTCGAAGGCAACATTTCGCTTCCATTCCGATAAA",
    "AGTCGACTCACTGGTGCGGCACCCAACGGTGGTTTCCTACGCTAATGGACGTGCAACCAGATCGGCCCTTCACGTATTTGAGGCACATCGCCACCATACGCAAACAACCATAATTCGGACCCGCGCAGTCCCCGGCCAAATCTGCGGCTCGATCCGTCCAACAACCCGCTGAGAAAGCCCGCTGGGCTAGGGAGGCCCCAGCGCTGCCACCAGCCTGTATTGACATGGAGACCCCCCACCCCGATGAAA",
    "ACAGCTGAGAATTTAGGACTATAGATATGCCCACGTCGCCTCATGCATCTCGGAACTGCATCAAATTTTTTAGAAGCTCCAGATGCTCTCGAGCTGAGAGACGCAGCGCAGTTCGCCGCGGTTCCGACCAGGGCCGTATCTGACCCTCAACGAGATGTCAGCCACAGGTTCTTGACCATGCCAAGAAACTCCCAAGCACCTCCTGTTCGCAGGAGACGGGACACAGTGATGGGTGTTCCCTTGGGATCGCCC",
    "TCTAAGTCCTCCATTACGGACCACCCCCGCCCCATCTCCATCGGTCCTGGACACAGGCCGTAACAAGCGTATCTTCAGAAGACAATGAGCGCTGCACGAGCCACCTGCCACAGCCGGGGCCATGTGCCCGATCTCCATACCGACTGTTGCATAGCCGGGAGAGCACACCATCCAGAACCTTTAAAGACCTCCATCGGCCACGCCGCCCCAACCGGGCTAATGTGTAAGATGCAATATCGCGAATCCGCAC",
    "AGCCGACCGGCTAAATCTCCCAATGATGACCAATCCCTGCCTGCCCAATAACCCGGTGGCCTAAGCGGCTAGTCCCCGCACCTGAGACGCTGGCGTACCGCTTCGGCTCTCACCTAAGCGACTGGTAGCCGAGTATGCGTACAGACAGGTGCCATCCCCTGTTGGAGACCGGACGATCCACCACGTTGAGTCCATCGCATGCTGCTAAGATGGGACGCAGGAACCTATCGGATTTAGGCGGCTTTCTTCCGA",
    "GGTAGACGCATAGCAGTCAAGCCGACCCCTTCAGTTGCCTGGCCACGAACAACTCTAGCGAGTCCGCTCACCATTCAGCTCCATTGCCAGAGCGGCCTTAGGCTTGGACTCTGGCGGTTCTAAGGGCACACTCTTCGAATGCACTCCACAACACTCATTGTCGATACGCATTAATCGATTCTCCGTTGTGCCATTCCACGCCATTTGCCTGACGCTAGCCACTTTCTTCTCCCCCGGCGCTGGCCTGCACC",
    "CGACGGGAGCACAACACCATCCTTATGTTCTCTCACTTCGGATCTCCTCTGTCCGAGCATCAGACACCCACACGAGACCGCGATGCAGGACGAAAGCCGTGTGGGGTCTACTGATCGGCCCAATGCCCTACCGTGCACACAAAGCCATACGACAATCCCCGCACCATTTTGGGCGAATGTTTCGGGACCAACCCGCTCCGATCTTCAGCCGTGCTTGTCCGCCGCGAAATCTATCCCTGCGAGTTCGTGATC",
];

#[test]
fn test_greedy_motif_search_plain_counts() {
    let motifs = greedy_motif_search(&DNA, 3, 5, CountMode::Plain).unwrap();
    assert_eq!(motifs, vec!["CAG", "CAG", "CAA", "CAA", "CAA"]);
}

#[test]
fn test_greedy_motif_search_pseudocounts() {
    let motifs = greedy_motif_search(&DNA, 3, 5, CountMode::Pseudocount).unwrap();
    assert_eq!(motifs, vec!["TTC", "ATC", "TTC", "ATC", "TTC"]);
}

#[test]
fn test_greedy_motif_search_uses_first_t_sequences() {
    let motifs = greedy_motif_search(&DNA, 3, 2, CountMode::Pseudocount).unwrap();
    assert_eq!(motifs.len(), 2);
    assert_eq!(score(&motifs).unwrap(), 0);
}

#[test]
fn test_greedy_motif_search_rejects_bad_arguments() {
    assert!(matches!(
        greedy_motif_search(&DNA, 13, 5, CountMode::Plain),
        Err(MotifError::KmerTooLong { k: 13, index: 0, .. })
    ));
    assert!(matches!(
        greedy_motif_search(&DNA, 3, 6, CountMode::Plain),
        Err(MotifError::InvalidParameter { .. })
    ));
    assert!(matches!(
        greedy_motif_search(&["ACGT", "ACXT"], 2, 2, CountMode::Plain),
        Err(MotifError::InvalidSequence { position: 2, .. })
    ));
}

#[test]
fn test_motifs_from_profile() {
    let profile = profile_with_pseudocounts(&["TTC", "ATC", "TTC"]).unwrap();
    let motifs = motifs_from_profile(&profile, &DNA).unwrap();
    assert_eq!(motifs.len(), DNA.len());
    for (motif, sequence) in motifs.iter().zip(DNA) {
        assert_eq!(
            *motif,
            profile_most_probable_kmer(sequence, 3, &profile).unwrap()
        );
    }
}

#[test]
fn test_randomized_motif_search_is_reproducible() {
    let first = randomized_motif_search(&UPSTREAM, 15, 10, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = randomized_motif_search(&UPSTREAM, 15, 10, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
    for (motif, sequence) in first.iter().zip(UPSTREAM) {
        assert_eq!(motif.len(), 15);
        assert!(sequence.contains(*motif));
    }
}

#[test]
fn test_randomized_motif_search_never_worse_than_start() {
    for seed in 0..20 {
        let start = random_motifs(&UPSTREAM, 15, 10, &mut StdRng::seed_from_u64(seed)).unwrap();
        let best =
            randomized_motif_search(&UPSTREAM, 15, 10, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(score(&best).unwrap() <= score(&start).unwrap());
    }
}

#[test]
fn test_gibbs_sampler_is_reproducible() {
    let first = gibbs_sampler(&UPSTREAM, 15, 10, 100, &mut StdRng::seed_from_u64(7)).unwrap();
    let second = gibbs_sampler(&UPSTREAM, 15, 10, 100, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
}

#[test]
fn test_gibbs_sampler_never_worse_than_start() {
    for seed in 0..10 {
        let start = random_motifs(&UPSTREAM, 15, 10, &mut StdRng::seed_from_u64(seed)).unwrap();
        let best = gibbs_sampler(&UPSTREAM, 15, 10, 50, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(score(&best).unwrap() <= score(&start).unwrap());
    }
}

#[test]
fn test_gibbs_sampler_without_steps_keeps_start() {
    let start = random_motifs(&UPSTREAM, 8, 10, &mut StdRng::seed_from_u64(3)).unwrap();
    let best = gibbs_sampler(&UPSTREAM, 8, 10, 0, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(best, start);
}

#[test]
fn test_gibbs_sampler_profile_random_replacement() {
    let run = |seed| {
        gibbs_sampler_with(
            &UPSTREAM,
            15,
            10,
            100,
            Replacement::ProfileRandom,
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
    };
    let motifs = run(11);
    assert_eq!(motifs, run(11));
    for (motif, sequence) in motifs.iter().zip(UPSTREAM) {
        assert!(sequence.contains(*motif));
    }
}

#[test]
fn test_random_motifs_rejects_short_sequences() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        random_motifs(&["ACGTACGT", "ACG"], 4, 2, &mut rng),
        Err(MotifError::KmerTooLong { index: 1, .. })
    ));
}
