use clap::{Args, Parser, Subcommand, ValueEnum};
use genome_motifs::error::MotifError;
use genome_motifs::{fasta, replication, search, CountMode};
use genome_motifs::{consensus, score};
use log::{info, LevelFilter};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::path::PathBuf;

mod logging;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Motif(#[from] MotifError),

    #[error("Failed to set up logging: {0}")]
    Logging(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Parser)]
#[command(
    name = "motif-search",
    about = "Finds shared regulatory motifs across DNA sequences and locates replication origins by GC skew",
    version,
    after_help = "Example usage:\n    \
                  motif-search motifs upstream.fasta -k 15 --strategy gibbs --iterations 1000 --runs 20\n    \
                  motif-search skew genome.txt -k 9 --window 500",
    color = clap::ColorChoice::Always
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Also write every log record, including debug output, to this file
    #[arg(long, global = true, value_name = "LOG_FILE")]
    log_filepath: Option<PathBuf>,

    /// Do not log to stderr
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a FASTA file for one motif per sequence
    Motifs(MotifArgs),
    /// Report minimum-skew positions of a plain-text genome
    Skew(SkewArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Greedy search with plain count profiles
    Greedy,
    /// Greedy search with pseudocount profiles
    GreedyPseudo,
    /// Randomized hill-climbing, restarted `--runs` times
    Randomized,
    /// Gibbs sampling, restarted `--runs` times
    Gibbs,
}

#[derive(Args, Debug)]
struct MotifArgs {
    /// FASTA file with one record per sequence
    #[arg(value_name = "FASTA_FILE")]
    fasta_file: PathBuf,

    /// Motif width
    #[arg(short = 'k', long)]
    k: usize,

    /// Number of sequences to search, defaults to every record
    #[arg(short = 't', long)]
    t: Option<usize>,

    #[arg(long, value_enum, default_value_t = Strategy::GreedyPseudo)]
    strategy: Strategy,

    /// Resampling steps per Gibbs run
    #[arg(short = 'N', long, default_value = "1000")]
    iterations: usize,

    /// Independent restarts of a stochastic strategy; the best result is kept
    #[arg(long, default_value = "20")]
    runs: usize,

    /// Base seed; run `i` is seeded with `seed + i`. Drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct SkewArgs {
    /// Plain-text genome, whitespace is ignored
    #[arg(value_name = "GENOME_FILE")]
    genome_file: PathBuf,

    /// Length of the k-mers counted near the first skew minimum
    #[arg(short = 'k', long, default_value = "9")]
    k: usize,

    /// Width of the window starting at the first skew minimum
    #[arg(long, default_value = "500")]
    window: usize,
}

/// Runs `runs` seeded restarts in parallel and keeps the lowest-scoring result.
fn best_of_runs<'a, F>(runs: usize, seed: u64, search: F) -> Result<Vec<&'a str>, CliError>
where
    F: Fn(&mut StdRng) -> genome_motifs::Result<Vec<&'a str>> + Sync,
{
    let results = (0..runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(run as u64));
            let motifs = search(&mut rng)?;
            let score = score(&motifs)?;
            Ok::<_, MotifError>((score, run, motifs))
        })
        .collect::<Result<Vec<_>, MotifError>>()?;

    let (best_score, best_run, best) = results
        .into_iter()
        .min_by_key(|(score, run, _)| (*score, *run))
        .ok_or_else(|| CliError::InvalidArgument("--runs must be at least 1".into()))?;
    info!("best of {} runs: run {} with score {}", runs, best_run, best_score);
    Ok(best)
}

fn find_motifs(args: &MotifArgs) -> Result<(), CliError> {
    let df = fasta::read_fasta(&args.fasta_file)?;
    let dna = fasta::sequences(&df)?;
    let t = args.t.unwrap_or(dna.len());
    info!("{} sequences loaded, searching {} with k = {}", dna.len(), t, args.k);

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let motifs = match args.strategy {
        Strategy::Greedy => search::greedy_motif_search(&dna, args.k, t, CountMode::Plain)?,
        Strategy::GreedyPseudo => {
            search::greedy_motif_search(&dna, args.k, t, CountMode::Pseudocount)?
        }
        Strategy::Randomized => {
            info!("randomized search, base seed {}", seed);
            best_of_runs(args.runs, seed, |rng| {
                search::randomized_motif_search(&dna, args.k, t, rng)
            })?
        }
        Strategy::Gibbs => {
            info!("gibbs sampling, {} steps per run, base seed {}", args.iterations, seed);
            best_of_runs(args.runs, seed, |rng| {
                search::gibbs_sampler(&dna, args.k, t, args.iterations, rng)
            })?
        }
    };

    let labels = df.head(Some(t)).column("label")?.clone();
    let results = DataFrame::new(vec![
        labels,
        Column::new("motif".into(), motifs.clone()),
    ])?;
    println!("{}", results);
    println!("consensus: {}", consensus(&motifs)?);
    println!("score: {}", score(&motifs)?);
    Ok(())
}

fn find_origin(args: &SkewArgs) -> Result<(), CliError> {
    let genome = fasta::load_genome_from_txt(&args.genome_file)?;
    info!("genome of {} bases loaded", genome.len());

    let minima = replication::minimum_skew(&genome);
    println!(
        "minimum skew at: {}",
        minima
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    if let Some(&start) = minima.first() {
        let end = (start + args.window).min(genome.len());
        let words = replication::frequent_words(&genome[start..end], args.k)?;
        println!(
            "most frequent {}-mers in [{}, {}): {}",
            args.k,
            start,
            end,
            words.join(" ")
        );
    }
    Ok(())
}

fn main() -> Result<(), CliError> {
    let start_time = std::time::Instant::now();

    let cli = Cli::parse();
    let _handle = logging::init_logging(cli.log_filepath.as_ref(), cli.quiet, LevelFilter::Info)?;

    match &cli.command {
        Commands::Motifs(args) => find_motifs(args)?,
        Commands::Skew(args) => find_origin(args)?,
    }

    info!(
        "Total execution time: {:.4} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
