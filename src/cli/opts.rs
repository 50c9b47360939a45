use clap::{value_parser, Parser};

use crate::driver::Algorithm;

/// Parse one CLI token into an [`Algorithm`], by its [`Algorithm::name`].
fn parse_algorithm(raw: &str) -> Result<Algorithm, String> {
    Algorithm::ALL
        .into_iter()
        .find(|a| a.name() == raw)
        .ok_or_else(|| {
            let known: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::name).collect();
            format!("unknown algorithm {raw:?}, expected one of {}", known.join(", "))
        })
}

/// Command-line options for the minimizer-sampling benchmark harness.
#[derive(Parser, Debug)]
#[command(
    name = "mmbench",
    about = "Benchmark windowed-minimizer sampling algorithms over synthetic sequences",
    version = "0.1.0"
)]
pub struct BenchArgs {
    /// Length of the synthetic sequence to generate, in bases [integer]
    #[clap(short = 'n', long, default_value = "1000000", help_heading = "Core")]
    pub n_bases: u64,

    /// Seed for the Mersenne-Twister-64 sequence generator [integer]
    #[clap(long, default_value = "42", help_heading = "Core")]
    pub seed: u64,

    /// K-mer length [integer, 1..=32]
    #[clap(short = 'k', long, default_value = "21", value_parser = value_parser!(i32).range(1..=32), help_heading = "Core")]
    pub kmer_length: i32,

    /// Window length [integer, 1..=31]
    #[clap(short = 'w', long, default_value = "11", value_parser = value_parser!(i32).range(1..=31), help_heading = "Core")]
    pub window_length: i32,

    /// Algorithms to benchmark (comma-separated or repeated); defaults to all
    #[clap(long, num_args = 1.., value_delimiter = ',', value_parser = parse_algorithm, help_heading = "Core")]
    pub algorithms: Option<Vec<Algorithm>>,

    /// Number of threads to use for running benchmark configurations concurrently [integer]
    #[clap(short = 't', long, default_value = "1", help_heading = "Core")]
    pub n_threads: usize,

    /// Additionally assert cross-algorithm output equality before timing [flag]
    #[clap(long, help_heading = "Validation")]
    pub check: bool,
}

impl BenchArgs {
    /// Resolve the configured algorithm list, defaulting to every known one.
    pub fn resolve_algorithms(&self) -> Vec<Algorithm> {
        self.algorithms
            .clone()
            .unwrap_or_else(|| Algorithm::ALL.to_vec())
    }
}
