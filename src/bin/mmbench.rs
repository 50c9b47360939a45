use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use minimizer_bench::cli::opts::BenchArgs;
use minimizer_bench::driver::{minimize, MinimizeArgs};
use minimizer_bench::sample::NaiveSampler;
use minimizer_bench::{Hasher, PackedSequence, Sampler};

fn main() {
    if let Err(e) = run() {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let start_time = Instant::now();
    let opt = BenchArgs::parse();

    let algorithms = opt.resolve_algorithms();
    for &alg in &algorithms {
        if opt.window_length > alg.max_window_length() {
            bail!(
                "window length {} exceeds the maximum {} supported by {}",
                opt.window_length,
                alg.max_window_length(),
                alg.name()
            );
        }
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(opt.n_threads)
        .build_global()
        .ok();

    println!("Start: Generating synthetic sequence");
    let seq = PackedSequence::from_mt19937_64(opt.n_bases, opt.seed);
    let args = MinimizeArgs {
        seq: &seq,
        window_length: opt.window_length,
        kmer_length: opt.kmer_length,
    };

    let algorithms = opt.resolve_algorithms();

    if opt.check {
        println!("Start: Checking cross-algorithm agreement");
        let thomas_wang_reference = reference_minimize(&args, &minimizer_bench::hash::ThomasWangHasher);
        let nthash_reference = reference_minimize(&args, &minimizer_bench::hash::NtHasher::new());
        for &alg in &algorithms {
            let reference = match alg.hasher_name() {
                "nthash" => &nthash_reference,
                _ => &thomas_wang_reference,
            };
            let out = minimize(&args, alg);
            if &out != reference {
                bail!(
                    "{} disagrees with the naive reference over the same hasher ({} vs {} entries)",
                    alg.name(),
                    out.len(),
                    reference.len()
                );
            }
        }
        println!(
            "       all {} algorithms agree with their hasher's naive reference",
            algorithms.len()
        );
    }

    println!("Start: Timing algorithms");
    let pb = ProgressBar::new(algorithms.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("       {bar:40} {pos}/{len} [{elapsed_precise}] {msg}")
            .unwrap(),
    );

    let timings: Vec<(&'static str, u128, usize)> = algorithms
        .par_iter()
        .map(|&alg| {
            let t0 = Instant::now();
            let out = minimize(&args, alg);
            let elapsed = t0.elapsed().as_micros();
            pb.inc(1);
            (alg.name(), elapsed, out.len())
        })
        .collect();
    pb.finish_with_message("| Finished timing");

    for (name, micros, count) in timings {
        println!("  {name:<24} {micros:>10} us   {count} minimizers");
    }

    println!("Elapsed time: {:.2?}", start_time.elapsed());
    Ok(())
}

/// The naive sampler paired with `hasher`, used only as the
/// same-hasher equivalence oracle for `--check`.
fn reference_minimize(args: &MinimizeArgs, hasher: &dyn Hasher) -> Vec<minimizer_bench::KMer> {
    let n = args.seq.len() as i64;
    let w = args.window_length as i64;
    let k = args.kmer_length as i64;
    if n < w + k - 1 {
        return Vec::new();
    }
    let hashes = hasher.hash(args.seq, args.kmer_length);
    NaiveSampler.sample(&hashes, args.window_length)
}
