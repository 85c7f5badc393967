//! pmf-simulate: Resample from a sample's PMF and compare moments.
//!
//! Draws N values from the empirical PMF with a seeded RNG, rebuilds the PMF
//! from the draws, and reports how far the resampled mean and variance land
//! from the exact ones.

use std::time::Instant;

use tracing::info;

use pmf::constants::REFERENCE_SAMPLE;
use pmf::env_config::init_logging;
use pmf::input::{parse_sample, read_sample_file};
use pmf::moments::std_dev;
use pmf::sampling::PmfSampler;
use pmf::{expected_value, variance, Pmf, PmfError};

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    let mut sample_arg: Option<String> = None;
    let mut file_arg: Option<String> = None;
    let mut draws: usize = 100_000;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sample" | "--file" | "--draws" | "--seed" if i + 1 >= args.len() => {
                eprintln!("Missing value for {}", args[i]);
                std::process::exit(1);
            }
            "--sample" => {
                i += 1;
                sample_arg = Some(args[i].clone());
            }
            "--file" => {
                i += 1;
                file_arg = Some(args[i].clone());
            }
            "--draws" => {
                i += 1;
                draws = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --draws value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                seed = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = run(sample_arg.as_deref(), file_arg.as_deref(), draws, seed) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(sample_arg: Option<&str>, file_arg: Option<&str>, draws: usize, seed: u64) -> Result<(), PmfError> {
    let sample = match (sample_arg, file_arg) {
        (Some(text), None) => parse_sample(text)?,
        (None, Some(path)) => read_sample_file(path.as_ref())?,
        (None, None) => REFERENCE_SAMPLE.to_vec(),
        (Some(_), Some(_)) => {
            return Err(PmfError::InvalidInput(
                "--sample and --file are mutually exclusive".to_string(),
            ))
        }
    };

    let exact = Pmf::from_sample(&sample)?;
    let mu = expected_value(&exact);
    let var = variance(&exact, mu);

    let t0 = Instant::now();
    let drawn = PmfSampler::new(&exact)?.draw(draws, seed);
    info!(draws, seed, elapsed_ms = t0.elapsed().as_millis() as u64, "sampling complete");

    let resampled = Pmf::from_sample(&drawn)?;
    let mu_hat = expected_value(&resampled);
    let var_hat = variance(&resampled, mu_hat);

    println!("=== pmf-simulate ===");
    println!("{} draws, seed {}", draws, seed);
    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "value", "exact", "simulated", "diff");
    for (&v, p) in exact.iter() {
        let q = resampled.probability(&v);
        println!("{:>8} {:>12.6} {:>12.6} {:>+10.6}", v, p, q, q - p);
    }
    println!();
    println!("mean:     exact {:.6}  simulated {:.6}  diff {:+.6}", mu, mu_hat, mu_hat - mu);
    println!("variance: exact {:.6}  simulated {:.6}  diff {:+.6}", var, var_hat, var_hat - var);
    println!(
        "std error of the simulated mean ≈ {:.6}",
        std_dev(&exact) / (draws as f64).sqrt()
    );
    Ok(())
}

fn print_usage() {
    println!(
        "pmf-simulate: Resample from an empirical PMF and compare moments.

USAGE:
    pmf-simulate [OPTIONS]

OPTIONS:
    --sample <LIST>       Comma/whitespace separated integers
    --file <PATH>         Read the sample from a file
    --draws <N>           Number of draws [default: 100000]
    --seed <N>            RNG seed [default: 42]
    -h, --help            Print this help

EXAMPLES:
    pmf-simulate
    pmf-simulate --sample 1,2,2,3 --draws 1000000 --seed 7"
    );
}
