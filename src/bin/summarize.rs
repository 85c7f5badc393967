//! pmf-summarize: Empirical PMF, expected value and variance of a sample.
//!
//! Prints the frequency table, PMF, moments and a terminal bar chart, and
//! optionally writes the summary as JSON and the chart series as CSV.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use pmf::chart::{BarSeries, Histogram};
use pmf::constants::{DEFAULT_BAR_WIDTH, DEFAULT_HISTOGRAM_BINS, DISPLAY_DECIMALS, REFERENCE_SAMPLE};
use pmf::env_config::{init_base_path, init_logging, output_dir, resolve_output};
use pmf::input::{parse_sample, read_sample_file};
use pmf::{compute_frequencies, compute_pmf, expected_value, variance, PmfError, PmfSummary};

struct Options {
    sample: Option<String>,
    file: Option<PathBuf>,
    json: Option<String>,
    csv: Option<String>,
    hist_csv: Option<String>,
    bins: usize,
    decimals: u32,
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        sample: None,
        file: None,
        json: None,
        csv: None,
        hist_csv: None,
        bins: DEFAULT_HISTOGRAM_BINS,
        decimals: DISPLAY_DECIMALS,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sample" | "--file" | "--json" | "--csv" | "--hist-csv" | "--bins" | "--round"
                if i + 1 >= args.len() =>
            {
                eprintln!("Missing value for {}", args[i]);
                std::process::exit(1);
            }
            "--sample" => {
                i += 1;
                opts.sample = Some(args[i].clone());
            }
            "--file" => {
                i += 1;
                opts.file = Some(PathBuf::from(&args[i]));
            }
            "--json" => {
                i += 1;
                opts.json = Some(args[i].clone());
            }
            "--csv" => {
                i += 1;
                opts.csv = Some(args[i].clone());
            }
            "--hist-csv" => {
                i += 1;
                opts.hist_csv = Some(args[i].clone());
            }
            "--bins" => {
                i += 1;
                opts.bins = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --bins value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--round" => {
                i += 1;
                opts.decimals = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --round value: {}", args[i]);
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

    if opts.sample.is_some() && opts.file.is_some() {
        eprintln!("Error: --sample and --file are mutually exclusive");
        std::process::exit(1);
    }

    if let Err(e) = run(&opts) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(opts: &Options) -> Result<(), PmfError> {
    let sample = if let Some(text) = &opts.sample {
        parse_sample(text)?
    } else if let Some(path) = &opts.file {
        read_sample_file(path)?
    } else {
        REFERENCE_SAMPLE.to_vec()
    };

    // Output paths are resolved after chdir so PMF_BASE_PATH applies to them.
    let base = init_base_path();
    info!(base = %base.display(), n = sample.len(), "summarizing sample");

    let t0 = Instant::now();
    let frequencies = compute_frequencies(&sample)?;
    let pmf = compute_pmf(&frequencies, frequencies.total())?;
    let summary = PmfSummary::from_parts(&frequencies, &pmf);

    println!("=== pmf-summarize ===");
    println!("n = {}", summary.sample_size);
    println!();
    println!("{:>8} {:>8} {:>12}", "value", "count", "probability");
    for (&(v, c), &(_, p)) in summary.frequencies.iter().zip(&summary.pmf) {
        println!("{:>8} {:>8} {:>12.6}", v, c, p);
    }
    println!();
    println!("mean     = {:.6}", summary.mean);
    println!("variance = {:.6}", summary.variance);
    println!("std_dev  = {:.6}", summary.std_dev);
    let modes: Vec<String> = summary.modes.iter().map(|m| m.to_string()).collect();
    println!("mode(s)  = {}", modes.join(", "));
    let pcts: Vec<String> = summary
        .percentiles
        .iter()
        .map(|p| format!("p{}={}", p.level, p.value))
        .collect();
    println!("{}", pcts.join("  "));

    // Same formulas on the rounded table, as the probabilities are usually displayed.
    let rounded = pmf.rounded(opts.decimals);
    let mu_r = expected_value(&rounded);
    println!(
        "rounded to {} decimals: mean = {:.4}, variance = {:.4}, mass = {:.4}",
        opts.decimals,
        mu_r,
        variance(&rounded, mu_r),
        rounded.total_mass()
    );

    let bars = BarSeries::from_pmf(&pmf);
    println!();
    print!("{}", bars.render(DEFAULT_BAR_WIDTH));

    let out_dir = output_dir();
    if let Some(name) = &opts.json {
        let path = resolve_output(&out_dir, name);
        ensure_parent(&path)?;
        fs::write(&path, summary.to_json_pretty()?)?;
        println!("Wrote {}", path.display());
    }
    if let Some(name) = &opts.csv {
        let path = resolve_output(&out_dir, name);
        ensure_parent(&path)?;
        bars.write_csv(BufWriter::new(File::create(&path)?))?;
        println!("Wrote {}", path.display());
    }
    if let Some(name) = &opts.hist_csv {
        let path = resolve_output(&out_dir, name);
        ensure_parent(&path)?;
        Histogram::from_sample(&sample, opts.bins)?
            .write_csv(BufWriter::new(File::create(&path)?))?;
        println!("Wrote {}", path.display());
    }

    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "done");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), PmfError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn print_usage() {
    println!(
        "pmf-summarize: Empirical PMF, expected value and variance of a sample.

USAGE:
    pmf-summarize [OPTIONS]

OPTIONS:
    --sample <LIST>       Comma/whitespace separated integers
    --file <PATH>         Read the sample from a file
    --json <FILE>         Write the summary as JSON
    --csv <FILE>          Write the bar-chart series (value,probability)
    --hist-csv <FILE>     Write histogram bins
    --bins <N>            Histogram bin count [default: 5]
    --round <N>           Decimals for the rounded view [default: 2]
    -h, --help            Print this help

Relative output files go under $PMF_OUTPUT_DIR [default: outputs/pmf].
Without --sample or --file the worked example 1,1,1,1,2,2,2,2,3,3,4,5,5 is used.

EXAMPLES:
    pmf-summarize
    pmf-summarize --sample 3,1,4,1,5,9,2,6 --json digits.json
    pmf-summarize --file rolls.txt --csv rolls.csv --hist-csv rolls_hist.csv --bins 6"
    );
}
