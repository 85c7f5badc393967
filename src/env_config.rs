//! Shared environment configuration for the pmf binaries.
//!
//! Consolidates `PMF_BASE_PATH`, `PMF_OUTPUT_DIR` and `RUST_LOG` reads.

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default directory for relative output paths.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs/pmf";

/// Install the `tracing` subscriber, filtered by `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Read `PMF_BASE_PATH` (default `"."`) and chdir into it. Exits on failure.
pub fn init_base_path() -> PathBuf {
    let base_path = std::env::var("PMF_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    let path = PathBuf::from(&base_path);
    if std::env::set_current_dir(&base_path).is_err() {
        eprintln!("Failed to change directory to {}", base_path);
        std::process::exit(1);
    }
    if let Ok(cwd) = std::env::current_dir() {
        info!(cwd = %cwd.display(), "working directory");
    }
    path
}

/// Read `PMF_OUTPUT_DIR` (default [`DEFAULT_OUTPUT_DIR`]).
pub fn output_dir() -> PathBuf {
    std::env::var("PMF_OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

/// Absolute paths pass through; relative ones are placed under `dir`.
pub fn resolve_output(dir: &Path, file: &str) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        dir.join(p)
    }
}
