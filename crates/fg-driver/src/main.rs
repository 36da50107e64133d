//! fgemm - out-of-core GEMM driver.
//!
//! Computes C := alpha * op(A) * op(B) + beta * C over flat binary f32
//! matrix files, staging engine state through an explicitly configured
//! directory. The result overwrites the C input file.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use fg_driver::error::EXIT_SUCCESS;
use fg_driver::params::USAGE;
use fg_driver::DriverError;
use fg_engine::CpuEngine;

/// Out-of-core GEMM driver over flat binary f32 matrix files
#[derive(Parser)]
#[command(name = "fgemm")]
#[command(about = "Computes C := alpha * op(A) * op(B) + beta * C over flat binary files")]
#[command(after_help = "POSITIONAL ORDER:\n  <A_path> <B_path> <C_path> <A_rows> <A_cols> <B_cols> \
<alpha> <beta> <trans_a> <trans_b> <storage_order> <lda_a> <lda_b> <lda_c>")]
#[command(version)]
struct Cli {
    /// Staging directory for the engine's disk-backed state
    #[arg(long, value_name = "PATH")]
    staging_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// The fourteen positional values describing the GEMM problem
    #[arg(value_name = "ARG", allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let staging_root = cli
        .staging_dir
        .unwrap_or_else(|| std::env::temp_dir().join("fgemm-staging"));

    let invocation = match fg_driver::parse_args(&cli.args) {
        Ok(invocation) => invocation,
        Err(e) => {
            info!("usage: fgemm [OPTIONS] {}", USAGE);
            report_error(&e);
            process::exit(e.exit_code());
        }
    };

    let engine = CpuEngine::new();
    match fg_driver::execute(&invocation, &engine, &staging_root) {
        Ok(_) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            report_error(&e);
            process::exit(e.exit_code());
        }
    }
}

fn report_error(e: &DriverError) {
    error!("run failed: {}", e);
    let mut source = e.source();
    while let Some(err) = source {
        error!("  caused by: {}", err);
        source = err.source();
    }
}

fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
