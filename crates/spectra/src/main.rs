//! `spectra`: characteristic and minimal polynomials, eigenvectors and the
//! Jordan form of a rational matrix.
//!
//! **Usage:**
//! ```text
//! spectra "[1 2 3; 0 1 5; 0 0 -2]" [--order degree|round-robin]
//!         [--timeout-ms <ms>] [--max-candidates <n>] [--var <name>]
//! ```
//!
//! Set `RUST_LOG=debug` to trace the candidate search.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use spectra::analyze;
use spectra::linalg::parse_matrix;
use spectra::minpoly::{EnumerationOrder, SearchConfig};

/// Candidate order for the minimal polynomial search.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    /// Ascending degree; the first hit is the minimal polynomial.
    Degree,
    /// Round-robin tuples sorted by norm.
    RoundRobin,
}

impl From<Order> for EnumerationOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Degree => Self::TotalDegree,
            Order::RoundRobin => Self::RoundRobinByNorm,
        }
    }
}

/// Exact spectral analysis of a rational matrix.
#[derive(Parser)]
#[command(name = "spectra", version, about)]
struct Args {
    /// Matrix such as "[1 2 3; 0 1 5; 0 0 -2]" or "[[1, 2], [3/4, -0.5]]".
    #[arg(default_value = "[1 2 3; 0 1 5; 0 0 -2]")]
    matrix: String,

    /// Candidate order for the minimal polynomial search.
    #[arg(long, value_enum, default_value = "degree")]
    order: Order,

    /// Give up on the search after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Give up on the search after this many candidates.
    #[arg(long)]
    max_candidates: Option<usize>,

    /// Name of the indeterminate in printed polynomials.
    #[arg(long, default_value = "x")]
    var: String,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::default().with_order(self.order.into());
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        if let Some(max) = self.max_candidates {
            config = config.with_max_candidates(max);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let a = parse_matrix(&args.matrix)
        .with_context(|| format!("could not parse matrix {:?}", args.matrix))?;
    info!("analysing {}x{} matrix", a.num_rows(), a.num_cols());

    let analysis = analyze(&a, &args.search_config()).context("analysis failed")?;
    print!("{}", analysis.display_in(&args.var));

    Ok(())
}
