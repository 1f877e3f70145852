pub mod config;
pub mod error;
pub mod input;
pub mod writer;

use std::io;

use tracing::{error, info};

use array_bench_core::{BenchmarkSweep, DEFAULT_SEED, RandomSource, SweepReport};
use error::Error;
use writer::ResultWriter;

fn main() {
    if let Err(err) = run() {
        error!(%err, "Benchmark aborted");
        eprintln!("array-bench failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = config::load_config()?;
    init_logging(&config.logging.level);

    let step_unit = input::read_step_unit(io::stdin().lock())?;
    let writer = ResultWriter::from_config(&config.output);

    benchmark(step_unit, RandomSource::new(DEFAULT_SEED), &writer)?;

    info!("Benchmark complete");
    Ok(())
}

/// Installs the stderr `fmt` subscriber with the configured filter.
fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(io::stderr)
        .init();
}

/// Runs a full sweep for `step_unit` and persists it through `writer`.
pub fn benchmark(
    step_unit: usize,
    rng: RandomSource,
    writer: &ResultWriter,
) -> Result<SweepReport, Error> {
    let report = BenchmarkSweep::new(rng).run(step_unit)?;
    writer.write(&report)?;
    Ok(report)
}
