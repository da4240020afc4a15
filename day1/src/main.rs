use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use day1::diagnostics::TracingDiagnostics;

const INPUT_PATH: &str = "input";

fn main() -> Result<()> {
    // diagnostics go to stderr, stdout only carries the two totals
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(io::stderr)
        .init();

    let totals = day1::calculate_file(INPUT_PATH, &mut TracingDiagnostics);
    totals.write_to(io::stdout().lock())?;

    Ok(())
}
