//! `org-chart` binary.
//!
//! Builds the sample company and prints its full chart to stdout. Takes no
//! arguments. Log output goes to stderr and is filtered with `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;

use org_chart::display::Displayable;
use org_chart::error::OrgResult;
use org_chart::sample;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = run() {
        error!(error = %e, "Org chart output was interrupted");
    }

    ExitCode::SUCCESS
}

fn run() -> OrgResult<()> {
    let company = sample::empresa_falsa();
    debug!(department = company.code(), "Rendering sample company");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    company.render_detail(&mut out)?;
    out.flush()?;

    Ok(())
}
