//! Run command: reports on a batch of sensor packages.
//!
//! Each package is dispatched and reported independently. With
//! [`ErrorPolicy::Continue`] a failing package is written to the error
//! stream and the batch moves on; with [`ErrorPolicy::FailFast`] the first
//! failure ends the batch.

use std::io::Write;

use anyhow::{Context, Result};
use fit_core::Package;

use crate::commands::util::write_report;
use crate::config::{ErrorPolicy, OutputFormat};

/// Packages reported when no input is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15_000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Packages that produced a report line.
    pub processed: usize,
    /// Packages that failed to dispatch.
    pub failed: usize,
}

impl BatchSummary {
    /// Fails when any package in the batch failed to dispatch.
    pub fn ensure_success(self) -> Result<()> {
        if self.failed > 0 {
            anyhow::bail!(
                "{} of {} packages failed",
                self.failed,
                self.failed + self.processed
            );
        }
        Ok(())
    }
}

/// Dispatches every package, writing reports to `out` and failures to `err`.
pub fn run<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    packages: &[Package],
    policy: ErrorPolicy,
    format: OutputFormat,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, package) in packages.iter().enumerate() {
        match package.dispatch() {
            Ok(record) => {
                write_report(out, &record, format)?;
                summary.processed += 1;
            }
            Err(error) => {
                if policy == ErrorPolicy::FailFast {
                    return Err(error)
                        .with_context(|| format!("package {index} ({})", package.code));
                }
                tracing::error!(index, code = %package.code, %error, "package failed");
                writeln!(err, "package {index} ({}): {error}", package.code)?;
                summary.failed += 1;
            }
        }
    }

    tracing::debug!(?summary, "batch finished");
    Ok(summary)
}
