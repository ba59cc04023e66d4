//! Calc command for reporting on a single package.

use std::io::Write;

use anyhow::{Context, Result};
use fit_core::read_package;

use crate::commands::util::write_report;
use crate::config::OutputFormat;

/// Runs the calc command.
pub fn run<W: Write>(writer: &mut W, code: &str, values: &[f64], format: OutputFormat) -> Result<()> {
    let record = read_package(code, values).with_context(|| format!("invalid {code} package"))?;
    write_report(writer, &record, format)
}
