//! Shared utilities for CLI commands.

use std::io::Write;

use anyhow::Result;
use fit_core::WorkoutRecord;

use crate::config::OutputFormat;

/// Writes one report line for `record` in the requested format.
pub fn write_report<W: Write>(
    writer: &mut W,
    record: &WorkoutRecord,
    format: OutputFormat,
) -> Result<()> {
    let info = record.info();
    match format {
        OutputFormat::Text => writeln!(writer, "{info}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &info)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use fit_core::read_package;

    #[test]
    fn json_report_is_one_object_per_line() {
        let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let mut output = Vec::new();
        write_report(&mut output, &record, OutputFormat::Json).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["duration_hours"], 1.0);
        assert_eq!(value["distance_km"], 1.0);
    }

    #[test]
    fn text_report_ends_with_newline() {
        let record = read_package("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
        let mut output = Vec::new();
        write_report(&mut output, &record, OutputFormat::Text).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Workout type: Running; "));
        assert!(output.ends_with(".\n"));
    }
}
