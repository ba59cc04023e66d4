//! Kinds command for listing the dispatch table.

use std::io::Write;

use anyhow::Result;
use fit_core::WorkoutKind;

/// Runs the kinds command.
pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{:<6} {:<15} VALUES", "CODE", "NAME")?;
    for kind in WorkoutKind::ALL {
        writeln!(
            writer,
            "{:<6} {:<15} {}",
            kind.code(),
            kind.display_name(),
            kind.field_names().join(" ")
        )?;
    }
    Ok(())
}
