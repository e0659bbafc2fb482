//! CSV export for simulation results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::SimulationResult;

/// Column header for CSV export.
const HEADER: [&str; 2] = ["time", "value"];

/// Exports a simulation result to a CSV file at the given path.
///
/// Writes a header row followed by one `time,value` row per sample.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(result: &SimulationResult, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(result, buf)
}

/// Writes a simulation result as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(result: &SimulationResult, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for (t, value) in result.samples() {
        wtr.write_record(&[t.to_string(), value.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
