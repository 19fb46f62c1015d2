//! CSV export of a finished schedule, one row per hour of the day.

use std::io::Write;
use std::path::Path;

use crate::error::SchedulerError;
use crate::sim::engine::ScheduleRun;
use crate::tariff::{CYCLE_HOURS, HourlyRate};

/// Column header for the hourly schedule export.
const HEADER: [&str; 5] = ["hour", "rate", "load_w", "headroom_w", "devices"];

/// Exports the hourly schedule to a CSV file at the given path.
///
/// # Arguments
///
/// * `run` - Finished scheduling run
/// * `rates` - Expanded hourly rate curve the run was scheduled against
/// * `path` - Output file path
///
/// # Errors
///
/// Returns [`SchedulerError::ExportCsv`] if file creation or writing fails.
pub fn export_csv(run: &ScheduleRun, rates: &[HourlyRate], path: &Path) -> Result<(), SchedulerError> {
    let file = std::fs::File::create(path).map_err(|e| SchedulerError::ExportCsv {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    write_csv(run, rates, std::io::BufWriter::new(file)).map_err(|source| {
        SchedulerError::ExportCsv {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Writes the hourly schedule as CSV to any writer.
///
/// The rate column holds the first rate entry for the hour and is empty when
/// the tariff leaves the hour uncovered. Device ids are joined with `;` in
/// ascending order.
///
/// # Errors
///
/// Returns a `csv::Error` if writing fails.
pub fn write_csv(run: &ScheduleRun, rates: &[HourlyRate], writer: impl Write) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(HEADER)?;

    for hour in 0..CYCLE_HOURS {
        let rate = rates
            .iter()
            .find(|r| r.hour == hour)
            .map(|r| format!("{:.4}", r.value))
            .unwrap_or_default();
        let devices = run.ledger.active_at(hour).collect::<Vec<_>>().join(";");
        wtr.write_record(&[
            hour.to_string(),
            rate,
            format!("{:.1}", run.ledger.load_at(hour)),
            format!("{:.1}", run.ledger.headroom_at(hour)),
            devices,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
