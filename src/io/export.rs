//! CSV export for amortisation schedules and availability grids.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::availability::WeeklyAvailability;
use crate::finance::AmortisationRow;

/// Column header for amortisation schedule export.
pub const AMORTISATION_HEADER: [&str; 5] =
    ["period", "principal", "interest", "payment", "balance"];

/// Column header for availability grid export.
pub const AVAILABILITY_HEADER: [&str; 4] = ["day_of_week", "hour_of_day", "status", "chargeable"];

/// Exports an amortisation schedule to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_amortisation_csv(rows: &[AmortisationRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_amortisation_csv(rows, io::BufWriter::new(file))
}

/// Writes an amortisation schedule as CSV to any writer.
///
/// Amounts are written with two decimals; output is deterministic for
/// identical input.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_amortisation_csv(rows: &[AmortisationRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(AMORTISATION_HEADER)?;

    for r in rows {
        wtr.write_record(&[
            r.period.to_string(),
            format!("{:.2}", r.principal),
            format!("{:.2}", r.interest),
            format!("{:.2}", r.payment),
            format!("{:.2}", r.balance),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports a weekly availability grid to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_availability_csv(week: &WeeklyAvailability, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_availability_csv(week, io::BufWriter::new(file))
}

/// Writes a weekly availability grid as CSV, one row per hour of the week.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_availability_csv(week: &WeeklyAvailability, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(AVAILABILITY_HEADER)?;

    for (day, hour, status) in week.iter() {
        wtr.write_record(&[
            day.to_string(),
            hour.to_string(),
            status.to_string(),
            status.is_onsite().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
