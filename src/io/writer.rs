//! Result file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::models::OptimizationOutcome;

/// Writes an optimization outcome to a result file.
///
/// The artifact has three lines: the total cost, the elapsed wall-clock
/// time, and the tour as space-separated city indices. Elapsed time is
/// reported in milliseconds, switching to a minutes form (with the raw
/// millisecond count in parentheses) from one minute up.
pub fn write_outcome<P: AsRef<Path>>(path: P, outcome: &OptimizationOutcome) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_outcome_to(&mut writer, outcome)?;
    writer.flush()?;
    Ok(())
}

/// Writes an optimization outcome to any writer.
///
/// # Examples
///
/// ```
/// use u_tsp::io::write_outcome_to;
/// use u_tsp::models::{OptimizationOutcome, Tour, TourResult};
///
/// let outcome = OptimizationOutcome::new(TourResult::new(Tour::identity(3), 15), 12);
/// let mut buf = Vec::new();
/// write_outcome_to(&mut buf, &outcome).unwrap();
/// assert_eq!(
///     String::from_utf8(buf).unwrap(),
///     "Total cost: 15\nExecution time: 12 ms\nTour: 0 1 2 \n"
/// );
/// ```
pub fn write_outcome_to<W: Write>(
    writer: &mut W,
    outcome: &OptimizationOutcome,
) -> Result<(), Error> {
    writeln!(writer, "Total cost: {}", outcome.cost())?;
    writeln!(
        writer,
        "Execution time: {}",
        format_elapsed(outcome.elapsed_millis())
    )?;
    write!(writer, "Tour: ")?;
    for &city in outcome.tour().cities() {
        write!(writer, "{city} ")?;
    }
    writeln!(writer)?;
    Ok(())
}

fn format_elapsed(millis: u64) -> String {
    if millis < 60_000 {
        format!("{millis} ms")
    } else {
        format!("{:.2} minutes ({millis} ms)", millis as f64 / 60_000.0)
    }
}
