use abecoin_core::export::schedule_csv;
use abecoin_core::schedule::LoanSchedule;
use serde_json::Value;
use std::io::{self, Write};

use super::display_value;

/// Write the localized schedule CSV to stdout, byte for byte as exported.
pub fn print_schedule_csv(schedule: &LoanSchedule) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = schedule_csv(schedule)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}

/// Write a flat result object as two-column `field,value` CSV.
pub fn print_fields_csv(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(io::stdout().lock());
    wtr.write_record(["field", "value"])?;
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                wtr.write_record([key.as_str(), &display_value(val)])?;
            }
        }
        other => wtr.write_record(["value", &display_value(other)])?,
    }
    wtr.flush()?;
    Ok(())
}
