pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use abecoin_core::schedule::LoanSchedule;
use abecoin_core::ComputationOutput;
use serde_json::Value;

use crate::OutputFormat;

/// Render a generated schedule in the requested format.
pub fn format_schedule(
    format: &OutputFormat,
    output: &ComputationOutput<LoanSchedule>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => json::print_json(output),
        OutputFormat::Table => table::print_schedule(output),
        OutputFormat::Csv => csv_out::print_schedule_csv(&output.result)?,
        OutputFormat::Minimal => minimal::print_schedule_minimal(&output.result),
    }
    Ok(())
}

/// Render a flat command result (rate quote, export report).
pub fn format_output(
    format: &OutputFormat,
    value: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_fields(value),
        OutputFormat::Csv => csv_out::print_fields_csv(value)?,
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
    Ok(())
}

/// Plain-text rendering of a JSON value for table, CSV and minimal output.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(display_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
