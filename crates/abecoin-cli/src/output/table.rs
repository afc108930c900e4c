use abecoin_core::export::row_cells;
use abecoin_core::labels;
use abecoin_core::schedule::LoanSchedule;
use abecoin_core::types::{format_money, Money};
use abecoin_core::ComputationOutput;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::display_value;

/// Width of the longest bar in the balance chart.
const CHART_WIDTH: usize = 40;

/// Schedule table, summary, balance chart and any warnings.
pub fn print_schedule(output: &ComputationOutput<LoanSchedule>) {
    let schedule = &output.result;

    let mut rows = Builder::default();
    rows.push_record(labels::ROW_HEADERS);
    for row in &schedule.rows {
        rows.push_record(row_cells(row));
    }
    println!("{}", Table::from(rows));

    let mut summary = Builder::default();
    summary.push_record(labels::SUMMARY_HEADERS);
    for (concept, value) in schedule.summary.entries() {
        summary.push_record([concept.to_string(), value.to_string()]);
    }
    println!("\n{}", Table::from(summary));

    println!("\nEvolución del saldo ({})", labels::CURRENCY_SYMBOL);
    let series = schedule.balance_series();
    let peak = series
        .iter()
        .map(|(_, balance)| *balance)
        .max()
        .unwrap_or(Decimal::ZERO);
    for (installment, balance) in series {
        println!(
            "  {:>3} | {:<width$} {}",
            installment,
            "#".repeat(bar_len(balance, peak)),
            format_money(balance),
            width = CHART_WIDTH
        );
    }

    if !output.warnings.is_empty() {
        println!("\nWarnings:");
        for w in &output.warnings {
            println!("  - {}", w);
        }
    }

    println!("\nMethodology: {}", output.methodology);
}

/// Field/value table for a flat result object.
pub fn print_fields(value: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                builder.push_record([key.clone(), display_value(val)]);
            }
        }
        other => builder.push_record(["value".to_string(), display_value(other)]),
    }
    println!("{}", Table::from(builder));
}

fn bar_len(balance: Money, peak: Money) -> usize {
    if peak <= Decimal::ZERO || balance <= Decimal::ZERO {
        return 0;
    }
    (balance / peak * Decimal::from(CHART_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
}
