//! Spreadsheet and delimited-text renderings of a generated schedule.
//!
//! Values are written exactly as the generator produced them; nothing here
//! re-rounds an amount.

pub mod csv_out;
pub mod xlsx;

pub use csv_out::{schedule_csv, summary_csv};
pub use xlsx::schedule_xlsx;

use crate::labels;
use crate::schedule::ScheduleRow;
use crate::types::format_money;

/// One schedule row as display strings, in header order.
pub fn row_cells(row: &ScheduleRow) -> [String; 9] {
    [
        row.installment.to_string(),
        row.due_date.format(labels::DUE_DATE_FORMAT).to_string(),
        format_money(row.opening_balance),
        format_money(row.amortization),
        format_money(row.interest),
        format_money(row.base_installment),
        format_money(row.insurance_charge),
        format_money(row.total_installment),
        row.status.label().to_string(),
    ]
}
