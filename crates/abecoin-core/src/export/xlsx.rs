use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, Worksheet};

use crate::labels;
use crate::schedule::{LoanSchedule, SummaryValue};
use crate::types::Money;
use crate::{LoanScheduleError, LoanScheduleResult};

/// Two-sheet workbook: schedule rows, then the summary as concept/value pairs.
///
/// The document creation time is pinned to the issue date, so the same
/// schedule always yields the same workbook contents. Issue dates Excel cannot
/// represent leave the creation time at its default.
pub fn schedule_xlsx(schedule: &LoanSchedule) -> LoanScheduleResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    if let Some(created) = creation_datetime(schedule.issue_date) {
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));
    }

    let header = Format::new().set_bold();
    let money = Format::new().set_num_format("0.00");

    let mut rows_sheet = Worksheet::new();
    rows_sheet.set_name(labels::SCHEDULE_SHEET)?;
    for (col, title) in labels::ROW_HEADERS.iter().enumerate() {
        rows_sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (idx, row) in schedule.rows.iter().enumerate() {
        let r = idx as u32 + 1;
        rows_sheet.write_number(r, 0, row.installment)?;
        let due = row.due_date.format(labels::DUE_DATE_FORMAT).to_string();
        rows_sheet.write_string(r, 1, due)?;
        let amounts = [
            row.opening_balance,
            row.amortization,
            row.interest,
            row.base_installment,
            row.insurance_charge,
            row.total_installment,
        ];
        for (offset, amount) in amounts.into_iter().enumerate() {
            let col = 2 + offset as u16;
            rows_sheet.write_number_with_format(r, col, to_cell(amount)?, &money)?;
        }
        rows_sheet.write_string(r, 8, row.status.label())?;
    }
    rows_sheet.autofit();
    workbook.push_worksheet(rows_sheet);

    let mut summary_sheet = Worksheet::new();
    summary_sheet.set_name(labels::SUMMARY_SHEET)?;
    for (col, title) in labels::SUMMARY_HEADERS.iter().enumerate() {
        summary_sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (idx, (concept, value)) in schedule.summary.entries().into_iter().enumerate() {
        let r = idx as u32 + 1;
        summary_sheet.write_string(r, 0, concept)?;
        match value {
            SummaryValue::Text(text) => {
                summary_sheet.write_string(r, 1, text)?;
            }
            SummaryValue::Money(amount) => {
                summary_sheet.write_number_with_format(r, 1, to_cell(amount)?, &money)?;
            }
            SummaryValue::Percent(pct) => {
                summary_sheet.write_number(r, 1, to_cell(pct)?)?;
            }
            SummaryValue::Count(n) => {
                summary_sheet.write_number(r, 1, n)?;
            }
        }
    }
    summary_sheet.autofit();
    workbook.push_worksheet(summary_sheet);

    Ok(workbook.save_to_buffer()?)
}

/// Excel only stores dates in 1900..=9999.
fn creation_datetime(date: NaiveDate) -> Option<ExcelDateTime> {
    if !(1900..=9999).contains(&date.year()) {
        return None;
    }
    let year = u16::try_from(date.year()).ok()?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8).ok()
}

fn to_cell(value: Money) -> LoanScheduleResult<f64> {
    value.to_f64().ok_or_else(|| {
        LoanScheduleError::ExportError(format!("xlsx: {value} is not representable"))
    })
}
