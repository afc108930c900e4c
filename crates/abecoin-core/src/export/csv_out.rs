use crate::export::row_cells;
use crate::labels;
use crate::schedule::LoanSchedule;
use crate::LoanScheduleResult;

/// Schedule rows as UTF-8 CSV with a localized header line.
pub fn schedule_csv(schedule: &LoanSchedule) -> LoanScheduleResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(labels::ROW_HEADERS)?;
    for row in &schedule.rows {
        wtr.write_record(row_cells(row))?;
    }
    finish(wtr)
}

/// Summary as two-column concept/value CSV.
pub fn summary_csv(schedule: &LoanSchedule) -> LoanScheduleResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(labels::SUMMARY_HEADERS)?;
    for (concept, value) in schedule.summary.entries() {
        wtr.write_record([concept.to_string(), value.to_string()])?;
    }
    finish(wtr)
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> LoanScheduleResult<Vec<u8>> {
    wtr.into_inner()
        .map_err(|e| crate::LoanScheduleError::ExportError(format!("csv: {}", e.error())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{build_schedule, Borrower, InsuranceMode, LoanRequest};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn schedule() -> LoanSchedule {
        let request = LoanRequest {
            borrower: Borrower {
                name: "Rosa Quispe".into(),
                document_id: "45871236".into(),
                address: "Jr. Los Olivos 123, Huancayo".into(),
            },
            principal: dec!(200),
            installment_count: 3,
            insurance_mode: InsuranceMode::Prorated,
            start_date: None,
        };
        build_schedule(&request, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .unwrap()
            .result
    }

    #[test]
    fn test_schedule_csv_lines() {
        let text = String::from_utf8(schedule_csv(&schedule()).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "N° Cuota,Fecha Venc.,Saldo Capital,Amortización,Interés,Cuota Base,Degravamen,Cuota Final,Estado"
        );
        assert_eq!(
            lines[1],
            "1,26/10/2026,200.00,66.67,6.00,72.67,0.53,73.20,PENDIENTE"
        );
        assert_eq!(
            lines[3],
            "3,09/11/2026,66.66,66.67,6.00,72.67,0.54,73.21,PENDIENTE"
        );
    }

    #[test]
    fn test_summary_csv_quotes_commas() {
        let text = String::from_utf8(summary_csv(&schedule()).unwrap()).unwrap();
        assert!(text.starts_with("Concepto,Valor\n"));
        assert!(text.contains("Dirección,\"Jr. Los Olivos 123, Huancayo\"\n"));
        assert!(text.contains("Total a Pagar (S/),219.60\n"));
    }

    #[test]
    fn test_csv_is_deterministic() {
        let s = schedule();
        assert_eq!(schedule_csv(&s).unwrap(), schedule_csv(&s).unwrap());
    }
}
