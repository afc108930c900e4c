use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use abecoin_core::export::{schedule_csv, schedule_xlsx};
use abecoin_core::schedule::{generate_schedule, Borrower, InsuranceMode, LoanRequest, LoanSchedule};
use abecoin_core::ComputationOutput;

use crate::input;

/// Loan details shared by `schedule` and `export`
#[derive(Args)]
pub struct LoanArgs {
    /// Path to a JSON or YAML loan request (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Borrower full name
    #[arg(long)]
    pub name: Option<String>,

    /// Borrower document id (DNI)
    #[arg(long)]
    pub dni: Option<String>,

    /// Borrower address
    #[arg(long, default_value = "")]
    pub address: String,

    /// Loan amount (S/)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Number of weekly installments
    #[arg(long)]
    pub installments: Option<u32>,

    /// How to collect the insurance charge: prorated or upfront
    #[arg(long, default_value = "prorated")]
    pub mode: InsuranceMode,

    /// Issue date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for file export
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Write the schedule as CSV
    #[arg(long)]
    pub csv: bool,

    /// Write the schedule and summary as an XLSX workbook
    #[arg(long)]
    pub xlsx: bool,

    /// Directory the files are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

pub fn run_schedule(
    args: ScheduleArgs,
) -> Result<ComputationOutput<LoanSchedule>, Box<dyn std::error::Error>> {
    let request = resolve_request(args.loan)?;
    Ok(generate_schedule(&request)?)
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(args.loan)?;
    let output = generate_schedule(&request)?;
    let schedule = &output.result;

    // Neither flag means both files.
    let (want_csv, want_xlsx) = match (args.csv, args.xlsx) {
        (false, false) => (true, true),
        flags => flags,
    };

    fs::create_dir_all(&args.out_dir)
        .map_err(|e| format!("Failed to create '{}': {}", args.out_dir.display(), e))?;

    let mut written = Vec::new();
    if want_csv {
        let path = args.out_dir.join(schedule.export_file_name("csv"));
        write_file(&path, &schedule_csv(schedule)?)?;
        written.push(path);
    }
    if want_xlsx {
        let path = args.out_dir.join(schedule.export_file_name("xlsx"));
        write_file(&path, &schedule_xlsx(schedule)?)?;
        written.push(path);
    }

    Ok(serde_json::json!({
        "written": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "installments": schedule.rows.len(),
        "total_payable": schedule.summary.total_payable.to_string(),
        "warnings": output.warnings,
    }))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, bytes).map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Build the request from --input, piped stdin, or the individual flags, in
/// that order. --start-date fills in a missing issue date from a file.
fn resolve_request(args: LoanArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    let mut request: LoanRequest = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(request) = input::stdin::read_stdin()? {
        request
    } else {
        let name = args.name.ok_or("--name is required (or provide --input)")?;
        let document_id = args.dni.ok_or("--dni is required (or provide --input)")?;
        let principal = args
            .principal
            .ok_or("--principal is required (or provide --input)")?;
        let installment_count = args
            .installments
            .ok_or("--installments is required (or provide --input)")?;

        LoanRequest {
            borrower: Borrower {
                name,
                document_id,
                address: args.address,
            },
            principal,
            installment_count,
            insurance_mode: args.mode,
            start_date: None,
        }
    };

    if request.start_date.is_none() {
        request.start_date = args.start_date;
    }
    Ok(request)
}
