use napi::bindgen_prelude::Buffer;
use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use abecoin_core::schedule::{self, LoanRequest, LoanSchedule};
use abecoin_core::ComputationOutput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse a JSON `LoanRequest` and generate its schedule.
fn run_schedule(input_json: &str) -> NapiResult<ComputationOutput<LoanSchedule>> {
    let request: LoanRequest = serde_json::from_str(input_json).map_err(to_napi_error)?;
    schedule::generate_schedule(&request).map_err(to_napi_error)
}

fn schedule_from_json(input_json: &str) -> NapiResult<LoanSchedule> {
    Ok(run_schedule(input_json)?.result)
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_schedule(input_json: String) -> NapiResult<String> {
    let output = run_schedule(&input_json)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn quote_rates(principal: String, installment_count: u32) -> NapiResult<String> {
    let principal: Decimal = principal.parse().map_err(to_napi_error)?;
    let quote = schedule::quote_rates(principal, installment_count);
    serde_json::to_string(&quote).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[napi]
pub fn schedule_csv(input_json: String) -> NapiResult<String> {
    let schedule = schedule_from_json(&input_json)?;
    let bytes = abecoin_core::export::schedule_csv(&schedule).map_err(to_napi_error)?;
    String::from_utf8(bytes).map_err(to_napi_error)
}

#[napi]
pub fn schedule_xlsx(input_json: String) -> NapiResult<Buffer> {
    let schedule = schedule_from_json(&input_json)?;
    let bytes = abecoin_core::export::schedule_xlsx(&schedule).map_err(to_napi_error)?;
    Ok(bytes.into())
}

#[napi]
pub fn export_file_name(input_json: String, extension: String) -> NapiResult<String> {
    let schedule = schedule_from_json(&input_json)?;
    Ok(schedule.export_file_name(&extension))
}
