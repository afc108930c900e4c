use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanScheduleError {
    #[error("Invalid principal: {0} (must be greater than zero)")]
    InvalidPrincipal(Decimal),

    #[error("Invalid installment count: {0} (must be at least 1)")]
    InvalidInstallmentCount(u32),

    #[error("Unsupported insurance mode: '{0}' (expected 'prorated' or 'upfront')")]
    UnsupportedMode(String),

    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanScheduleError {
    fn from(e: serde_json::Error) -> Self {
        LoanScheduleError::SerializationError(e.to_string())
    }
}

#[cfg(feature = "export")]
impl From<csv::Error> for LoanScheduleError {
    fn from(e: csv::Error) -> Self {
        LoanScheduleError::ExportError(format!("csv: {e}"))
    }
}

#[cfg(feature = "export")]
impl From<rust_xlsxwriter::XlsxError> for LoanScheduleError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        LoanScheduleError::ExportError(format!("xlsx: {e}"))
    }
}
