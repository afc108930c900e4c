pub mod error;
pub mod labels;
pub mod schedule;
pub mod types;

#[cfg(feature = "export")]
pub mod export;

pub use error::LoanScheduleError;
pub use types::*;

/// Standard result type for all schedule operations
pub type LoanScheduleResult<T> = Result<T, LoanScheduleError>;
