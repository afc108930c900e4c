pub mod generator;
pub mod insurance;
pub mod rates;

pub use generator::{
    allocate_insurance, build_schedule, generate_schedule, Borrower, InstallmentStatus,
    InsuranceMode, LoanRequest, LoanSchedule, ScheduleRow, ScheduleSummary, SummaryValue,
};
pub use insurance::insurance_pct;
pub use rates::{quote_rates, snap_installment_count, weekly_rate, PrincipalBracket, RateQuote};
