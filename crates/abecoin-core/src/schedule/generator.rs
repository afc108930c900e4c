use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

use crate::labels;
use crate::schedule::insurance::insurance_pct;
use crate::schedule::rates::{snap_installment_count, weekly_rate, PrincipalBracket};
use crate::types::*;
use crate::{LoanScheduleError, LoanScheduleResult};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// How the credit-life insurance charge is collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum InsuranceMode {
    /// Spread over every installment, remainder on the last one
    #[default]
    Prorated,
    /// Charged in full with the first installment
    Upfront,
}

impl FromStr for InsuranceMode {
    type Err = LoanScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prorated" => Ok(Self::Prorated),
            "upfront" => Ok(Self::Upfront),
            _ => Err(LoanScheduleError::UnsupportedMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for InsuranceMode {
    type Error = LoanScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for InsuranceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prorated => write!(f, "prorated"),
            Self::Upfront => write!(f, "upfront"),
        }
    }
}

/// Borrower identity. Carried through to the summary, never used in the maths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrower {
    pub name: String,
    pub document_id: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub borrower: Borrower,
    pub principal: Money,
    /// Number of weekly installments
    pub installment_count: u32,
    #[serde(default)]
    pub insurance_mode: InsuranceMode,
    /// Issue date; today when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstallmentStatus {
    Pending,
}

impl InstallmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => labels::STATUS_PENDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub installment: u32,
    pub due_date: NaiveDate,
    /// Principal outstanding before this installment is paid
    pub opening_balance: Money,
    pub amortization: Money,
    pub interest: Money,
    pub base_installment: Money,
    pub insurance_charge: Money,
    pub total_installment: Money,
    pub status: InstallmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub borrower: Borrower,
    pub principal: Money,
    pub weekly_rate_pct: Decimal,
    pub installment_count: u32,
    pub total_interest: Money,
    pub total_insurance: Money,
    pub total_payable: Money,
}

/// A summary value, typed so spreadsheets can keep numbers numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Text(String),
    Money(Money),
    Percent(Decimal),
    Count(u32),
}

impl std::fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Money(m) => write!(f, "{}", format_money(*m)),
            Self::Percent(p) => write!(f, "{}", p.normalize()),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

impl ScheduleSummary {
    /// Concept/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, SummaryValue)> {
        vec![
            (labels::SUMMARY_NAME, SummaryValue::Text(self.borrower.name.clone())),
            (
                labels::SUMMARY_DOCUMENT_ID,
                SummaryValue::Text(self.borrower.document_id.clone()),
            ),
            (labels::SUMMARY_ADDRESS, SummaryValue::Text(self.borrower.address.clone())),
            (labels::SUMMARY_PRINCIPAL, SummaryValue::Money(self.principal)),
            (labels::SUMMARY_WEEKLY_RATE, SummaryValue::Percent(self.weekly_rate_pct)),
            (labels::SUMMARY_INSTALLMENTS, SummaryValue::Count(self.installment_count)),
            (labels::SUMMARY_TOTAL_INTEREST, SummaryValue::Money(self.total_interest)),
            (labels::SUMMARY_TOTAL_INSURANCE, SummaryValue::Money(self.total_insurance)),
            (labels::SUMMARY_TOTAL_PAYABLE, SummaryValue::Money(self.total_payable)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub issue_date: NaiveDate,
    pub insurance_mode: InsuranceMode,
    pub weekly_rate: Rate,
    pub insurance_pct: Rate,
    pub amortization: Money,
    pub weekly_interest: Money,
    pub rows: Vec<ScheduleRow>,
    pub summary: ScheduleSummary,
}

impl LoanSchedule {
    /// (installment, opening balance) points for a balance chart.
    pub fn balance_series(&self) -> Vec<(u32, Money)> {
        self.rows
            .iter()
            .map(|r| (r.installment, r.opening_balance))
            .collect()
    }

    /// Download name for this schedule, e.g. `cronograma_12345678.xlsx`.
    pub fn export_file_name(&self, extension: &str) -> String {
        let id: String = self
            .summary
            .borrower
            .document_id
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        format!("{}_{id}.{extension}", labels::EXPORT_FILE_STEM)
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the schedule, issuing the loan on `request.start_date` or today.
pub fn generate_schedule(
    request: &LoanRequest,
) -> LoanScheduleResult<ComputationOutput<LoanSchedule>> {
    let issue_date = request
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());
    build_schedule(request, issue_date)
}

/// Generate the schedule for a loan issued on `issue_date`.
///
/// `issue_date` takes precedence over `request.start_date`. Output depends only
/// on the request and the date.
pub fn build_schedule(
    request: &LoanRequest,
    issue_date: NaiveDate,
) -> LoanScheduleResult<ComputationOutput<LoanSchedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_request(request)?;

    let principal = request.principal;
    let count = request.installment_count;
    let n = Decimal::from(count);

    let rate = weekly_rate(principal, count);
    let pct = insurance_pct(principal);

    if PrincipalBracket::classify(principal) == PrincipalBracket::Unbracketed {
        log::warn!("principal {principal} outside rate card, default weekly rate {rate}");
        warnings.push(format!(
            "Principal {principal} is outside the (10, 600] rate card; default weekly rate {}% applied",
            (rate * dec!(100)).normalize()
        ));
    }
    let priced = snap_installment_count(count);
    if priced != count {
        log::warn!("{count} installments priced at the {priced}-installment rate");
        warnings.push(format!("{count} installments priced at the {priced}-installment rate"));
    }

    let amortization = round_money(principal / n);
    let weekly_interest = checked_amount(principal.checked_mul(rate))?;
    let insurance_total = checked_amount(principal.checked_mul(pct))?;
    let charges = allocate_insurance(insurance_total, count, request.insurance_mode);

    log::debug!(
        "rate={rate} insurance_pct={pct} amortization={amortization} interest={weekly_interest} insurance_total={insurance_total}"
    );

    if request.insurance_mode == InsuranceMode::Prorated
        && count > 1
        && insurance_total > Decimal::ZERO
        && charges[0].is_zero()
    {
        warnings.push(format!(
            "Prorated insurance rounds to 0.00 per installment; {} falls on installment {count}",
            format_money(insurance_total)
        ));
    }

    let base_installment = checked_amount(amortization.checked_add(weekly_interest))?;
    let mut rows = Vec::with_capacity(charges.len());
    let mut balance = principal;

    for (idx, charge) in charges.iter().enumerate() {
        let installment = idx as u32 + 1;
        let due_date = issue_date
            .checked_add_days(Days::new(7 * u64::from(installment)))
            .ok_or_else(|| {
                LoanScheduleError::DateError(format!(
                    "due date of installment {installment} overflows the calendar"
                ))
            })?;

        rows.push(ScheduleRow {
            installment,
            due_date,
            opening_balance: round_money(balance),
            amortization,
            interest: weekly_interest,
            base_installment,
            insurance_charge: *charge,
            total_installment: checked_amount(base_installment.checked_add(*charge))?,
            status: InstallmentStatus::Pending,
        });

        balance = round_money(balance - amortization);
    }

    let total_interest = checked_amount(weekly_interest.checked_mul(n))?;
    let total_payable = checked_amount(
        principal
            .checked_add(total_interest)
            .and_then(|v| v.checked_add(insurance_total)),
    )?;
    let summary = ScheduleSummary {
        borrower: request.borrower.clone(),
        principal,
        weekly_rate_pct: (rate * dec!(100)).round_dp(3),
        installment_count: count,
        total_interest,
        total_insurance: insurance_total,
        total_payable,
    };

    log::info!(
        "schedule generated: principal={principal} installments={count} mode={} total_payable={}",
        request.insurance_mode,
        summary.total_payable
    );

    let schedule = LoanSchedule {
        issue_date,
        insurance_mode: request.insurance_mode,
        weekly_rate: rate,
        insurance_pct: pct,
        amortization,
        weekly_interest,
        rows,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Flat-rate weekly schedule (interest on original principal)",
        &serde_json::json!({
            "principal": principal.to_string(),
            "installment_count": count,
            "insurance_mode": request.insurance_mode.to_string(),
            "weekly_rate": rate.to_string(),
            "insurance_pct": pct.to_string(),
            "issue_date": issue_date.to_string(),
        }),
        warnings,
        elapsed,
        schedule,
    ))
}

/// Split the insurance total across `count` installments.
///
/// The result always sums to `total`. Returns an empty allocation for zero
/// installments.
pub fn allocate_insurance(total: Money, count: u32, mode: InsuranceMode) -> Vec<Money> {
    if count == 0 {
        return Vec::new();
    }
    let len = count as usize;
    match mode {
        InsuranceMode::Prorated => {
            let base = floor_money(total / Decimal::from(count));
            let mut charges = vec![base; len];
            let remainder = round_money(total - base * Decimal::from(count));
            charges[len - 1] = round_money(base + remainder);
            charges
        }
        InsuranceMode::Upfront => {
            let mut charges = vec![Decimal::ZERO; len];
            charges[0] = total;
            charges
        }
    }
}

/// Rounded amount, or an error when the principal is too large for `Decimal`.
fn checked_amount(value: Option<Decimal>) -> LoanScheduleResult<Money> {
    value
        .map(round_money)
        .ok_or_else(|| LoanScheduleError::InvalidInput {
            field: "principal".into(),
            reason: "Principal is too large to schedule".into(),
        })
}

fn validate_request(request: &LoanRequest) -> LoanScheduleResult<()> {
    if request.principal <= Decimal::ZERO {
        return Err(LoanScheduleError::InvalidPrincipal(request.principal));
    }
    if request.installment_count == 0 {
        return Err(LoanScheduleError::InvalidInstallmentCount(
            request.installment_count,
        ));
    }
    if request.borrower.name.trim().is_empty() {
        return Err(LoanScheduleError::InvalidInput {
            field: "borrower.name".into(),
            reason: "Borrower name is required".into(),
        });
    }
    if request.borrower.document_id.trim().is_empty() {
        return Err(LoanScheduleError::InvalidInput {
            field: "borrower.document_id".into(),
            reason: "Borrower document id is required".into(),
        });
    }
    Ok(())
}
