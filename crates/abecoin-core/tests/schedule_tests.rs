use abecoin_core::schedule::{
    build_schedule, insurance_pct, Borrower, InsuranceMode, LoanRequest, LoanSchedule,
};
use abecoin_core::types::round_money;
use abecoin_core::LoanScheduleError;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn request(principal: Decimal, count: u32, mode: InsuranceMode) -> LoanRequest {
    LoanRequest {
        borrower: Borrower {
            name: "Juan Mamani".into(),
            document_id: "70214589".into(),
            address: "Av. Huancavelica 455".into(),
        },
        principal,
        installment_count: count,
        insurance_mode: mode,
        start_date: None,
    }
}

fn schedule(principal: Decimal, count: u32, mode: InsuranceMode) -> LoanSchedule {
    build_schedule(&request(principal, count, mode), issue_date())
        .unwrap()
        .result
}

fn principals() -> Vec<Decimal> {
    vec![
        dec!(5),
        dec!(10),
        dec!(10.50),
        dec!(99.99),
        dec!(150),
        dec!(200),
        dec!(333.33),
        dec!(400),
        dec!(457.10),
        dec!(600),
        dec!(750),
        dec!(2500),
    ]
}

const MODES: [InsuranceMode; 2] = [InsuranceMode::Prorated, InsuranceMode::Upfront];

// ===========================================================================
// Known answers
// ===========================================================================

#[test]
fn test_prorated_200_over_3_known_answer() {
    let s = schedule(dec!(200), 3, InsuranceMode::Prorated);
    assert_eq!(s.weekly_rate, dec!(0.03));
    assert_eq!(s.amortization, dec!(66.67));
    assert_eq!(s.weekly_interest, dec!(6.00));
    assert_eq!(
        s.rows.iter().map(|r| r.insurance_charge).collect::<Vec<_>>(),
        vec![dec!(0.53), dec!(0.53), dec!(0.54)]
    );
    assert_eq!(s.summary.total_interest, dec!(18.00));
    assert_eq!(s.summary.total_payable, dec!(219.60));
}

#[test]
fn test_upfront_500_over_2_known_answer() {
    let s = schedule(dec!(500), 2, InsuranceMode::Upfront);
    assert_eq!(s.weekly_rate, dec!(0.025));
    assert_eq!(s.summary.total_insurance, dec!(7.50));
    assert_eq!(s.rows[0].insurance_charge, dec!(7.50));
    assert_eq!(s.rows[1].insurance_charge, Decimal::ZERO);
}

#[test]
fn test_medium_bracket_three_installments() {
    // 300 * 0.0167 = 5.01 per week; insurance 300 * 0.01 = 3.00 split evenly
    let s = schedule(dec!(300), 3, InsuranceMode::Prorated);
    assert_eq!(s.weekly_interest, dec!(5.01));
    assert_eq!(s.amortization, dec!(100));
    assert!(s.rows.iter().all(|r| r.insurance_charge == dec!(1.00)));
    assert_eq!(s.summary.total_interest, dec!(15.03));
    assert_eq!(s.summary.total_payable, dec!(318.03));
    assert_eq!(s.summary.weekly_rate_pct, dec!(1.67));
}

#[test]
fn test_final_balance_may_undershoot() {
    // 100 / 3 = 33.33; opening balances 100, 66.67, 33.34 and nothing is corrected
    let s = schedule(dec!(100), 3, InsuranceMode::Prorated);
    assert_eq!(
        s.balance_series(),
        vec![(1, dec!(100)), (2, dec!(66.67)), (3, dec!(33.34))]
    );
}

// ===========================================================================
// Properties over a grid of loans
// ===========================================================================

#[test]
fn test_insurance_sums_to_total_in_both_modes() {
    for principal in principals() {
        for count in 1..=12 {
            for mode in MODES {
                let s = schedule(principal, count, mode);
                let expected = round_money(principal * insurance_pct(principal));
                let allocated: Decimal = s.rows.iter().map(|r| r.insurance_charge).sum();
                assert_eq!(
                    allocated, expected,
                    "insurance leak for principal={principal} count={count} mode={mode}"
                );
                assert_eq!(s.summary.total_insurance, expected);
            }
        }
    }
}

#[test]
fn test_amortization_sum_matches_rounded_installment() {
    for principal in principals() {
        for count in 1..=12 {
            let s = schedule(principal, count, InsuranceMode::Prorated);
            let per_row = round_money(principal / Decimal::from(count));
            let total: Decimal = s.rows.iter().map(|r| r.amortization).sum();
            assert_eq!(total, round_money(per_row * Decimal::from(count)));
            assert!((total - principal).abs() <= dec!(0.01) * Decimal::from(count));
        }
    }
}

#[test]
fn test_row_indices_contiguous() {
    for count in 1..=30 {
        let s = schedule(dec!(250), count, InsuranceMode::Prorated);
        assert_eq!(s.rows.len(), count as usize);
        for (idx, row) in s.rows.iter().enumerate() {
            assert_eq!(row.installment, idx as u32 + 1);
        }
    }
}

#[test]
fn test_constant_amortization_and_interest() {
    let s = schedule(dec!(457.10), 7, InsuranceMode::Upfront);
    assert!(s.rows.iter().all(|r| r.amortization == s.amortization));
    assert!(s.rows.iter().all(|r| r.interest == s.weekly_interest));
    assert!(s
        .rows
        .iter()
        .all(|r| r.total_installment == round_money(r.base_installment + r.insurance_charge)));
}

#[test]
fn test_opening_balance_decreases_by_amortization() {
    let s = schedule(dec!(333.33), 4, InsuranceMode::Prorated);
    for pair in s.rows.windows(2) {
        assert_eq!(
            pair[0].opening_balance - pair[1].opening_balance,
            s.amortization
        );
    }
}

#[test]
fn test_upfront_charges_only_first_row() {
    for principal in principals() {
        let s = schedule(principal, 5, InsuranceMode::Upfront);
        assert_eq!(s.rows[0].insurance_charge, s.summary.total_insurance);
        assert!(s.rows[1..].iter().all(|r| r.insurance_charge.is_zero()));
    }
}

#[test]
fn test_total_payable_identity() {
    for principal in principals() {
        for count in [1, 2, 3, 4, 8] {
            let s = schedule(principal, count, InsuranceMode::Prorated);
            assert_eq!(
                s.summary.total_payable,
                round_money(principal + s.summary.total_interest + s.summary.total_insurance)
            );
        }
    }
}

// ===========================================================================
// Determinism and request handling
// ===========================================================================

#[test]
fn test_same_inputs_same_schedule() {
    let req = request(dec!(420), 4, InsuranceMode::Prorated);
    let first = build_schedule(&req, issue_date()).unwrap();
    let second = build_schedule(&req, issue_date()).unwrap();
    assert_eq!(first.result, second.result);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn test_request_from_json_defaults() {
    let req: LoanRequest = serde_json::from_str(
        r#"{
            "borrower": { "name": "Juan Mamani", "document_id": "70214589" },
            "principal": "200",
            "installment_count": 3,
            "start_date": "2026-10-19"
        }"#,
    )
    .unwrap();
    assert_eq!(req.insurance_mode, InsuranceMode::Prorated);
    assert_eq!(req.borrower.address, "");
    let out = abecoin_core::schedule::generate_schedule(&req).unwrap();
    assert_eq!(out.result.issue_date, issue_date());
    assert_eq!(out.result.summary.total_payable, dec!(219.60));
}

#[test]
fn test_request_with_unknown_mode_rejected() {
    let err = serde_json::from_str::<LoanRequest>(
        r#"{
            "borrower": { "name": "Juan Mamani", "document_id": "70214589" },
            "principal": "200",
            "installment_count": 3,
            "insurance_mode": "monthly"
        }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unsupported insurance mode"));
}

#[test]
fn test_invalid_inputs_rejected() {
    assert!(matches!(
        build_schedule(&request(dec!(0), 3, InsuranceMode::Prorated), issue_date()),
        Err(LoanScheduleError::InvalidPrincipal(_))
    ));
    assert!(matches!(
        build_schedule(&request(dec!(200), 0, InsuranceMode::Upfront), issue_date()),
        Err(LoanScheduleError::InvalidInstallmentCount(0))
    ));
    assert!(matches!(
        build_schedule(&request(Decimal::MAX, 4, InsuranceMode::Prorated), issue_date()),
        Err(LoanScheduleError::InvalidInput { ref field, .. }) if field == "principal"
    ));
}
