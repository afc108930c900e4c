use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::schedule::insurance::insurance_pct;
use crate::types::*;

/// Installment counts the rate card is priced for.
pub const INSTALLMENT_TIERS: [u32; 3] = [2, 3, 4];

/// Weekly rate applied when the principal falls outside every bracket.
pub const DEFAULT_WEEKLY_RATE: Rate = dec!(0.03);

/// Principal bands of the cooperative's rate card. Lower bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalBracket {
    /// (10, 200]
    Small,
    /// (200, 400]
    Medium,
    /// (400, 600]
    Large,
    /// At or below 10, or above 600
    Unbracketed,
}

impl PrincipalBracket {
    pub fn classify(principal: Money) -> Self {
        if principal > dec!(10) && principal <= dec!(200) {
            Self::Small
        } else if principal > dec!(200) && principal <= dec!(400) {
            Self::Medium
        } else if principal > dec!(400) && principal <= dec!(600) {
            Self::Large
        } else {
            Self::Unbracketed
        }
    }

    /// Rates for the 2, 3 and 4 installment tiers, in that order.
    fn tier_rates(self) -> Option<[Rate; 3]> {
        match self {
            Self::Small => Some([dec!(0.04), dec!(0.03), dec!(0.025)]),
            Self::Medium => Some([dec!(0.02), dec!(0.0167), dec!(0.015)]),
            Self::Large => Some([dec!(0.025), dec!(0.02), dec!(0.0175)]),
            Self::Unbracketed => None,
        }
    }
}

impl std::fmt::Display for PrincipalBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Small => write!(f, "(10, 200]"),
            Self::Medium => write!(f, "(200, 400]"),
            Self::Large => write!(f, "(400, 600]"),
            Self::Unbracketed => write!(f, "outside (10, 600]"),
        }
    }
}

/// Snap an installment count to the nearest priced tier.
///
/// Distance is absolute difference; on a tie the lower tier wins.
pub fn snap_installment_count(count: u32) -> u32 {
    let mut best = INSTALLMENT_TIERS[0];
    for &tier in &INSTALLMENT_TIERS[1..] {
        if tier.abs_diff(count) < best.abs_diff(count) {
            best = tier;
        }
    }
    best
}

/// Weekly interest rate for a principal and installment count.
///
/// Never fails: principals outside (10, 600] get [`DEFAULT_WEEKLY_RATE`].
pub fn weekly_rate(principal: Money, installment_count: u32) -> Rate {
    let tier = snap_installment_count(installment_count);
    let Some(rates) = PrincipalBracket::classify(principal).tier_rates() else {
        return DEFAULT_WEEKLY_RATE;
    };
    INSTALLMENT_TIERS
        .iter()
        .position(|&t| t == tier)
        .map(|idx| rates[idx])
        .unwrap_or(DEFAULT_WEEKLY_RATE)
}

/// Everything the rate card says about a prospective loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateQuote {
    pub principal: Money,
    pub installment_count: u32,
    pub bracket: PrincipalBracket,
    pub priced_installments: u32,
    pub weekly_rate: Rate,
    pub uses_default_rate: bool,
    pub insurance_pct: Rate,
}

pub fn quote_rates(principal: Money, installment_count: u32) -> RateQuote {
    let bracket = PrincipalBracket::classify(principal);
    RateQuote {
        principal,
        installment_count,
        bracket,
        priced_installments: snap_installment_count(installment_count),
        weekly_rate: weekly_rate(principal, installment_count),
        uses_default_rate: bracket == PrincipalBracket::Unbracketed,
        insurance_pct: insurance_pct(principal),
    }
}

impl RateQuote {
    /// Weekly rate as a percentage, three decimals.
    pub fn weekly_rate_pct(&self) -> Decimal {
        (self.weekly_rate * dec!(100)).round_dp(3)
    }
}
