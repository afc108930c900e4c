use rust_decimal_macros::dec;

use crate::types::*;

/// Credit-life insurance (degravamen) percentage charged on the principal.
///
/// Tiers: up to 200 pays 0.8%, up to 400 pays 1%, anything above pays 1.5%.
pub fn insurance_pct(principal: Money) -> Rate {
    if principal <= dec!(200) {
        dec!(0.008)
    } else if principal <= dec!(400) {
        dec!(0.01)
    } else {
        dec!(0.015)
    }
}
