use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use abecoin_core::schedule::quote_rates;

/// Arguments for a rate-card lookup
#[derive(Args)]
pub struct RatesArgs {
    /// Loan amount (S/)
    #[arg(long)]
    pub principal: Decimal,

    /// Number of weekly installments
    #[arg(long)]
    pub installments: u32,
}

pub fn run_rates(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote = quote_rates(args.principal, args.installments);
    let mut value = serde_json::to_value(&quote)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "weekly_rate_pct".into(),
            Value::String(quote.weekly_rate_pct().normalize().to_string()),
        );
        map.insert("bracket".into(), Value::String(quote.bracket.to_string()));
    }
    Ok(value)
}
