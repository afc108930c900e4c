use abecoin_core::schedule::LoanSchedule;
use abecoin_core::types::format_money;
use serde_json::Value;

use super::display_value;

/// Print only the amount the borrower will pay in total.
pub fn print_schedule_minimal(schedule: &LoanSchedule) {
    println!("{}", format_money(schedule.summary.total_payable));
}

/// Print the key answer of a flat result, falling back to its first field.
pub fn print_minimal(value: &Value) {
    let priority_keys = ["weekly_rate", "total_payable", "written"];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key).filter(|v| !v.is_null()) {
                println!("{}", display_value(val));
                return;
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, display_value(val));
            return;
        }
    }
    println!("{}", display_value(value));
}
