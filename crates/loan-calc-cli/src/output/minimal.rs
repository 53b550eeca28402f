use loan_calc_core::round_currency;
use serde_json::Value;

/// Print just the monthly payment.
///
/// Anything that is not a loan result falls back to its first field.
pub fn print_minimal(value: &Value) {
    if let Some(view) = super::loan_view(value) {
        println!("{}", round_currency(view.response.monthly_payment));
        return;
    }

    if let Value::Object(map) = value {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, super::format_scalar(val));
            return;
        }
    }

    println!("{}", super::format_scalar(value));
}
