use loan_calc_core::display::entry_payment;
use loan_calc_core::{round_currency, LoanResponse};
use serde_json::Value;
use std::io;

const SCHEDULE_HEADERS: [&str; 5] = ["month", "principal", "interest", "payment", "remainingBalance"];

/// Write output as CSV to stdout: one row per scheduled month, money at
/// currency precision.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match super::loan_view(value) {
        Some(view) => write_schedule(&mut wtr, &view.response),
        None => write_fields(&mut wtr, value),
    }

    let _ = wtr.flush();
}

fn write_schedule<W: io::Write>(wtr: &mut csv::Writer<W>, response: &LoanResponse) {
    let _ = wtr.write_record(SCHEDULE_HEADERS);
    for entry in &response.amortization_schedule {
        let _ = wtr.write_record([
            entry.month.to_string(),
            round_currency(entry.principal).to_string(),
            round_currency(entry.interest).to_string(),
            round_currency(entry_payment(entry)).to_string(),
            round_currency(entry.remaining_balance).to_string(),
        ]);
    }
}

/// Two-column CSV: field, value
fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) {
    let _ = wtr.write_record(["field", "value"]);
    if let Value::Object(map) = value {
        for (key, val) in map {
            let _ = wtr.write_record([key.as_str(), &super::format_scalar(val)]);
        }
    } else {
        let _ = wtr.write_record(["value", &super::format_scalar(value)]);
    }
}
