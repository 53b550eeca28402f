pub mod csv_out;
pub mod minimal;
pub mod table;

use loan_calc_core::LoanResponse;
use serde_json::Value;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pretty-print JSON to stdout.
fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// A loan result, from either a computation envelope or a bare service
/// response.
pub struct LoanView {
    pub response: LoanResponse,
    pub warnings: Vec<String>,
    pub methodology: Option<String>,
}

pub fn loan_view(value: &Value) -> Option<LoanView> {
    let body = value.get("result").unwrap_or(value);
    let response: LoanResponse = serde_json::from_value(body.clone()).ok()?;

    let warnings = value
        .get("warnings")
        .and_then(Value::as_array)
        .map(|ws| {
            ws.iter()
                .filter_map(|w| w.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    let methodology = value
        .get("methodology")
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(LoanView {
        response,
        warnings,
        methodology,
    })
}

/// Plain rendering of a scalar JSON value.
fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
