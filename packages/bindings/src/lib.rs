use napi::Result as NapiResult;
use napi_derive::napi;

use loan_calc_core::validation::{check_loan_form, LoanForm};
use loan_calc_core::LoanRequest;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Full computation envelope for a `LoanRequest` JSON document.
#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    let input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_calc_core::amortization::calculate_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Check raw form input. A rejected form is a normal result
/// (`{"valid":false,"error":{...}}`); only malformed JSON throws.
#[napi]
pub fn validate_loan_form(form_json: String) -> NapiResult<String> {
    let form: LoanForm = serde_json::from_str(&form_json).map_err(to_napi_error)?;
    serde_json::to_string(&check_loan_form(&form)).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// `10.327,97 KM` for a plain number.
#[napi]
pub fn format_currency(value: f64) -> NapiResult<String> {
    let money = rust_decimal::Decimal::try_from(value).map_err(to_napi_error)?;
    Ok(loan_calc_core::display::format_currency(money))
}
