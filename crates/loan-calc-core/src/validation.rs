//! Input validation for loan parameters.
//!
//! `validate_loan_form` turns the raw strings a user typed into a
//! `LoanRequest`, mirroring what the calculator form accepts. Checks run in
//! field order and stop at the first failure. `LoanRequest::validate`
//! applies the same range rules to an already-typed request.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::types::{InterestRateType, LoanRequest, MAX_TERM_MONTHS, MIN_TERM_MONTHS};

pub const AMOUNT_NOT_POSITIVE: &str = "amount must be positive";
pub const RATE_NEGATIVE: &str = "rate must be non-negative";
pub const TERM_OUT_OF_RANGE: &str = "term out of range";
pub const RATE_TYPE_UNKNOWN: &str = "interest rate type must be FIXED or VARIABLE";

/// A rejected input field. Displays as the user-facing message only.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Raw, unparsed form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanForm {
    pub amount: String,
    pub interest_rate: String,
    pub term_in_months: String,
    pub interest_rate_type: String,
}

/// Validate raw form input and build a request from it.
pub fn validate_loan_form(form: &LoanForm) -> Result<LoanRequest, ValidationError> {
    let amount = parse_number(&form.amount)
        .filter(|a| *a > Decimal::ZERO)
        .ok_or_else(|| ValidationError::new("amount", AMOUNT_NOT_POSITIVE))?;

    let interest_rate = parse_number(&form.interest_rate)
        .filter(|r| *r >= Decimal::ZERO)
        .ok_or_else(|| ValidationError::new("interestRate", RATE_NEGATIVE))?;

    let term_in_months = parse_number(&form.term_in_months)
        .and_then(parse_term)
        .ok_or_else(|| ValidationError::new("termInMonths", TERM_OUT_OF_RANGE))?;

    let interest_rate_type = InterestRateType::from_str(form.interest_rate_type.trim())
        .map_err(|_| ValidationError::new("interestRateType", RATE_TYPE_UNKNOWN))?;

    Ok(LoanRequest {
        amount,
        interest_rate,
        term_in_months,
        interest_rate_type,
    })
}

/// Outcome of a form check, for callers that report a rejection instead of
/// failing on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<LoanRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

pub fn check_loan_form(form: &LoanForm) -> FormCheck {
    match validate_loan_form(form) {
        Ok(request) => FormCheck {
            valid: true,
            request: Some(request),
            error: None,
        },
        Err(e) => FormCheck {
            valid: false,
            request: None,
            error: Some(e),
        },
    }
}

impl LoanRequest {
    /// Check the numeric ranges of an already-typed request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::new("amount", AMOUNT_NOT_POSITIVE));
        }
        if self.interest_rate < Decimal::ZERO {
            return Err(ValidationError::new("interestRate", RATE_NEGATIVE));
        }
        if !(MIN_TERM_MONTHS..=MAX_TERM_MONTHS).contains(&self.term_in_months) {
            return Err(ValidationError::new("termInMonths", TERM_OUT_OF_RANGE));
        }
        Ok(())
    }
}

/// Parse user-entered numeric text. Blank input reads as zero, the way a
/// browser number field does.
fn parse_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

fn parse_term(value: Decimal) -> Option<u32> {
    if !value.fract().is_zero() {
        return None;
    }
    value
        .to_u32()
        .filter(|t| (MIN_TERM_MONTHS..=MAX_TERM_MONTHS).contains(t))
}
