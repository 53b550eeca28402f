//! Level-payment (annuity) amortization schedules.
//!
//! Every money value is rounded to currency precision (2 dp, half-up) as it
//! is produced: the monthly payment once, then each month's interest. A
//! zero-rate payment is rounded toward zero instead, so the level rows can
//! never retire the loan before the final month. The
//! principal portion is the rounded payment less the rounded interest, so
//! row values sum exactly to the reported totals. The final month pays off
//! whatever balance remains, absorbing the accumulated rounding drift, and
//! the balance lands on exactly zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanCalcError;
use crate::time_value::{annuity_payment, periodic_rate};
use crate::types::{
    round_currency, with_metadata, AmortizationEntry, ComputationOutput, InterestRateType,
    LoanRequest, LoanResponse, Money, Rate, CURRENCY_DP,
};
use crate::LoanCalcResult;

// ---------------------------------------------------------------------------
// Assumptions
// ---------------------------------------------------------------------------

/// Derived parameters reported in the output envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAssumptions {
    pub request: LoanRequest,
    /// Rate applied each month (annual percentage / 100 / 12).
    pub monthly_rate: Rate,
    pub rounding: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the payment, totals and full schedule, wrapped with metadata.
pub fn calculate_loan(
    input: &LoanRequest,
) -> LoanCalcResult<ComputationOutput<LoanResponse>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let response = build_schedule(input)?;

    if input.interest_rate_type == InterestRateType::Variable {
        warnings.push("VARIABLE rate type is computed as a fixed rate over the full term".into());
    }
    if input.interest_rate.is_zero() {
        warnings.push("Zero interest rate: straight-line repayment".into());
    }

    let assumptions = ScheduleAssumptions {
        request: response.request(),
        monthly_rate: periodic_rate(input.interest_rate),
        rounding: "2 dp, half-up, per entry; final month absorbs residual".into(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-payment annuity amortization",
        &assumptions,
        warnings,
        elapsed,
        response,
    ))
}

/// Compute the bare response: payment, totals and schedule.
///
/// Fails before any computation if the request is out of range; never
/// returns a partial schedule.
pub fn build_schedule(input: &LoanRequest) -> LoanCalcResult<LoanResponse> {
    validate_request(input)?;

    let amount = round_currency(input.amount);
    if amount <= Decimal::ZERO {
        return Err(LoanCalcError::InvalidInput {
            field: "amount".into(),
            reason: "amount rounds to zero at currency precision".into(),
        });
    }

    let term = input.term_in_months;
    let rate = periodic_rate(input.interest_rate);
    let monthly_payment = level_payment(amount, rate, term)?;

    let mut schedule = Vec::with_capacity(term as usize);
    let mut balance = amount;
    let mut total_principal = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=term {
        let interest = round_currency(monthly_interest(balance, rate)?);

        let mut principal = monthly_payment - interest;
        if month == term || principal > balance {
            principal = balance;
        }
        if principal < Decimal::ZERO {
            return Err(LoanCalcError::Computation(format!(
                "negative principal {principal} in month {month}"
            )));
        }

        balance -= principal;
        total_principal += principal;
        total_interest += interest;

        schedule.push(AmortizationEntry {
            month,
            principal,
            interest,
            remaining_balance: balance,
        });
    }

    if !balance.is_zero() || total_principal != amount {
        return Err(LoanCalcError::Computation(format!(
            "schedule did not retire the principal: residual {balance}"
        )));
    }

    Ok(LoanResponse {
        amount,
        interest_rate: input.interest_rate,
        term_in_months: term,
        interest_rate_type: input.interest_rate_type,
        monthly_payment,
        total_paid: total_principal + total_interest,
        total_interest,
        amortization_schedule: schedule,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_request(input: &LoanRequest) -> LoanCalcResult<()> {
    input
        .validate()
        .map_err(|e| LoanCalcError::InvalidInput {
            field: e.field.into(),
            reason: e.message.into(),
        })
}

/// Rounded level payment. Straight-line (zero-rate) payments are truncated
/// to the cent so that `(term - 1) * payment <= amount`.
fn level_payment(amount: Money, rate: Rate, term: u32) -> LoanCalcResult<Money> {
    let exact = annuity_payment(amount, rate, term)?;
    if !rate.is_zero() {
        return Ok(round_currency(exact));
    }
    let mut truncated = exact.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::ToZero);
    truncated.rescale(CURRENCY_DP);
    Ok(truncated)
}

fn monthly_interest(balance: Money, rate: Rate) -> LoanCalcResult<Money> {
    balance
        .checked_mul(rate)
        .ok_or_else(|| LoanCalcError::Computation("interest overflow".into()))
}
