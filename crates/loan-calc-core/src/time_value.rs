use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::LoanCalcError;
use crate::types::{Money, Rate};
use crate::LoanCalcResult;

const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Monthly periodic rate from a nominal annual percentage (6 -> 0.005).
pub fn periodic_rate(annual_pct: Decimal) -> Rate {
    annual_pct / PERCENT / MONTHS_PER_YEAR
}

/// Discount factor (1 + rate)^-nper
pub fn discount_factor(rate: Rate, nper: u32) -> LoanCalcResult<Decimal> {
    let one_plus_r = Decimal::ONE + rate;
    if one_plus_r <= Decimal::ZERO {
        return Err(LoanCalcError::InvalidInput {
            field: "rate".into(),
            reason: "Periodic rate must be greater than -100%".into(),
        });
    }

    let v = Decimal::ONE / one_plus_r;
    v.checked_powi(i64::from(nper))
        .ok_or_else(|| LoanCalcError::Computation(format!("discount factor overflow at {nper} periods")))
}

/// Level payment that retires `principal` over `nper` periods at `rate`.
///
/// Equivalent to `P * r * (1+r)^n / ((1+r)^n - 1)`, evaluated as
/// `P * r / (1 - (1+r)^-n)` so the power term shrinks instead of growing.
/// Unrounded; callers round to currency precision.
pub fn annuity_payment(principal: Money, rate: Rate, nper: u32) -> LoanCalcResult<Money> {
    if nper == 0 {
        return Err(LoanCalcError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let annuity_factor = Decimal::ONE - discount_factor(rate, nper)?;
    if annuity_factor.is_zero() {
        return Err(LoanCalcError::Computation(
            "annuity factor is zero; rate too small for decimal precision".into(),
        ));
    }

    principal
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(annuity_factor))
        .ok_or_else(|| LoanCalcError::Computation("annuity payment overflow".into()))
}
