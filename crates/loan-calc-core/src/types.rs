use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.005 = 0.5% per period), except where a
/// field documents a percentage.
pub type Rate = Decimal;

/// Decimal places used for every displayed and accumulated money value.
pub const CURRENCY_DP: u32 = 2;

/// Shortest and longest loan terms accepted, in months.
pub const MIN_TERM_MONTHS: u32 = 1;
pub const MAX_TERM_MONTHS: u32 = 600;

/// Round a money value to currency precision, half-up. The result always
/// carries exactly `CURRENCY_DP` decimal places.
pub fn round_currency(value: Money) -> Money {
    let mut rounded = value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// How the nominal rate behaves over the term.
///
/// `Variable` is carried through to the response but is computed exactly
/// like `Fixed`; there is no rate-change model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InterestRateType {
    #[default]
    Fixed,
    Variable,
}

impl InterestRateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Variable => "VARIABLE",
        }
    }
}

impl std::fmt::Display for InterestRateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InterestRateType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(Self::Fixed),
            "VARIABLE" => Ok(Self::Variable),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Loan parameters as sent to `POST /api/loans/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Principal borrowed.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Money,
    /// Nominal annual rate as a percentage (e.g., 5.5 = 5.5% p.a.).
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub interest_rate: Decimal,
    pub term_in_months: u32,
    #[serde(default)]
    pub interest_rate_type: InterestRateType,
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationEntry {
    pub month: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub principal: Money,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub interest: Money,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub remaining_balance: Money,
}

/// Calculation result: the request echoed back plus payment figures and
/// the full schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Money,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub interest_rate: Decimal,
    pub term_in_months: u32,
    pub interest_rate_type: InterestRateType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub monthly_payment: Money,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_paid: Money,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_interest: Money,
    pub amortization_schedule: Vec<AmortizationEntry>,
}

impl LoanResponse {
    /// The request fields this response was computed from.
    pub fn request(&self) -> LoanRequest {
        LoanRequest {
            amount: self.amount,
            interest_rate: self.interest_rate,
            term_in_months: self.term_in_months,
            interest_rate_type: self.interest_rate_type,
        }
    }
}

// ---------------------------------------------------------------------------
// Computation envelope
// ---------------------------------------------------------------------------

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec!(1.005)), dec!(1.01));
        assert_eq!(round_currency(dec!(1.004)), dec!(1.00));
        assert_eq!(round_currency(dec!(2.675)), dec!(2.68));
        assert_eq!(round_currency(dec!(1000)).to_string(), "1000.00");
    }

    #[test]
    fn test_request_wire_shape() {
        let json = r#"{"amount":120000,"interestRate":6.5,"termInMonths":12,"interestRateType":"VARIABLE"}"#;
        let req: LoanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.amount, dec!(120000));
        assert_eq!(req.interest_rate, dec!(6.5));
        assert_eq!(req.term_in_months, 12);
        assert_eq!(req.interest_rate_type, InterestRateType::Variable);

        let out = serde_json::to_value(&req).unwrap();
        assert_eq!(out["interestRate"].to_string(), "6.5");
        assert_eq!(out["interestRateType"], "VARIABLE");
    }

    #[test]
    fn test_money_is_exact_on_the_wire() {
        let req = LoanRequest {
            amount: dec!(98765432109876543.21),
            interest_rate: dec!(0.125),
            term_in_months: 600,
            interest_rate_type: InterestRateType::Fixed,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"amount":98765432109876543.21,"interestRate":0.125,"termInMonths":600,"interestRateType":"FIXED"}"#
        );
        let back: LoanRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.amount.to_string(), "98765432109876543.21");
    }

    #[test]
    fn test_rate_type_defaults_to_fixed() {
        let json = r#"{"amount":1000,"interestRate":0,"termInMonths":10}"#;
        let req: LoanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.interest_rate_type, InterestRateType::Fixed);
    }

    #[test]
    fn test_unknown_rate_type_rejected() {
        let json = r#"{"amount":1000,"interestRate":0,"termInMonths":10,"interestRateType":"FLOATING"}"#;
        assert!(serde_json::from_str::<LoanRequest>(json).is_err());
    }
}
