use loan_calc_core::amortization::build_schedule;
use loan_calc_core::{InterestRateType, LoanRequest};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Principal between 1.00 and 10,000,000.00, in cents.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (100i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Annual rate between 0% and 30%, in basis points; zero is weighted up.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        1 => Just(Decimal::ZERO),
        4 => (0i64..3_000i64).prop_map(|bps| Decimal::new(bps, 2)),
    ]
}

fn arb_request() -> impl Strategy<Value = LoanRequest> {
    (
        arb_amount(),
        arb_rate(),
        1u32..=600u32,
        prop::sample::select(vec![InterestRateType::Fixed, InterestRateType::Variable]),
    )
        .prop_map(|(amount, interest_rate, term_in_months, interest_rate_type)| LoanRequest {
            amount,
            interest_rate,
            term_in_months,
            interest_rate_type,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // ===================================================================
    // Principal is fully retired, and totals match the rows.
    // ===================================================================
    #[test]
    fn principal_sums_to_amount(req in arb_request()) {
        let out = build_schedule(&req).unwrap();
        let principal: Decimal = out.amortization_schedule.iter().map(|e| e.principal).sum();
        let interest: Decimal = out.amortization_schedule.iter().map(|e| e.interest).sum();

        prop_assert_eq!(principal, req.amount);
        prop_assert_eq!(interest, out.total_interest);
        prop_assert_eq!(principal + interest, out.total_paid);
    }

    // ===================================================================
    // One row per month, numbered 1..=term, ending at zero.
    // ===================================================================
    #[test]
    fn schedule_is_contiguous_and_terminates(req in arb_request()) {
        let out = build_schedule(&req).unwrap();
        prop_assert_eq!(out.amortization_schedule.len(), req.term_in_months as usize);

        let mut previous = out.amount;
        for (i, entry) in out.amortization_schedule.iter().enumerate() {
            prop_assert_eq!(entry.month as usize, i + 1);
            prop_assert!(entry.principal >= Decimal::ZERO);
            prop_assert!(entry.interest >= Decimal::ZERO);
            prop_assert!(entry.remaining_balance <= previous);
            previous = entry.remaining_balance;
        }
        prop_assert_eq!(previous, Decimal::ZERO);
    }

    // ===================================================================
    // Zero rate: no interest, equal principal except the last row, which
    // is never smaller than the others.
    // ===================================================================
    #[test]
    fn zero_rate_is_interest_free(amount in arb_amount(), term in 1u32..=600u32) {
        let req = LoanRequest {
            amount,
            interest_rate: Decimal::ZERO,
            term_in_months: term,
            interest_rate_type: InterestRateType::Fixed,
        };
        let out = build_schedule(&req).unwrap();
        prop_assert_eq!(out.total_interest, Decimal::ZERO);

        let rows = &out.amortization_schedule;
        for entry in rows {
            prop_assert!(entry.interest.is_zero());
        }
        for entry in &rows[..rows.len() - 1] {
            prop_assert_eq!(entry.principal, out.monthly_payment);
        }
        prop_assert!(rows[rows.len() - 1].principal >= out.monthly_payment);
    }

    // ===================================================================
    // Same input, same output.
    // ===================================================================
    #[test]
    fn calculation_is_idempotent(req in arb_request()) {
        prop_assert_eq!(build_schedule(&req).unwrap(), build_schedule(&req).unwrap());
    }
}
