use chrono::{Local, NaiveDate};
use loan_calc_core::display::{
    entry_payment, format_currency, interest_share, month_label, payment_date,
};
use loan_calc_core::LoanResponse;
use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables: a summary, then the month-by-month schedule.
pub fn print_table(value: &Value) {
    let Some(view) = super::loan_view(value) else {
        print_flat_object(value);
        return;
    };

    println!("{}", summary_table(&view.response));
    println!();
    println!(
        "{}",
        schedule_table(&view.response, Local::now().date_naive())
    );

    if !view.warnings.is_empty() {
        println!("\nWarnings:");
        for w in &view.warnings {
            println!("  - {}", w);
        }
    }

    if let Some(meth) = &view.methodology {
        println!("\nMethodology: {}", meth);
    }
}

fn summary_table(response: &LoanResponse) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["Loan amount".to_string(), format_currency(response.amount)]);
    builder.push_record([
        "Interest rate".to_string(),
        format!(
            "{} % ({})",
            response.interest_rate.normalize(),
            response.interest_rate_type
        ),
    ]);
    builder.push_record([
        "Term".to_string(),
        format!("{} months", response.term_in_months),
    ]);
    builder.push_record([
        "Monthly payment".to_string(),
        format_currency(response.monthly_payment),
    ]);
    builder.push_record([
        "Total interest".to_string(),
        format!(
            "{} ({} % of total paid)",
            format_currency(response.total_interest),
            interest_share(response)
        ),
    ]);
    builder.push_record(["Total paid".to_string(), format_currency(response.total_paid)]);
    Table::from(builder)
}

/// Schedule rows, labelled with calendar months counted from `start`.
fn schedule_table(response: &LoanResponse, start: NaiveDate) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Month", "Due", "Principal", "Interest", "Payment", "Balance"]);

    for entry in &response.amortization_schedule {
        let due = payment_date(start, entry.month)
            .map(month_label)
            .unwrap_or_default();
        builder.push_record([
            entry.month.to_string(),
            due,
            format_currency(entry.principal),
            format_currency(entry.interest),
            format_currency(entry_payment(entry)),
            format_currency(entry.remaining_balance),
        ]);
    }

    Table::from(builder)
}

fn print_flat_object(value: &Value) {
    match value {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                builder.push_record([key.as_str(), &super::format_scalar(val)]);
            }
            println!("{}", Table::from(builder));
        }
        _ => println!("{}", super::format_scalar(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_calc_core::amortization::build_schedule;
    use loan_calc_core::{InterestRateType, LoanRequest};
    use rust_decimal::Decimal;

    fn sample() -> LoanResponse {
        build_schedule(&LoanRequest {
            amount: Decimal::from(120_000),
            interest_rate: Decimal::from(6),
            term_in_months: 12,
            interest_rate_type: InterestRateType::Fixed,
        })
        .unwrap()
    }

    #[test]
    fn test_summary_uses_fixed_locale() {
        let rendered = summary_table(&sample()).to_string();
        assert!(rendered.contains("120.000,00 KM"));
        assert!(rendered.contains("10.327,97 KM"));
        assert!(rendered.contains("3.935,66 KM (3.2 % of total paid)"));
        assert!(rendered.contains("6 % (FIXED)"));
        assert!(rendered.contains("12 months"));
    }

    #[test]
    fn test_schedule_labels_months_from_start() {
        let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let rendered = schedule_table(&sample(), start).to_string();
        assert!(rendered.contains("Novembar 2026"));
        assert!(rendered.contains("Oktobar 2027"));
        assert!(rendered.contains("110.272,03 KM"));
        assert!(rendered.contains("10.327,99 KM"));
    }
}
