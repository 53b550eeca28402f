use clap::Args;
use serde_json::Value;
use std::time::Duration;

use loan_calc_core::amortization;
use loan_calc_core::validation::{validate_loan_form, LoanForm};
use loan_calc_core::LoanRequest;
use loan_calc_http::config::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use loan_calc_http::{ClientConfig, LoanClient};

use crate::input;

/// Loan parameters, as flags, a file, or a document piped on stdin
#[derive(Args)]
pub struct LoanArgs {
    /// Path to a JSON or YAML request file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal borrowed
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Nominal annual interest rate, in percent (e.g. 5.5)
    #[arg(long, allow_hyphen_values = true)]
    pub interest_rate: Option<String>,

    /// Loan term in months (1 to 600)
    #[arg(long, alias = "term", allow_hyphen_values = true)]
    pub term_in_months: Option<String>,

    /// FIXED or VARIABLE
    #[arg(long, default_value = "FIXED")]
    pub interest_rate_type: String,
}

/// Arguments for a local calculation
#[derive(Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for a calculation through the service
#[derive(Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Base URL of the calculation service
    #[arg(long, env = "LOAN_CALC_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "LOAN_CALC_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Do not retry after a timeout or connection failure
    #[arg(long)]
    pub no_retry: bool,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(&args.loan)?;
    let result = amortization::calculate_loan(&request)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_submit(args: SubmitArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(&args.loan)?;
    let config = ClientConfig {
        base_url: args.api_base_url,
        timeout: Duration::from_secs(args.timeout_secs),
        retry_transient: !args.no_retry,
    };
    let client = LoanClient::new(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let response = runtime.block_on(client.calculate(&request))?;
    Ok(serde_json::to_value(response)?)
}

/// Build a validated request from, in order of precedence, an input file,
/// individual flags, or a JSON/YAML document on stdin.
fn resolve_request(args: &LoanArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    let request = if let Some(ref path) = args.input {
        let request: LoanRequest = input::file::read_input(path)?;
        request.validate()?;
        request
    } else if args.amount.is_some()
        || args.interest_rate.is_some()
        || args.term_in_months.is_some()
    {
        let form = LoanForm {
            amount: args
                .amount
                .clone()
                .ok_or("--amount is required (or provide --input)")?,
            interest_rate: args
                .interest_rate
                .clone()
                .ok_or("--interest-rate is required (or provide --input)")?,
            term_in_months: args
                .term_in_months
                .clone()
                .ok_or("--term-in-months is required (or provide --input)")?,
            interest_rate_type: args.interest_rate_type.clone(),
        };
        validate_loan_form(&form)?
    } else if let Some(request) = input::stdin::read_stdin::<LoanRequest>()? {
        request.validate()?;
        request
    } else {
        return Err("--amount, --interest-rate and --term-in-months, --input <file>, or stdin required".into());
    };

    tracing::debug!(
        amount = %request.amount,
        interest_rate = %request.interest_rate,
        term_in_months = request.term_in_months,
        "resolved loan request"
    );
    Ok(request)
}
