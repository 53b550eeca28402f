mod commands;
mod input;
mod logger;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{CalculateArgs, SubmitArgs};
use commands::serve::ServeArgs;

/// Loan payment and amortization schedule calculator
#[derive(Parser)]
#[command(
    name = "loancalc",
    version,
    about = "Loan payment and amortization schedule calculator",
    long_about = "Validates loan parameters and computes the level monthly payment, \
                  totals and month-by-month amortization schedule with decimal \
                  precision, either locally or through the calculation service. \
                  Also runs that service."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a loan schedule locally
    Calculate(CalculateArgs),
    /// Send a loan to the calculation service and print its response
    Submit(SubmitArgs),
    /// Run the calculation service (POST /api/loans/calculate)
    Serve(ServeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::loan::run_calculate(args),
        Commands::Submit(args) => commands::loan::run_submit(args),
        Commands::Serve(args) => {
            if let Err(e) = commands::serve::run_serve(args) {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
            return;
        }
        Commands::Version => {
            println!("loancalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
