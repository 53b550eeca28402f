use clap::Args;
use std::net::SocketAddr;

use loan_calc_http::config::DEFAULT_BIND;
use loan_calc_http::{server, ServiceConfig};

/// Arguments for running the calculation service
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "LOAN_CALC_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
}

/// Serve until interrupted.
pub fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig { bind: args.bind };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(&config))?;
    Ok(())
}
