//! HTTP surface of the loan calculator: the axum service that exposes the
//! amortization engine, and the reqwest client the form layer calls it with.

pub mod client;
pub mod config;
pub mod error;
pub mod server;

pub use client::LoanClient;
pub use config::{ClientConfig, ServiceConfig};
pub use error::{ClientError, NetworkError};

/// Path of the calculation endpoint, relative to the API base URL.
pub const CALCULATE_PATH: &str = "/api/loans/calculate";
