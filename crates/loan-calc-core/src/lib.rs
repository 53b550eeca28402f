pub mod error;
pub mod time_value;
pub mod types;
pub mod validation;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "display")]
pub mod display;

pub use error::LoanCalcError;
pub use types::*;
pub use validation::ValidationError;

/// Standard result type for all loan-calc operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
