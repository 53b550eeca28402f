pub mod loan;
pub mod serve;
