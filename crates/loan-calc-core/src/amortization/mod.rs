pub mod schedule;

pub use schedule::{build_schedule, calculate_loan, ScheduleAssumptions};
