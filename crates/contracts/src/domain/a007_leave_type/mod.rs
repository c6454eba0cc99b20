pub mod aggregate;
pub mod seed;

pub use aggregate::{LeaveCategory, LeaveType, LeaveTypeStatus};
