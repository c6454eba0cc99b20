pub mod aggregate;
pub mod seed;

pub use aggregate::{ExitInterview, ExitInterviewStatus, ExitReason, Interviewer, KEY_REASON};
