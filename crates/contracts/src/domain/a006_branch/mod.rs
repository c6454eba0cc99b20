pub mod aggregate;
pub mod seed;

pub use aggregate::{Branch, BranchStatus, BranchType, KEY_BRANCH_TYPE};
