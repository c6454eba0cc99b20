pub mod aggregate;
pub mod seed;

pub use aggregate::{UserAccount, UserRole, UserStatus, KEY_ROLE};
